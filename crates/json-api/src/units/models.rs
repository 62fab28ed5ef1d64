//! Unit Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bizdesk_app::domain::units::{
    data::{NewUnit, UnitUpdate},
    records::UnitRecord,
};

/// Unit Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UnitResponse {
    pub id: Uuid,
    pub name: String,
    pub symbol: String,
    pub is_base_unit: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<UnitRecord> for UnitResponse {
    fn from(unit: UnitRecord) -> Self {
        Self {
            id: unit.uuid.into(),
            name: unit.name,
            symbol: unit.symbol,
            is_base_unit: unit.is_base_unit,
            created_at: unit.created_at.to_string(),
            updated_at: unit.updated_at.to_string(),
        }
    }
}

/// Create Unit Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateUnitRequest {
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub is_base_unit: bool,
}

impl From<CreateUnitRequest> for NewUnit {
    fn from(request: CreateUnitRequest) -> Self {
        NewUnit {
            name: request.name,
            symbol: request.symbol,
            is_base_unit: request.is_base_unit,
        }
    }
}

/// Update Unit Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct UpdateUnitRequest {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub is_base_unit: Option<bool>,
}

impl From<UpdateUnitRequest> for UnitUpdate {
    fn from(request: UpdateUnitRequest) -> Self {
        UnitUpdate {
            name: request.name,
            symbol: request.symbol,
            is_base_unit: request.is_base_unit,
        }
    }
}
