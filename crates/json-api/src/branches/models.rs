//! Branch Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bizdesk_app::domain::branches::{
    data::{BranchUpdate, NewBranch},
    records::BranchRecord,
};

/// Branch Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BranchResponse {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub is_main: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<BranchRecord> for BranchResponse {
    fn from(branch: BranchRecord) -> Self {
        Self {
            id: branch.uuid.into(),
            name: branch.name,
            address: branch.address,
            phone: branch.phone,
            is_main: branch.is_main,
            created_at: branch.created_at.to_string(),
            updated_at: branch.updated_at.to_string(),
        }
    }
}

/// Create Branch Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateBranchRequest {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_main: bool,
}

impl From<CreateBranchRequest> for NewBranch {
    fn from(request: CreateBranchRequest) -> Self {
        NewBranch {
            name: request.name,
            address: request.address,
            phone: request.phone,
            is_main: request.is_main,
        }
    }
}

/// Update Branch Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct UpdateBranchRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub is_main: Option<bool>,
}

impl From<UpdateBranchRequest> for BranchUpdate {
    fn from(request: UpdateBranchRequest) -> Self {
        BranchUpdate {
            name: request.name,
            address: request.address,
            phone: request.phone,
            is_main: request.is_main,
        }
    }
}
