//! General Settings Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use bizdesk_app::domain::settings::{data::GeneralSettingsUpdate, records::GeneralSettings};

/// General Settings Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeneralSettingsResponse {
    pub company_name: String,
    pub tax_number: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub base_currency: String,
    pub e_invoice_enabled: bool,
    pub updated_at: String,
}

impl From<GeneralSettings> for GeneralSettingsResponse {
    fn from(settings: GeneralSettings) -> Self {
        Self {
            company_name: settings.company_name,
            tax_number: settings.tax_number,
            address: settings.address,
            phone: settings.phone,
            email: settings.email,
            base_currency: settings.base_currency,
            e_invoice_enabled: settings.e_invoice_enabled,
            updated_at: settings.updated_at.to_string(),
        }
    }
}

/// Update General Settings Request
///
/// Omitted fields keep their value; an empty string clears an optional one.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct UpdateGeneralSettingsRequest {
    pub company_name: Option<String>,
    pub tax_number: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub base_currency: Option<String>,
    pub e_invoice_enabled: Option<bool>,
}

impl From<UpdateGeneralSettingsRequest> for GeneralSettingsUpdate {
    fn from(request: UpdateGeneralSettingsRequest) -> Self {
        Self {
            company_name: request.company_name,
            tax_number: request.tax_number,
            address: request.address,
            phone: request.phone,
            email: request.email,
            base_currency: request.base_currency,
            e_invoice_enabled: request.e_invoice_enabled,
        }
    }
}
