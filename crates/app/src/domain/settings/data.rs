//! General Settings Data

/// Partial update; `None` leaves a field unchanged and a blank optional text
/// field clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneralSettingsUpdate {
    pub company_name: Option<String>,
    pub tax_number: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub base_currency: Option<String>,
    pub e_invoice_enabled: Option<bool>,
}
