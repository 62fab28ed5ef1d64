//! General Settings Record

use jiff::Timestamp;

/// Base currency code used until the company picks its own.
pub const DEFAULT_BASE_CURRENCY: &str = "IDR";

/// Company-wide settings. Exactly one instance exists; it is updated in place
/// and never deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneralSettings {
    pub company_name: String,
    pub tax_number: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub base_currency: String,
    pub e_invoice_enabled: bool,
    pub updated_at: Timestamp,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            company_name: "BizDesk".to_string(),
            tax_number: None,
            address: None,
            phone: None,
            email: None,
            base_currency: DEFAULT_BASE_CURRENCY.to_string(),
            e_invoice_enabled: false,
            updated_at: Timestamp::now(),
        }
    }
}
