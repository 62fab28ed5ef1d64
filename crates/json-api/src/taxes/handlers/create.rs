//! Create Tax Handler

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};
use tracing::info;

use crate::{
    extensions::*,
    taxes::models::{CreateTaxRequest, TaxResponse},
};

/// Create Tax Handler
///
/// Creating a default tax clears the flag on the previous default.
#[endpoint(
    tags("taxes"),
    summary = "Create Tax",
    responses(
        (status_code = StatusCode::CREATED, description = "Tax created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid tax"),
    ),
)]
#[tracing::instrument(name = "taxes.create", skip(json, depot, res), err)]
pub(crate) async fn handler(
    json: JsonBody<CreateTaxRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<TaxResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let tax = state
        .app
        .taxes
        .create_tax(json.into_inner().into())
        .await
        .or_status()?;

    res.add_header(LOCATION, format!("/api/taxes/{}", tax.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    info!(tax_uuid = %tax.uuid, is_default = tax.is_default, "created tax");

    Ok(Json(tax.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::TestClient;
    use serde_json::json;

    use bizdesk_app::domain::{
        RegistryError,
        taxes::{MockTaxesService, data::NewTax, records::TaxUuid},
    };

    use super::{super::tests::*, *};

    fn make_service(taxes: MockTaxesService) -> Service {
        taxes_service(taxes, Router::with_path("api/taxes").post(handler))
    }

    #[tokio::test]
    async fn create_default_tax_returns_201() {
        let uuid = TaxUuid::new();
        let mut taxes = MockTaxesService::new();

        taxes
            .expect_create_tax()
            .once()
            .withf(|new| {
                *new == NewTax {
                    name: "PPN".to_string(),
                    rate: Decimal::new(115, 1),
                    is_default: true,
                }
            })
            .return_once(move |_| Ok(make_tax(uuid, 11, true)));

        let res = TestClient::post("http://example.com/api/taxes")
            .json(&json!({ "name": "PPN", "rate": 11.5, "isDefault": true }))
            .send(&make_service(taxes))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
    }

    #[tokio::test]
    async fn rate_above_hundred_returns_400() {
        let mut taxes = MockTaxesService::new();

        taxes.expect_create_tax().once().return_once(|_| {
            Err(RegistryError::InvalidField {
                field: "rate",
                reason: "must be between 0 and 100",
            })
        });

        let res = TestClient::post("http://example.com/api/taxes")
            .json(&json!({ "name": "PPN", "rate": 150 }))
            .send(&make_service(taxes))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
