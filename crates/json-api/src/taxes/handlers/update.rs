//! Update Tax Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use tracing::info;
use uuid::Uuid;

use crate::{
    extensions::*,
    taxes::models::{TaxResponse, UpdateTaxRequest},
};

/// Update Tax Handler
///
/// Setting `isDefault` clears it on every other tax.
#[endpoint(
    tags("taxes"),
    summary = "Update Tax",
    responses(
        (status_code = StatusCode::OK, description = "Tax updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Tax not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid tax"),
    ),
)]
#[tracing::instrument(name = "taxes.update", skip(uuid, json, depot), err)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<UpdateTaxRequest>,
    depot: &mut Depot,
) -> Result<Json<TaxResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let tax = state
        .app
        .taxes
        .update_tax(uuid.into_inner().into(), json.into_inner().into())
        .await
        .or_status()?;

    info!(tax_uuid = %tax.uuid, is_default = tax.is_default, "updated tax");

    Ok(Json(tax.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use bizdesk_app::domain::taxes::{MockTaxesService, data::TaxUpdate, records::TaxUuid};

    use super::{super::tests::*, *};

    #[tokio::test]
    async fn promoting_to_default_is_forwarded() -> TestResult {
        let uuid = TaxUuid::new();
        let mut taxes = MockTaxesService::new();

        taxes
            .expect_update_tax()
            .once()
            .withf(move |u, update| {
                *u == uuid
                    && *update
                        == TaxUpdate {
                            is_default: Some(true),
                            ..TaxUpdate::default()
                        }
            })
            .return_once(move |_, _| Ok(make_tax(uuid, 2, true)));

        let mut res = TestClient::put(format!("http://example.com/api/taxes/{uuid}"))
            .json(&json!({ "isDefault": true }))
            .send(&taxes_service(
                taxes,
                Router::with_path("api/taxes/{uuid}").put(handler),
            ))
            .await;

        let body: TaxResponse = res.take_json().await?;

        assert!(body.is_default, "tax should be the default");

        Ok(())
    }
}
