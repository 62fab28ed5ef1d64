//! Create Discount Handler

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};
use tracing::info;

use bizdesk_app::domain::discounts::data::NewDiscount;

use crate::{
    discounts::models::{CreateDiscountRequest, DiscountResponse},
    extensions::*,
};

/// Create Discount Handler
///
/// Creating a default discount clears the flag on the previous default.
#[endpoint(
    tags("discounts"),
    summary = "Create Discount",
    responses(
        (status_code = StatusCode::CREATED, description = "Discount created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid discount"),
    ),
)]
#[tracing::instrument(name = "discounts.create", skip(json, depot, res), err)]
pub(crate) async fn handler(
    json: JsonBody<CreateDiscountRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<DiscountResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let discount = NewDiscount::try_from(json.into_inner())?;

    let discount = state
        .app
        .discounts
        .create_discount(discount)
        .await
        .or_status()?;

    res.add_header(LOCATION, format!("/api/discounts/{}", discount.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    info!(discount_uuid = %discount.uuid, "created discount");

    Ok(Json(discount.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use bizdesk_app::domain::discounts::{
        MockDiscountsService,
        records::{DiscountUuid, DiscountValue},
    };

    use super::{super::tests::*, *};

    fn make_service(discounts: MockDiscountsService) -> Service {
        discounts_service(discounts, Router::with_path("api/discounts").post(handler))
    }

    #[tokio::test]
    async fn fixed_discount_is_created() -> TestResult {
        let uuid = DiscountUuid::new();
        let value = DiscountValue::FixedAmount(Decimal::from(20_000));
        let mut discounts = MockDiscountsService::new();

        discounts
            .expect_create_discount()
            .once()
            .withf(move |new| {
                *new == NewDiscount {
                    name: "Lebaran".to_string(),
                    value,
                    is_default: false,
                }
            })
            .return_once(move |_| Ok(make_discount(uuid, value)));

        let mut res = TestClient::post("http://example.com/api/discounts")
            .json(&json!({ "name": "Lebaran", "discountType": "fixed", "amount": 20000 }))
            .send(&make_service(discounts))
            .await;

        let body: DiscountResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.amount, Some(Decimal::from(20_000)));
        assert_eq!(body.rate, None);

        Ok(())
    }

    #[tokio::test]
    async fn percentage_without_rate_returns_400() {
        let mut discounts = MockDiscountsService::new();

        discounts.expect_create_discount().never();

        let res = TestClient::post("http://example.com/api/discounts")
            .json(&json!({ "name": "Member", "discountType": "percentage" }))
            .send(&make_service(discounts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
