//! Update Discount Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use tracing::info;
use uuid::Uuid;

use bizdesk_app::domain::discounts::data::DiscountUpdate;

use crate::{
    discounts::models::{DiscountResponse, UpdateDiscountRequest},
    extensions::*,
};

/// Update Discount Handler
#[endpoint(
    tags("discounts"),
    summary = "Update Discount",
    responses(
        (status_code = StatusCode::OK, description = "Discount updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Discount not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid discount"),
    ),
)]
#[tracing::instrument(name = "discounts.update", skip(uuid, json, depot), err)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<UpdateDiscountRequest>,
    depot: &mut Depot,
) -> Result<Json<DiscountResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let update = DiscountUpdate::try_from(json.into_inner())?;

    let discount = state
        .app
        .discounts
        .update_discount(uuid.into_inner().into(), update)
        .await
        .or_status()?;

    info!(discount_uuid = %discount.uuid, "updated discount");

    Ok(Json(discount.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::TestClient;
    use serde_json::json;

    use bizdesk_app::domain::discounts::{
        MockDiscountsService,
        records::{DiscountUuid, DiscountValue},
    };

    use super::{super::tests::*, *};

    #[tokio::test]
    async fn switching_type_replaces_the_value() {
        let uuid = DiscountUuid::new();
        let value = DiscountValue::Percentage(Decimal::from(10));
        let mut discounts = MockDiscountsService::new();

        discounts
            .expect_update_discount()
            .once()
            .withf(move |u, update| {
                *u == uuid
                    && *update
                        == DiscountUpdate {
                            value: Some(value),
                            ..DiscountUpdate::default()
                        }
            })
            .return_once(move |_, _| Ok(make_discount(uuid, value)));

        let res = TestClient::put(format!("http://example.com/api/discounts/{uuid}"))
            .json(&json!({ "discountType": "percentage", "rate": 10 }))
            .send(&discounts_service(
                discounts,
                Router::with_path("api/discounts/{uuid}").put(handler),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
    }
}
