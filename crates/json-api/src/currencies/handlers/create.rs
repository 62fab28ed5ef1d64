//! Create Currency Handler

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};
use tracing::info;

use crate::{
    currencies::models::{CreateCurrencyRequest, CurrencyResponse},
    extensions::*,
};

/// Create Currency Handler
#[endpoint(
    tags("currencies"),
    summary = "Create Currency",
    responses(
        (status_code = StatusCode::CREATED, description = "Currency created"),
        (status_code = StatusCode::CONFLICT, description = "Code in use or base currency already set"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid currency"),
    ),
)]
#[tracing::instrument(
    name = "currencies.create",
    skip(json, depot, res),
    fields(code = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCurrencyRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CurrencyResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let request = json.into_inner();

    tracing::Span::current().record("code", tracing::field::display(&request.code));

    let currency = state
        .app
        .currencies
        .create_currency(request.into())
        .await
        .or_status()?;

    res.add_header(LOCATION, format!("/api/currencies/{}", currency.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    info!(currency_uuid = %currency.uuid, code = %currency.code, "created currency");

    Ok(Json(currency.into()))
}
