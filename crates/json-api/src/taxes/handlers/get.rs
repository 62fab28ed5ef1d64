//! Get Tax Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, taxes::models::TaxResponse};

/// Get Tax Handler
#[endpoint(
    tags("taxes"),
    summary = "Get Tax",
    responses(
        (status_code = StatusCode::OK, description = "Tax found"),
        (status_code = StatusCode::NOT_FOUND, description = "Tax not found"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<TaxResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let tax = state
        .app
        .taxes
        .get_tax(uuid.into_inner().into())
        .await
        .or_status()?;

    Ok(Json(tax.into()))
}
