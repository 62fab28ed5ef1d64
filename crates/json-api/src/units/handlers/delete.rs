//! Delete Unit Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;
use uuid::Uuid;

use crate::extensions::*;

/// Delete Unit Handler
#[endpoint(
    tags("units"),
    summary = "Delete Unit of Measure",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Unit deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Unit not found"),
    ),
)]
#[tracing::instrument(name = "units.delete", skip(uuid, depot, res), err)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.state_or_500()?;
    let uuid = uuid.into_inner();

    state.app.units.delete_unit(uuid.into()).await.or_status()?;

    info!(unit_uuid = %uuid, "deleted unit");

    res.status_code(StatusCode::NO_CONTENT);

    Ok(())
}
