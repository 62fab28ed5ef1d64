//! Delete Category Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;
use uuid::Uuid;

use crate::extensions::*;

/// Delete Category Handler
#[endpoint(
    tags("categories"),
    summary = "Delete Product Category",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Category deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Category not found"),
        (status_code = StatusCode::CONFLICT, description = "Category still has sub-categories"),
    ),
)]
#[tracing::instrument(name = "categories.delete", skip(uuid, depot, res), err)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.state_or_500()?;
    let uuid = uuid.into_inner();

    state
        .app
        .categories
        .delete_category(uuid.into())
        .await
        .or_status()?;

    info!(category_uuid = %uuid, "deleted category");

    res.status_code(StatusCode::NO_CONTENT);

    Ok(())
}
