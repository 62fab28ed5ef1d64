//! Branch Index Handler

use salvo::prelude::*;

use crate::{branches::models::BranchResponse, extensions::*};

/// Branch Index Handler
#[endpoint(tags("branches"), summary = "List Branches")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<BranchResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let branches = state.app.branches.list_branches().await;

    Ok(Json(branches.into_iter().map(Into::into).collect()))
}
