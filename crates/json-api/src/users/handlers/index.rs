//! User Index Handler

use salvo::prelude::*;

use crate::{extensions::*, users::models::UserResponse};

/// User Index Handler
///
/// Returns every user in creation order.
#[endpoint(tags("users"), summary = "List Users")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<UserResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let users = state.app.users.list_users().await;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}
