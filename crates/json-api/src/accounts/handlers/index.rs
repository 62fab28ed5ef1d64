//! Account Index Handler

use salvo::prelude::*;

use crate::{accounts::models::AccountResponse, extensions::*};

/// Account Index Handler
#[endpoint(tags("accounts"), summary = "List Accounts")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<AccountResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let accounts = state.app.accounts.list_accounts().await;

    Ok(Json(accounts.into_iter().map(Into::into).collect()))
}
