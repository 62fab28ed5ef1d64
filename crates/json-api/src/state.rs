//! State

use std::sync::Arc;

use bizdesk_app::context::AppContext;

use crate::products::ProductsRepository;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) products: Arc<dyn ProductsRepository>,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, products: Arc<dyn ProductsRepository>) -> Self {
        Self { app, products }
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("app", &self.app)
            .finish_non_exhaustive()
    }
}
