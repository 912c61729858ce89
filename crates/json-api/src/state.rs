//! State

use std::sync::Arc;

use bliss_app::context::AppContext;

use crate::config::AppEnvironment;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) environment: AppEnvironment,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, environment: AppEnvironment) -> Self {
        Self { app, environment }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, environment: AppEnvironment) -> Arc<Self> {
        Arc::new(Self::new(app, environment))
    }
}
