//! State

use std::{path::PathBuf, sync::Arc};

use till_app::context::AppContext;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// Directory uploaded item images are written to.
    pub(crate) assets_dir: PathBuf,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, assets_dir: PathBuf) -> Self {
        Self { app, assets_dir }
    }

    #[must_use]
    pub(crate) fn shared(app: AppContext, assets_dir: PathBuf) -> Arc<Self> {
        Arc::new(Self::new(app, assets_dir))
    }
}
