use freightcast_model::SharedEngine;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<SharedEngine>,
}

impl AppState {
    pub fn new(engine: SharedEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}
