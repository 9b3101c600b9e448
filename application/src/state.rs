use rbatis::RBatis;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub rb: Arc<RBatis>,
}
