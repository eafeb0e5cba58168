use std::sync::Arc;

use origin_gatekeeper::{AllowListStore, Gatekeeper};

pub type SharedGatekeeper = Arc<Gatekeeper<Arc<AllowListStore>>>;

#[derive(Clone)]
pub struct AppState {
    pub gatekeeper: SharedGatekeeper,
    pub store: Arc<AllowListStore>,
}

pub mod middleware;
