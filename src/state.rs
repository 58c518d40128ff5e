use std::sync::Arc;

use crate::application::services::{AdminService, ChirpService, UserService};
use crate::domain::repositories::{ChirpRepository, UserRepository};
use crate::domain::visit_counter::VisitCounter;

/// Shared state injected into every handler.
///
/// The store (behind the services) and the visit counter are the only
/// state shared across requests.
#[derive(Clone)]
pub struct AppState {
    pub chirp_service: Arc<ChirpService>,
    pub user_service: Arc<UserService>,
    pub admin_service: Arc<AdminService>,
    pub visits: Arc<VisitCounter>,
}

impl AppState {
    /// Wires services over the given repositories with a fresh visit counter.
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        chirp_repository: Arc<dyn ChirpRepository>,
    ) -> Self {
        let visits = Arc::new(VisitCounter::new());

        Self {
            chirp_service: Arc::new(ChirpService::new(chirp_repository)),
            user_service: Arc::new(UserService::new(user_repository.clone())),
            admin_service: Arc::new(AdminService::new(user_repository, visits.clone())),
            visits,
        }
    }
}
