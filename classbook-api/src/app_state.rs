use std::sync::Arc;

use crate::domain::ports::inbound::RosterService;

#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<dyn RosterService>,
}

impl AppState {
    pub fn new(roster: Arc<dyn RosterService>) -> Self {
        Self { roster }
    }
}
