use std::sync::Arc;

use challenge_core::ChallengeController;

#[derive(Clone)]
pub struct ServerState {
    controller: Arc<ChallengeController>,
}

impl From<Arc<ChallengeController>> for ServerState {
    fn from(controller: Arc<ChallengeController>) -> Self {
        Self { controller }
    }
}

impl ServerState {
    pub fn controller(&self) -> Arc<ChallengeController> {
        self.controller.clone()
    }
}
