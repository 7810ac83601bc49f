use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
    /// The manifest or map image could not be loaded or sampled.
    Failed,
}

// Transition to Running once the dot map exists
pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.dot_map_created && !loading_progress.failed {
        info!("→ Dot map ready, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}

pub fn report_failure() {
    error!("→ Dot map could not be created, the map stays empty");
}
