use bevy::prelude::*;

use crate::engine::context::DotMapContext;
use crate::engine::surface::{DotInstances, TooltipOverlay};

pub fn advance_dot_map(
    mut context: ResMut<DotMapContext>,
    mut instances: ResMut<DotInstances>,
    mut tooltip: ResMut<TooltipOverlay>,
) {
    context.frame(&mut *instances, &mut *tooltip);
}

/// Tear the map down once an exit has been requested.
pub fn dispose_on_exit(
    mut exits: EventReader<AppExit>,
    mut context: ResMut<DotMapContext>,
    mut instances: ResMut<DotInstances>,
    mut tooltip: ResMut<TooltipOverlay>,
) {
    if exits.read().next().is_none() || !context.is_ready() {
        return;
    }
    let fresh = DotMapContext::new(context.config().clone(), *context.interaction().viewport());
    let finished = std::mem::replace(&mut *context, fresh);
    finished.dispose(&mut *instances, &mut *tooltip);
}
