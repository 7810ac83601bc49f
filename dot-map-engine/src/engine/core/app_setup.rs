use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::render_settings::BACKGROUND_COLOR;

use crate::engine::camera::ViewportRect;
use crate::engine::config::{DotMapConfig, color_from_u32};
use crate::engine::context::DotMapContext;
use crate::engine::core::app_state::{AppState, report_failure, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::interaction::PointerMessage;
// Loading
use crate::engine::loading::manifest::MapManifest;
use crate::engine::loading::manifest_loader::{
    ManifestLoader, create_dot_map_when_ready, load_manifest_system, reload_on_asset_change,
    start_loading,
};
use crate::engine::loading::progress::LoadingProgress;
// Scene mirrors
use crate::engine::scene::camera_sync::{spawn_map_camera, sync_map_camera};
use crate::engine::scene::dots::{DotMeshCache, sync_dot_entities};
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::scene::tooltip_ui::{spawn_tooltip_ui, sync_tooltip_ui};
use crate::engine::surface::{DotInstances, TooltipOverlay};
// Runtime
use crate::engine::systems::frame::{advance_dot_map, dispose_on_exit};
use crate::engine::systems::input::{
    CursorTracker, dispatch_pointer_messages, forward_window_events,
};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        // Registers MapManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<MapManifest>::new(&["json"]));

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<DotInstances>()
        .init_resource::<TooltipOverlay>()
        .init_resource::<DotMeshCache>()
        .init_resource::<CursorTracker>()
        .insert_resource(DotMapContext::new(
            DotMapConfig::default(),
            ViewportRect::default(),
        ))
        .insert_resource(ClearColor(color_from_u32(BACKGROUND_COLOR)))
        .add_event::<PointerMessage>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                load_manifest_system,
                create_dot_map_when_ready,
                transition_to_running,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(OnEnter(AppState::Failed), report_failure);

    // Input is forwarded in every state; the context drops what it cannot use yet.
    app.add_systems(
        Update,
        (forward_window_events, dispatch_pointer_messages).chain(),
    );

    app.add_systems(
        Update,
        (
            reload_on_asset_change,
            advance_dot_map,
            sync_dot_entities,
            sync_map_camera,
            sync_tooltip_ui,
        )
            .chain()
            .after(dispatch_pointer_messages)
            .run_if(in_state(AppState::Running)),
    );

    app.add_systems(Last, dispose_on_exit);

    app
}

// Startup system: size the context to the window and spawn the scene
fn setup(
    mut commands: Commands,
    mut context: ResMut<DotMapContext>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    info!("=== DOT MAP ===");

    if let Ok(window) = windows.single() {
        let viewport = ViewportRect::new(0.0, 0.0, window.width(), window.height());
        *context = DotMapContext::new(context.config().clone(), viewport);
    }

    spawn_map_camera(&mut commands, context.camera());
    spawn_lighting(&mut commands);
    spawn_tooltip_ui(&mut commands);
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
