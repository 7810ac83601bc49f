use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::path::{MANIFEST_FILE, RELATIVE_MAP_PATH};

use super::manifest::MapManifest;
use super::progress::LoadingProgress;
use crate::engine::context::DotMapContext;
use crate::engine::core::app_state::AppState;
use crate::engine::error::DotMapError;
use crate::engine::hotspots::HotspotRecord;
use crate::engine::sampling::RgbaPixels;
use crate::engine::surface::{DotInstances, TooltipOverlay};

#[derive(Resource, Default)]
pub struct ManifestLoader {
    pub manifest: Option<Handle<MapManifest>>,
    pub image: Option<Handle<Image>>,
}

// Start the loading process
pub fn start_loading(mut loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    let manifest_path = format!("{}/{}", RELATIVE_MAP_PATH, MANIFEST_FILE);
    info!("Loading map manifest from {manifest_path}");
    loader.manifest = Some(asset_server.load(manifest_path));
}

// Apply manifest config and request the map image once the manifest is in
pub fn load_manifest_system(
    mut progress: ResMut<LoadingProgress>,
    mut loader: ResMut<ManifestLoader>,
    mut context: ResMut<DotMapContext>,
    mut instances: ResMut<DotInstances>,
    mut commands: Commands,
    mut next_state: ResMut<NextState<AppState>>,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<MapManifest>>,
) {
    if progress.manifest_loaded || progress.failed {
        return;
    }
    let Some(handle) = loader.manifest.clone() else {
        return;
    };

    if let Some(LoadState::Failed(err)) = asset_server.get_load_state(handle.id()) {
        error!("Failed to load map manifest: {err}");
        progress.failed = true;
        next_state.set(AppState::Failed);
        return;
    }

    let Some(manifest) = manifests.get(&handle) else {
        return;
    };

    for id in manifest.duplicate_hotspot_ids() {
        warn!("Hotspot id '{id}' appears more than once in the manifest");
    }

    let config = manifest.config.clone();
    instances.marker_radius = config.dot_radius;
    instances.marker_height = config.dot_height;
    commands.insert_resource(ClearColor(config.background_color()));
    context.set_config(config);

    let image_path = manifest.image_path();
    info!(
        "✓ Manifest loaded ({} hotspots), loading image {image_path}",
        manifest.hotspots.len()
    );
    loader.image = Some(asset_server.load(image_path));
    progress.manifest_loaded = true;
    progress.image_requested = true;
}

// Sample the image into the dot map once it has loaded
pub fn create_dot_map_when_ready(
    mut progress: ResMut<LoadingProgress>,
    loader: Res<ManifestLoader>,
    mut context: ResMut<DotMapContext>,
    mut instances: ResMut<DotInstances>,
    mut tooltip: ResMut<TooltipOverlay>,
    mut next_state: ResMut<NextState<AppState>>,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<MapManifest>>,
    images: Res<Assets<Image>>,
) {
    if !progress.image_requested || progress.dot_map_created || progress.failed {
        return;
    }
    let Some(image_handle) = loader.image.as_ref() else {
        return;
    };

    if let Some(LoadState::Failed(err)) = asset_server.get_load_state(image_handle.id()) {
        error!("Failed to load map image: {err}");
        progress.failed = true;
        next_state.set(AppState::Failed);
        return;
    }

    let Some(image) = images.get(image_handle) else {
        return;
    };
    let Some(manifest) = loader.manifest.as_ref().and_then(|h| manifests.get(h)) else {
        return;
    };

    match build_dot_map(
        &mut context,
        image,
        &manifest.hotspots,
        &mut instances,
        &mut tooltip,
    ) {
        Ok(()) => progress.dot_map_created = true,
        Err(err) => {
            error!("Failed to build dot map: {err}");
            progress.failed = true;
            next_state.set(AppState::Failed);
        }
    }
}

/// Re-sample on image edits; restart loading on manifest edits.
pub fn reload_on_asset_change(
    mut image_events: EventReader<AssetEvent<Image>>,
    mut manifest_events: EventReader<AssetEvent<MapManifest>>,
    mut progress: ResMut<LoadingProgress>,
    loader: Res<ManifestLoader>,
    mut context: ResMut<DotMapContext>,
    mut instances: ResMut<DotInstances>,
    mut tooltip: ResMut<TooltipOverlay>,
    mut next_state: ResMut<NextState<AppState>>,
    manifests: Res<Assets<MapManifest>>,
    images: Res<Assets<Image>>,
) {
    let manifest_id = loader.manifest.as_ref().map(Handle::id);
    let manifest_changed = manifest_events
        .read()
        .any(|event| matches!(event, AssetEvent::Modified { id } if Some(*id) == manifest_id));
    if manifest_changed {
        info!("Map manifest changed, reloading");
        image_events.clear();
        context.reset(&mut *tooltip);
        *progress = LoadingProgress::default();
        next_state.set(AppState::Loading);
        return;
    }

    let image_id = loader.image.as_ref().map(Handle::id);
    let image_changed = image_events
        .read()
        .any(|event| matches!(event, AssetEvent::Modified { id } if Some(*id) == image_id));
    if !image_changed {
        return;
    }

    let Some(image) = loader.image.as_ref().and_then(|h| images.get(h)) else {
        return;
    };
    let Some(manifest) = loader.manifest.as_ref().and_then(|h| manifests.get(h)) else {
        return;
    };
    match build_dot_map(
        &mut context,
        image,
        &manifest.hotspots,
        &mut instances,
        &mut tooltip,
    ) {
        Ok(()) => info!("Map image changed, dots rebuilt"),
        Err(err) => error!("Map image changed but could not be sampled, keeping previous dots: {err}"),
    }
}

fn build_dot_map(
    context: &mut DotMapContext,
    image: &Image,
    hotspots: &[HotspotRecord],
    instances: &mut DotInstances,
    tooltip: &mut TooltipOverlay,
) -> Result<(), DotMapError> {
    let pixels = RgbaPixels::from_bevy_image(image)?;
    context.init(&pixels, hotspots, instances, tooltip)
}
