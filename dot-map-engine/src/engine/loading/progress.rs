use bevy::prelude::*;

#[derive(Resource, Default, Debug)]
pub struct LoadingProgress {
    pub manifest_loaded: bool,
    pub image_requested: bool,
    pub dot_map_created: bool,
    pub failed: bool,
}
