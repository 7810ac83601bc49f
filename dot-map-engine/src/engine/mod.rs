pub mod animation;
pub mod camera;
pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod hotspots;
pub mod interaction;
pub mod loading;
pub mod sampling;
pub mod scene;
pub mod surface;
pub mod systems;
