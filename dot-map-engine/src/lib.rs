//! Interactive dot world map.
//!
//! A raster map image is sampled into a grid of dots rendered as small
//! cylinders. Named hotspots are bound to their nearest dot, dots lift as
//! the pointer passes over them, and clicking a hotspot opens a tooltip
//! that follows it on screen.
//!
//! | Module | Role |
//! |---|---|
//! | [`engine::sampling`] | image → normalized point set |
//! | [`engine::hotspots`] | hotspot records → nearest dots |
//! | [`engine::animation`] | proximity lift per frame |
//! | [`engine::camera`] | perspective camera, orbit controls, screen projection |
//! | [`engine::interaction`] | pointer state, hit testing, tooltip placement |
//! | [`engine::context`] | owned map state with `init` / `reset` / `dispose` |
//! | [`engine::surface`] | render and tooltip collaborator traits |
//! | [`engine::loading`] | manifest and image loading, hot reload |
//! | [`engine::core`], [`engine::scene`], [`engine::systems`] | Bevy host |
//!
//! Everything outside `core`, `scene`, `systems` and `loading` runs
//! without an `App` and is tested that way.

pub mod engine;
