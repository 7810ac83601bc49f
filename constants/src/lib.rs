//! Compile-time defaults shared by the dot map engine.
//!
//! Every value here can be overridden at runtime through the `config`
//! section of the map manifest; these are the values used when the
//! manifest leaves a field out.

pub mod animation;
pub mod map_layout;
pub mod path;
pub mod render_settings;
