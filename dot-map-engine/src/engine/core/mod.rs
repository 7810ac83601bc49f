//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration and state
//! transitions for both native and WASM targets.

/// Application setup and plugin configuration.
///
/// Creates the app with the asset loaders, resources and the loading and
/// runtime system sets.
pub mod app_setup;

/// Application state machine and loading progress transitions.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
