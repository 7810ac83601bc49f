/// Directory under `assets/` holding the map manifest and image.
pub const RELATIVE_MAP_PATH: &str = "map";

/// Manifest file name inside [`RELATIVE_MAP_PATH`].
pub const MANIFEST_FILE: &str = "manifest.json";

/// Image used when the manifest does not name one.
pub const DEFAULT_MAP_IMAGE: &str = "world-map-dots.png";
