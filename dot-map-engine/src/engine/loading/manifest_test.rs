use super::*;

const MANIFEST: &str = r##"{
    "image": "atlas.png",
    "config": { "sample_step": 6, "base_color": "#112233" },
    "hotspots": [
        { "id": "miami-pop", "label": "Miami POP", "description": "Serving the Americas.",
          "color": "#ff0000", "u": 0.28, "v": 0.36 },
        { "id": "singapore-pop", "label": "Singapore POP", "u": 0.79, "v": 0.49 }
    ]
}"##;

#[test]
fn parses_full_manifest() {
    let manifest: MapManifest = serde_json::from_str(MANIFEST).expect("manifest");

    assert_eq!(manifest.image_path(), "map/atlas.png");
    assert_eq!(manifest.config.sample_step, 6);
    assert_eq!(manifest.config.base_color, "#112233");
    assert_eq!(manifest.config.map_width_units, 15.0);

    assert_eq!(manifest.hotspots.len(), 2);
    assert_eq!(manifest.hotspots[0].id, "miami-pop");
    assert_eq!(manifest.hotspots[0].color.as_deref(), Some("#ff0000"));
    assert_eq!(manifest.hotspots[1].description, "");
    assert_eq!(manifest.hotspots[1].color, None);
    assert!(manifest.duplicate_hotspot_ids().is_empty());
}

#[test]
fn empty_manifest_uses_defaults() {
    let manifest: MapManifest = serde_json::from_str("{}").expect("manifest");
    assert_eq!(manifest.image_path(), "map/world-map-dots.png");
    assert_eq!(manifest.config, DotMapConfig::default());
    assert!(manifest.hotspots.is_empty());
}

#[test]
fn hotspot_without_coordinates_is_rejected() {
    let result: Result<MapManifest, _> =
        serde_json::from_str(r#"{ "hotspots": [ { "id": "nowhere" } ] }"#);
    assert!(result.is_err());
}

#[test]
fn reports_duplicate_ids_once() {
    let manifest: MapManifest = serde_json::from_str(
        r#"{ "hotspots": [
            { "id": "a", "u": 0.1, "v": 0.1 },
            { "id": "a", "u": 0.2, "v": 0.2 },
            { "id": "b", "u": 0.3, "v": 0.3 },
            { "id": "a", "u": 0.4, "v": 0.4 }
        ] }"#,
    )
    .expect("manifest");
    assert_eq!(manifest.duplicate_hotspot_ids(), ["a"]);
}

#[test]
fn shipped_manifest_parses() {
    let manifest: MapManifest =
        serde_json::from_str(include_str!("../../../assets/map/manifest.json")).expect("manifest");
    assert_eq!(manifest.hotspots.len(), 7);
    assert!(manifest.config.validate().is_ok());
    assert!(manifest.duplicate_hotspot_ids().is_empty());
}
