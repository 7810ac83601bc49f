use super::*;

fn point(u: f32, v: f32) -> SampledPoint {
    SampledPoint {
        world_position: Vec3::new(u - 0.5, 0.0, 0.5 - v),
        uv: Vec2::new(u, v),
        current_lift: 0.0,
    }
}

fn hotspot(id: &str, u: f32, v: f32) -> HotspotRecord {
    HotspotRecord {
        id: id.into(),
        label: format!("{id} label"),
        description: String::new(),
        color: None,
        u,
        v,
    }
}

#[test]
fn binds_to_exact_match() {
    let points = [point(0.0, 0.0), point(0.5, 0.5), point(1.0, 1.0)];
    let binding = bind_hotspots(&points, &[hotspot("centre", 0.5, 0.5)]);

    assert_eq!(binding.point_for("centre"), Some(1));
    assert_eq!(binding.hotspot_at(1).map(|h| h.id.as_str()), Some("centre"));
    assert!(binding.hotspot_at(0).is_none());
    assert!(binding.unresolved().is_empty());
}

#[test]
fn empty_point_set_binds_nothing() {
    let binding = bind_hotspots(&[], &[hotspot("a", 0.1, 0.1), hotspot("b", 0.9, 0.9)]);

    assert!(binding.is_empty());
    assert!(binding.bound_points().is_empty());
    assert_eq!(binding.unresolved(), ["a".to_string(), "b".to_string()]);
}

#[test]
fn equidistant_points_prefer_first() {
    let points = [point(0.4, 0.5), point(0.6, 0.5)];
    let binding = bind_hotspots(&points, &[hotspot("mid", 0.5, 0.5)]);
    assert_eq!(binding.point_for("mid"), Some(0));
}

#[test]
fn binding_is_deterministic() {
    let points: Vec<_> = (0..50)
        .map(|i| point((i % 10) as f32 / 9.0, (i / 10) as f32 / 4.0))
        .collect();
    let hotspots = [
        hotspot("a", 0.49, 0.21),
        hotspot("b", 0.50, 0.19),
        hotspot("c", 0.79, 0.49),
    ];

    let first = bind_hotspots(&points, &hotspots);
    let second = bind_hotspots(&points, &hotspots);
    for h in &hotspots {
        assert_eq!(first.point_for(&h.id), second.point_for(&h.id));
    }
    assert_eq!(
        first.bound_points().iter().map(|(i, h)| (*i, h.id.clone())).collect::<Vec<_>>(),
        second.bound_points().iter().map(|(i, h)| (*i, h.id.clone())).collect::<Vec<_>>(),
    );
}

#[test]
fn shared_dot_goes_to_later_hotspot_but_both_resolve() {
    let points = [point(0.0, 0.0), point(1.0, 1.0)];
    let binding = bind_hotspots(
        &points,
        &[hotspot("first", 0.1, 0.1), hotspot("second", 0.05, 0.0)],
    );

    assert_eq!(binding.point_for("first"), Some(0));
    assert_eq!(binding.point_for("second"), Some(0));
    assert_eq!(binding.hotspot_at(0).map(|h| h.id.as_str()), Some("second"));
    assert_eq!(binding.len(), 2);
    assert_eq!(binding.bound_points().len(), 1);
}

#[test]
fn marker_colour_falls_back() {
    let mut record = hotspot("x", 0.0, 0.0);
    let fallback = Color::srgb(0.5, 0.5, 0.5);
    assert_eq!(record.marker_color(fallback), fallback);

    record.color = Some("#ff0000".into());
    assert_eq!(record.marker_color(fallback), Color::srgb_u8(255, 0, 0));

    record.color = Some("red-ish".into());
    assert_eq!(record.marker_color(fallback), fallback);
}

#[test]
fn record_lookup_by_id() {
    let binding = bind_hotspots(&[point(0.2, 0.2)], &[hotspot("only", 0.0, 0.0)]);
    assert_eq!(binding.record("only").map(|r| r.label.as_str()), Some("only label"));
    assert!(binding.record("missing").is_none());
}
