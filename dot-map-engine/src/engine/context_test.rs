use image::{Rgba, RgbaImage};

use super::*;
use crate::engine::interaction::PointerEvent;
use crate::engine::surface::{DotInstances, TooltipOverlay};

const INK: Rgba<u8> = Rgba([10, 10, 10, 255]);

fn diagonal_image() -> RgbaImage {
    let mut img = RgbaImage::from_pixel(3, 3, Rgba([0, 0, 0, 0]));
    for i in 0..3 {
        img.put_pixel(i, i, INK);
    }
    img
}

fn centre_hotspot() -> HotspotRecord {
    HotspotRecord {
        id: "centre".into(),
        label: "Centre".into(),
        description: "Middle of the map".into(),
        color: Some("#ff0000".into()),
        u: 0.5,
        v: 0.5,
    }
}

fn ready_context() -> (DotMapContext, DotInstances, TooltipOverlay) {
    let config = DotMapConfig {
        sample_step: 1,
        ..default()
    };
    let mut ctx = DotMapContext::new(config, ViewportRect::new(0.0, 0.0, 800.0, 600.0));
    let mut instances = DotInstances::default();
    let mut tooltip = TooltipOverlay::default();
    ctx.init(&diagonal_image(), &[centre_hotspot()], &mut instances, &mut tooltip)
        .expect("init");
    (ctx, instances, tooltip)
}

fn screen_event(ctx: &DotMapContext, world: Vec3) -> PointerEvent {
    let screen = ctx.camera().project(world, ctx.interaction().viewport());
    PointerEvent::at(screen.x, screen.y)
}

#[test]
fn init_samples_binds_and_colours() {
    let (ctx, instances, _) = ready_context();

    assert!(ctx.is_ready());
    let uvs: Vec<_> = ctx.points().iter().map(|p| p.uv).collect();
    assert_eq!(uvs, [Vec2::ZERO, Vec2::splat(0.5), Vec2::ONE]);
    assert_eq!(ctx.binding().point_for("centre"), Some(1));

    assert_eq!(instances.len(), 3);
    assert_eq!(instances.positions[1], Vec3::ZERO);
    assert_eq!(instances.colors[1], Color::srgb_u8(255, 0, 0));
    assert_eq!(instances.colors[0], ctx.config().base_color());
}

#[test]
fn hover_lifts_dot_by_damping_fraction_on_first_frame() {
    let (mut ctx, mut instances, mut tooltip) = ready_context();
    let target = ctx.points()[1].world_position;

    let event = screen_event(&ctx, target);
    ctx.handle(PointerMessage::Move(event), &instances, &mut tooltip);
    ctx.frame(&mut instances, &mut tooltip);

    let lift = ctx.points()[1].current_lift;
    assert!((lift - 0.35 * 0.18).abs() < 1e-4, "lift {lift}");
    assert_eq!(instances.positions[1].y, lift);
    // The far corners are outside the influence radius.
    assert_eq!(ctx.points()[0].current_lift, 0.0);
}

#[test]
fn leaving_lets_dots_settle() {
    let (mut ctx, mut instances, mut tooltip) = ready_context();
    let event = screen_event(&ctx, Vec3::ZERO);
    ctx.handle(PointerMessage::Move(event), &instances, &mut tooltip);
    for _ in 0..10 {
        ctx.frame(&mut instances, &mut tooltip);
    }
    assert!(ctx.points()[1].current_lift > 0.1);

    ctx.handle(PointerMessage::Leave, &instances, &mut tooltip);
    for _ in 0..500 {
        ctx.frame(&mut instances, &mut tooltip);
    }
    assert!(ctx.points()[1].current_lift.abs() < 1e-5);
}

#[test]
fn click_on_hotspot_opens_tooltip() {
    let (mut ctx, instances, mut tooltip) = ready_context();
    let event = screen_event(&ctx, Vec3::new(0.0, 0.07, 0.0));

    ctx.handle(PointerMessage::Down(event), &instances, &mut tooltip);
    ctx.handle(PointerMessage::Up(event), &instances, &mut tooltip);

    assert!(tooltip.visible);
    assert_eq!(tooltip.title, "Centre");
    assert_eq!(ctx.interaction().active_hotspot(), Some("centre"));
}

#[test]
fn messages_before_init_are_ignored() {
    let mut ctx = DotMapContext::new(DotMapConfig::default(), ViewportRect::default());
    let mut instances = DotInstances::default();
    let mut tooltip = TooltipOverlay::default();

    ctx.handle(
        PointerMessage::Up(PointerEvent::at(0.5, 0.5)),
        &instances,
        &mut tooltip,
    );
    ctx.frame(&mut instances, &mut tooltip);

    assert!(!ctx.is_ready());
    assert!(instances.is_empty());
    assert!(!tooltip.visible);
}

#[test]
fn resize_before_init_still_refits_camera() {
    let mut ctx = DotMapContext::new(DotMapConfig::default(), ViewportRect::default());
    let instances = DotInstances::default();
    let mut tooltip = TooltipOverlay::default();

    ctx.handle(
        PointerMessage::Resize(ViewportRect::new(0.0, 0.0, 1920.0, 1080.0)),
        &instances,
        &mut tooltip,
    );
    assert_eq!(ctx.camera().aspect_ratio, 1920.0 / 1080.0);
}

#[test]
fn failed_init_keeps_previous_map() {
    let (mut ctx, mut instances, mut tooltip) = ready_context();

    let empty = RgbaImage::new(0, 0);
    let result = ctx.init(&empty, &[centre_hotspot()], &mut instances, &mut tooltip);

    assert!(matches!(result, Err(DotMapError::Decode(_))));
    assert_eq!(ctx.points().len(), 3);
    assert_eq!(instances.len(), 3);
}

#[test]
fn invalid_config_fails_init() {
    let mut ctx = DotMapContext::new(
        DotMapConfig {
            sample_step: 0,
            ..default()
        },
        ViewportRect::default(),
    );
    let result = ctx.init(
        &diagonal_image(),
        &[],
        &mut DotInstances::default(),
        &mut TooltipOverlay::default(),
    );
    assert!(matches!(result, Err(DotMapError::InvalidConfig(_))));
    assert!(!ctx.is_ready());
}

#[test]
fn reinit_replaces_points_and_binding() {
    let (mut ctx, mut instances, mut tooltip) = ready_context();
    let event = screen_event(&ctx, Vec3::new(0.0, 0.07, 0.0));
    ctx.handle(PointerMessage::Down(event), &instances, &mut tooltip);
    ctx.handle(PointerMessage::Up(event), &instances, &mut tooltip);
    assert!(tooltip.visible);

    let transparent = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0]));
    ctx.init(&transparent, &[centre_hotspot()], &mut instances, &mut tooltip)
        .expect("empty map is not an error");

    assert!(ctx.is_ready());
    assert!(ctx.points().is_empty());
    assert_eq!(ctx.binding().unresolved(), ["centre".to_string()]);
    assert!(instances.is_empty());
    assert!(!tooltip.visible);
    assert_eq!(ctx.interaction().active_hotspot(), None);

    // An empty map still ticks without trouble.
    ctx.frame(&mut instances, &mut tooltip);
}

#[test]
fn reset_and_dispose_drop_everything() {
    let (mut ctx, mut instances, mut tooltip) = ready_context();
    ctx.reset(&mut tooltip);

    assert!(!ctx.is_ready());
    assert!(ctx.binding().is_empty());
    assert!(ctx.points().is_empty());

    ctx.dispose(&mut instances, &mut tooltip);
    assert!(instances.is_empty());
}

#[test]
fn drag_orbits_the_camera() {
    let (mut ctx, mut instances, mut tooltip) = ready_context();
    let start = ctx.camera().eye;

    ctx.handle(
        PointerMessage::Down(PointerEvent::at(400.0, 300.0)),
        &instances,
        &mut tooltip,
    );
    ctx.handle(
        PointerMessage::Move(PointerEvent::at(480.0, 300.0)),
        &instances,
        &mut tooltip,
    );
    for _ in 0..60 {
        ctx.frame(&mut instances, &mut tooltip);
    }

    let eye = ctx.camera().eye;
    assert!(eye.x < start.x - 1.0, "eye {eye:?}");
    assert!((eye.length() - start.length()).abs() < 1e-3);
}

#[test]
fn open_tooltip_follows_the_orbiting_camera() {
    let config = DotMapConfig {
        sample_step: 1,
        ..default()
    };
    let mut ctx = DotMapContext::new(config, ViewportRect::new(0.0, 0.0, 800.0, 600.0));
    let mut instances = DotInstances::default();
    let mut tooltip = TooltipOverlay::default();
    let corner = HotspotRecord {
        id: "corner".into(),
        u: 1.0,
        v: 1.0,
        ..centre_hotspot()
    };
    ctx.init(&diagonal_image(), &[corner], &mut instances, &mut tooltip)
        .expect("init");

    let marker = ctx.points()[2].world_position + Vec3::Y * 0.07;
    let event = screen_event(&ctx, marker);
    ctx.handle(PointerMessage::Down(event), &instances, &mut tooltip);
    ctx.handle(PointerMessage::Up(event), &instances, &mut tooltip);
    assert_eq!(ctx.interaction().active_hotspot(), Some("corner"));
    let opened_at = tooltip.position;

    ctx.handle(
        PointerMessage::Down(PointerEvent::at(100.0, 500.0)),
        &instances,
        &mut tooltip,
    );
    ctx.handle(
        PointerMessage::Move(PointerEvent::at(160.0, 500.0)),
        &instances,
        &mut tooltip,
    );
    for _ in 0..60 {
        ctx.frame(&mut instances, &mut tooltip);
    }

    assert!(tooltip.visible);
    let anchor = ctx.points()[2].lifted_position();
    let expected = ctx.camera().project(anchor, ctx.interaction().viewport());
    assert!((tooltip.position - Vec2::from(expected)).length() < 1e-3);
    assert!(
        (tooltip.position - opened_at).length() > 1.0,
        "tooltip stayed at {opened_at:?}"
    );
}

#[test]
fn leaving_mid_drag_does_not_jump_the_camera() {
    let (mut ctx, mut instances, mut tooltip) = ready_context();
    let start = ctx.camera().eye;

    ctx.handle(
        PointerMessage::Down(PointerEvent::at(400.0, 300.0)),
        &instances,
        &mut tooltip,
    );
    ctx.handle(PointerMessage::Leave, &instances, &mut tooltip);
    ctx.handle(
        PointerMessage::Move(PointerEvent::at(780.0, 20.0)),
        &instances,
        &mut tooltip,
    );
    for _ in 0..30 {
        ctx.frame(&mut instances, &mut tooltip);
    }

    assert!((ctx.camera().eye - start).length() < 1e-4);
}

#[test]
fn hover_without_press_does_not_orbit() {
    let (mut ctx, mut instances, mut tooltip) = ready_context();
    let start = ctx.camera().eye;

    ctx.handle(
        PointerMessage::Move(PointerEvent::at(100.0, 100.0)),
        &instances,
        &mut tooltip,
    );
    ctx.handle(
        PointerMessage::Move(PointerEvent::at(700.0, 500.0)),
        &instances,
        &mut tooltip,
    );
    ctx.frame(&mut instances, &mut tooltip);

    assert!((ctx.camera().eye - start).length() < 1e-4);
}

#[test]
fn wheel_zooms_in() {
    let (mut ctx, mut instances, mut tooltip) = ready_context();
    let start = ctx.camera().eye.length();

    ctx.handle(PointerMessage::Wheel(1.0), &instances, &mut tooltip);
    ctx.frame(&mut instances, &mut tooltip);

    assert!((ctx.camera().eye.length() - start * 0.95).abs() < 1e-3);
}
