use bevy::prelude::*;
use constants::render_settings::{TOOLTIP_FONT_SIZE, TOOLTIP_MAX_WIDTH, TOOLTIP_TITLE_FONT_SIZE};

use crate::engine::surface::TooltipOverlay;

#[derive(Component)]
pub struct TooltipRoot;

#[derive(Component)]
pub struct TooltipTitle;

#[derive(Component)]
pub struct TooltipBody;

pub fn spawn_tooltip_ui(commands: &mut Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                display: Display::None,
                flex_direction: FlexDirection::Column,
                max_width: Val::Px(TOOLTIP_MAX_WIDTH),
                padding: UiRect::all(Val::Px(8.0)),
                row_gap: Val::Px(4.0),
                ..default()
            },
            BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.95)),
            BorderRadius::all(Val::Px(6.0)),
            TooltipRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: TOOLTIP_TITLE_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::srgb(0.1, 0.12, 0.14)),
                TooltipTitle,
            ));
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: TOOLTIP_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::srgb(0.3, 0.33, 0.36)),
                TooltipBody,
            ));
        });
}

pub fn sync_tooltip_ui(
    overlay: Res<TooltipOverlay>,
    mut roots: Query<&mut Node, With<TooltipRoot>>,
    mut titles: Query<&mut Text, (With<TooltipTitle>, Without<TooltipBody>)>,
    mut bodies: Query<&mut Text, (With<TooltipBody>, Without<TooltipTitle>)>,
) {
    if !overlay.is_changed() {
        return;
    }

    for mut node in &mut roots {
        node.display = if overlay.visible {
            Display::Flex
        } else {
            Display::None
        };
        node.left = Val::Px(overlay.position.x);
        node.top = Val::Px(overlay.position.y);
    }

    if !overlay.visible {
        return;
    }
    for mut text in &mut titles {
        if text.0 != overlay.title {
            text.0.clone_from(&overlay.title);
        }
    }
    for mut text in &mut bodies {
        if text.0 != overlay.body {
            text.0.clone_from(&overlay.body);
        }
    }
}
