//! Turning a [`SliderSnapshot`] into something on screen.
//!
//! [`draw_commands`] is pure and works in canvas coordinates, which makes it easy to test.
//! [`paint_commands`] hands the result to egui.

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Vec2, pos2, vec2};

use crate::{SliderConfig, SliderSnapshot};

/// Where the track glyph goes relative to the handle on the track center line.
///
/// This is the bottom-left corner of the glyph's text row, so it is nudged left and down
/// to sit on the handle.
pub const GLYPH_OFFSET: Vec2 = vec2(-26.0, 16.0);

/// How far above the track center line the floating label floats.
pub const FLOATING_LABEL_LIFT: f32 = 200.0;

/// Color of the glyph painted on the card.
pub const GLYPH_COLOR: Color32 = Color32::BLACK;

/// One thing to paint, in canvas coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// A horizontal line with round caps.
    Line {
        from: Pos2,
        to: Pos2,
        width: f32,
        color: Color32,
    },

    /// The glyph riding on the track. `pos` is the bottom-left corner of its text row.
    Glyph { text: String, pos: Pos2, size: f32 },

    /// The glyph floating above the track while dragging. `pos` is its left center.
    FloatingLabel { text: String, pos: Pos2, size: f32 },
}

/// Everything the slider paints for the given state, back to front.
pub fn draw_commands(
    snapshot: &SliderSnapshot,
    config: &SliderConfig,
    canvas_size: Vec2,
) -> Vec<DrawCommand> {
    let center_y = canvas_size.y / 2.0;
    let handle = pos2(snapshot.offset_x, center_y);

    let mut commands = Vec::with_capacity(4);

    commands.push(DrawCommand::Line {
        from: pos2(0.0, center_y),
        to: pos2(snapshot.track_width.max(0.0), center_y),
        width: config.stroke_width,
        color: config.track_color,
    });

    if snapshot.has_track() {
        commands.push(DrawCommand::Line {
            from: pos2(0.0, center_y),
            to: handle,
            width: config.stroke_width,
            color: config.progress_color,
        });
    }

    if config.emoji.is_empty() {
        return commands;
    }

    commands.push(DrawCommand::Glyph {
        text: config.emoji.clone(),
        pos: handle + GLYPH_OFFSET,
        size: config.emoji_size,
    });

    if let Some(size) = snapshot.floating_label_size() {
        commands.push(DrawCommand::FloatingLabel {
            text: config.emoji.clone(),
            pos: handle - vec2(0.0, FLOATING_LABEL_LIFT),
            size,
        });
    }

    commands
}

/// Paint commands produced by [`draw_commands`].
///
/// `origin` is the top-left of the canvas in screen space.
/// The floating label goes to `overlay` so it is not clipped to the card.
pub fn paint_commands(
    painter: &Painter,
    overlay: &Painter,
    origin: Pos2,
    label_color: Color32,
    commands: &[DrawCommand],
) {
    let offset = origin.to_vec2();

    for command in commands {
        match command {
            DrawCommand::Line {
                from,
                to,
                width,
                color,
            } => {
                // Round caps: a pill that sticks out half the width past both ends.
                let radius = width / 2.0;
                let rect = Rect::from_min_max(
                    pos2(from.x.min(to.x) - radius, from.y - radius),
                    pos2(from.x.max(to.x) + radius, to.y + radius),
                );
                painter.rect_filled(rect.translate(offset), radius, *color);
            }
            DrawCommand::Glyph { text, pos, size } => {
                painter.text(
                    *pos + offset,
                    Align2::LEFT_BOTTOM,
                    text,
                    FontId::proportional(*size),
                    GLYPH_COLOR,
                );
            }
            DrawCommand::FloatingLabel { text, pos, size } => {
                overlay.text(
                    *pos + offset,
                    Align2::LEFT_CENTER,
                    text,
                    FontId::proportional(*size),
                    label_color,
                );
            }
        }
    }
}
