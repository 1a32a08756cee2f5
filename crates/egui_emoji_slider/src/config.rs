use egui::Color32;

use crate::Emoji;

/// How far the canvas is inset from the card on every side.
///
/// The usable drag range is the card width minus twice this.
pub const CANVAS_INSET: f32 = 24.0;

/// Where the slider starts, in canvas coordinates.
pub const INITIAL_OFFSET: f32 = 10.0;

/// The pink used for the filled part of the track by default.
pub const DEFAULT_PROGRESS_COLOR: Color32 = Color32::from_rgb(0xE1, 0x30, 0x6C);

/// When the `on_slide` callback gets called.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum NotifyPolicy {
    /// Every frame the slider is shown, even if the progress did not change.
    #[default]
    Always,

    /// Only when the progress differs from the last reported value.
    OnChange,
}

/// Looks and behavior of an [`crate::EmojiSlider`].
///
/// All sizes are in points.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SliderConfig {
    /// Outer width of the card.
    pub width: f32,

    /// Outer height of the card.
    pub height: f32,

    /// Fill of the track left of the handle.
    pub progress_color: Color32,

    /// Fill of the whole track behind the progress.
    pub track_color: Color32,

    /// Background of the card.
    pub card_fill: Color32,

    /// Rounding of the card corners.
    pub card_corner_radius: f32,

    /// The glyph drawn on the track and in the floating label.
    ///
    /// An empty string draws no glyph at all.
    pub emoji: String,

    /// Font size of the glyph on the track.
    pub emoji_size: f32,

    /// Thickness of the track lines.
    pub stroke_width: f32,

    /// How often `on_slide` is called.
    pub notify: NotifyPolicy,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            width: 220.0,
            height: 80.0,
            progress_color: DEFAULT_PROGRESS_COLOR,
            track_color: Color32::LIGHT_GRAY,
            card_fill: Color32::WHITE,
            card_corner_radius: 8.0,
            emoji: Emoji::LoveFace.glyph().to_owned(),
            emoji_size: 66.0,
            stroke_width: 18.0,
            notify: NotifyPolicy::Always,
        }
    }
}

impl SliderConfig {
    /// Size of the card.
    pub fn size(&self) -> egui::Vec2 {
        egui::vec2(self.width, self.height)
    }

    /// Width of the draggable range once the inset is taken off.
    ///
    /// May be zero or negative for tiny cards.
    pub fn track_width(&self) -> f32 {
        self.width - 2.0 * CANVAS_INSET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SliderConfig::default();
        assert_eq!(config.size(), egui::vec2(220.0, 80.0));
        assert_eq!(config.emoji, "😍");
        assert_eq!(config.emoji_size, 66.0);
        assert_eq!(config.stroke_width, 18.0);
        assert_eq!(config.progress_color, Color32::from_rgb(225, 48, 108));
        assert_eq!(config.notify, NotifyPolicy::Always);
    }

    #[test]
    fn track_width_excludes_the_inset() {
        let config = SliderConfig::default();
        assert_eq!(config.track_width(), 172.0);

        let tiny = SliderConfig {
            width: 40.0,
            ..Default::default()
        };
        assert!(tiny.track_width() < 0.0);
    }
}
