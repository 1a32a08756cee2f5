//! A slider for [`egui`](https://github.com/emilk/egui) that you drag an emoji along.
//!
//! The card shows a track, the filled progress and the emoji riding on the handle.
//! While dragging, a copy of the emoji floats above the track and grows from small to large
//! as the progress goes from 0 to 100.
//!
//! ```
//! # egui::__run_test_ui(|ui| {
//! use egui_emoji_slider::{Emoji, EmojiSlider};
//!
//! let output = EmojiSlider::new()
//!     .emoji(Emoji::Fire)
//!     .on_slide(|progress| log::debug!("{progress:.1}%"))
//!     .show(ui);
//! assert!((0.0..=100.0).contains(&output.progress()));
//! # });
//! ```
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

mod config;
mod glyph;
mod paint;
mod state;
mod widget;

pub use crate::config::{
    CANVAS_INSET, DEFAULT_PROGRESS_COLOR, INITIAL_OFFSET, NotifyPolicy, SliderConfig,
};
pub use crate::glyph::{Emoji, GlyphError, glyph_for, utf16_len};
pub use crate::paint::{
    DrawCommand, FLOATING_LABEL_LIFT, GLYPH_COLOR, GLYPH_OFFSET, draw_commands, paint_commands,
};
pub use crate::state::{FLOATING_LABEL_SIZE_RANGE, SliderSnapshot, SliderState};
pub use crate::widget::{EmojiSlider, SliderOutput};
