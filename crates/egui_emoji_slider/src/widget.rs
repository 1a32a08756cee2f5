use egui::{Color32, Id, LayerId, Order, Response, Sense, Ui, Widget, WidgetInfo, WidgetType};

use crate::{
    CANVAS_INSET, NotifyPolicy, SliderConfig, SliderSnapshot, SliderState, draw_commands,
    paint_commands,
};

type OnSlide<'a> = Box<dyn FnMut(f32) + 'a>;

/// A card with a track you can drag an emoji along.
///
/// While dragging, a copy of the emoji floats above the track and grows with the progress.
///
/// ```
/// # egui::__run_test_ui(|ui| {
/// ui.add(egui_emoji_slider::EmojiSlider::new().on_slide(|progress| {
///     log::debug!("progress: {progress}");
/// }));
/// # });
/// ```
#[must_use = "You should put this widget in a ui with `ui.add(widget);`"]
pub struct EmojiSlider<'a> {
    config: SliderConfig,
    id_salt: Option<Id>,
    on_slide: Option<OnSlide<'a>>,
}

impl Default for EmojiSlider<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> EmojiSlider<'a> {
    /// A slider with the default [`SliderConfig`].
    pub fn new() -> Self {
        Self::from_config(SliderConfig::default())
    }

    /// A slider with all of its looks given up front.
    pub fn from_config(config: SliderConfig) -> Self {
        Self {
            config,
            id_salt: None,
            on_slide: None,
        }
    }

    /// Called with the progress in `0..=100` every time the slider is laid out.
    ///
    /// See [`NotifyPolicy`] for how often that is.
    #[inline]
    pub fn on_slide(mut self, on_slide: impl FnMut(f32) + 'a) -> Self {
        self.on_slide = Some(Box::new(on_slide));
        self
    }

    /// Needed if you show more than one slider and want each to keep its own position.
    #[inline]
    pub fn id_salt(mut self, id_salt: impl std::hash::Hash) -> Self {
        self.id_salt = Some(Id::new(id_salt));
        self
    }

    /// Replace the whole config, including anything set by earlier builder calls.
    #[inline]
    pub fn config(mut self, config: SliderConfig) -> Self {
        self.config = config;
        self
    }

    /// Outer width of the card. Default: 220.
    #[inline]
    pub fn width(mut self, width: f32) -> Self {
        self.config.width = width;
        self
    }

    /// Outer height of the card. Default: 80.
    #[inline]
    pub fn height(mut self, height: f32) -> Self {
        self.config.height = height;
        self
    }

    /// Fill left of the handle. Default: pink.
    #[inline]
    pub fn progress_color(mut self, color: impl Into<Color32>) -> Self {
        self.config.progress_color = color.into();
        self
    }

    /// Fill of the whole track. Default: light gray.
    #[inline]
    pub fn track_color(mut self, color: impl Into<Color32>) -> Self {
        self.config.track_color = color.into();
        self
    }

    /// Background of the card. Default: white.
    #[inline]
    pub fn card_fill(mut self, fill: impl Into<Color32>) -> Self {
        self.config.card_fill = fill.into();
        self
    }

    /// The emoji to show, e.g. `Emoji::Fire.glyph()`.
    #[inline]
    pub fn emoji(mut self, emoji: impl ToString) -> Self {
        self.config.emoji = emoji.to_string();
        self
    }

    /// Font size of the emoji on the track. Default: 66.
    #[inline]
    pub fn emoji_size(mut self, emoji_size: f32) -> Self {
        self.config.emoji_size = emoji_size;
        self
    }

    /// Thickness of the track. Default: 18.
    #[inline]
    pub fn stroke_width(mut self, stroke_width: f32) -> Self {
        self.config.stroke_width = stroke_width;
        self
    }

    /// How often `on_slide` is called. Default: [`NotifyPolicy::Always`].
    #[inline]
    pub fn notify(mut self, notify: NotifyPolicy) -> Self {
        self.config.notify = notify;
        self
    }

    /// Show the slider and return more than the [`Response`].
    pub fn show(self, ui: &mut Ui) -> SliderOutput {
        let Self {
            config,
            id_salt,
            mut on_slide,
        } = self;

        let (rect, mut response) = ui.allocate_exact_size(config.size(), Sense::drag());
        let id = id_salt.map_or(response.id, |salt| ui.make_persistent_id(salt));

        let mut state = SliderState::load(ui.ctx(), id).unwrap_or_default();
        let previous_progress = state.progress;

        let mut needs_repaint = false;
        if response.drag_started() {
            log::debug!("Emoji slider {id:?}: drag started");
            needs_repaint |= state.drag_started();
        }

        // The last move often arrives in the same frame as the release,
        // where `drag_delta` is already zero.
        let delta_x = if response.dragged() {
            response.drag_delta().x
        } else if response.drag_stopped() {
            ui.input(|i| i.pointer.delta().x)
        } else {
            0.0
        };
        let moved = state.dragged_by(delta_x);
        needs_repaint |= moved;

        if response.drag_stopped() {
            log::debug!("Emoji slider {id:?}: drag stopped");
            needs_repaint |= state.drag_stopped();
        }

        let canvas = rect.shrink(CANVAS_INSET);
        let snapshot = state.layout(canvas.width());
        if !snapshot.has_track() {
            log::debug!(
                "Emoji slider {id:?}: card {:?} leaves no room for a track",
                rect.size()
            );
        }

        if let Some(progress) = state.take_notification(config.notify) {
            log::trace!("Emoji slider {id:?}: progress {progress}");
            if let Some(on_slide) = &mut on_slide {
                on_slide(progress);
            }
        }

        // Only user input counts as a change, not the first layout or a resized card.
        if moved && snapshot.progress != previous_progress {
            response.mark_changed();
        }
        response.widget_info(|| {
            let mut info = WidgetInfo::new(WidgetType::Slider);
            info.label = Some(config.emoji.clone());
            info.value = Some(f64::from(snapshot.progress));
            info
        });

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect_filled(rect, config.card_corner_radius, config.card_fill);

            let overlay = ui
                .ctx()
                .layer_painter(LayerId::new(Order::Foreground, id.with("floating_label")));
            let commands = draw_commands(&snapshot, &config, canvas.size());
            paint_commands(
                painter,
                &overlay,
                canvas.min,
                ui.visuals().strong_text_color(),
                &commands,
            );
        }

        state.store(ui.ctx(), id);
        if needs_repaint {
            ui.ctx().request_repaint();
        }

        SliderOutput {
            response,
            id,
            snapshot,
        }
    }
}

impl Widget for EmojiSlider<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        self.show(ui).response
    }
}

/// The output from [`EmojiSlider::show`].
pub struct SliderOutput {
    /// The interaction response. Marked as changed when dragging moved the progress.
    pub response: Response,

    /// Where the [`SliderState`] is stored. Use with [`SliderState::load`].
    pub id: Id,

    /// The state the slider was painted with this frame.
    pub snapshot: SliderSnapshot,
}

impl SliderOutput {
    /// Progress in `0..=100`.
    pub fn progress(&self) -> f32 {
        self.snapshot.progress
    }
}
