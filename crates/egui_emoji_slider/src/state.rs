use egui::{Context, Id};

use crate::{INITIAL_OFFSET, NotifyPolicy};

/// The floating label never gets smaller or larger than this.
pub const FLOATING_LABEL_SIZE_RANGE: std::ops::RangeInclusive<f32> = 20.0..=80.0;

/// The interaction state of one [`crate::EmojiSlider`].
///
/// Lives in egui temp memory under the widget id, so every slider has its own.
/// The setters return `true` when the change needs a repaint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderState {
    /// Horizontal drag position in canvas coordinates.
    ///
    /// Drag deltas accumulate here unclamped; [`Self::layout`] clamps it.
    pub offset_x: f32,

    /// True between drag start and drag stop.
    pub is_pressed: bool,

    /// `0..=100`, as of the last [`Self::layout`].
    pub progress: f32,

    /// What `on_slide` was last called with.
    pub last_reported: Option<f32>,
}

impl Default for SliderState {
    fn default() -> Self {
        Self::new()
    }
}

impl SliderState {
    /// Not pressed, near the left edge.
    pub const fn new() -> Self {
        Self {
            offset_x: INITIAL_OFFSET,
            is_pressed: false,
            progress: 0.0,
            last_reported: None,
        }
    }

    /// The state stored for the slider with this id, if it has been shown before.
    pub fn load(ctx: &Context, id: Id) -> Option<Self> {
        ctx.data_mut(|d| d.get_temp(id))
    }

    /// Keep the state around for the next frame.
    pub fn store(self, ctx: &Context, id: Id) {
        ctx.data_mut(|d| d.insert_temp(id, self));
    }

    /// Forget the state, e.g. when the slider is unmounted.
    ///
    /// The next time it is shown it starts over from [`Self::new`].
    pub fn remove(ctx: &Context, id: Id) {
        ctx.data_mut(|d| d.remove::<Self>(id));
    }

    /// The pointer started dragging the slider.
    pub fn drag_started(&mut self) -> bool {
        let changed = !self.is_pressed;
        self.is_pressed = true;
        changed
    }

    /// Accumulate a signed horizontal drag delta.
    pub fn dragged_by(&mut self, delta_x: f32) -> bool {
        if delta_x == 0.0 || !delta_x.is_finite() {
            return false;
        }
        self.offset_x += delta_x;
        true
    }

    /// The pointer let go of the slider.
    pub fn drag_stopped(&mut self) -> bool {
        let changed = self.is_pressed;
        self.is_pressed = false;
        changed
    }

    /// Clamp the offset to the track and recompute the progress.
    ///
    /// A track that is zero or negative wide pins everything to `0`.
    pub fn layout(&mut self, track_width: f32) -> SliderSnapshot {
        let track_width = if track_width.is_finite() {
            track_width
        } else {
            0.0
        };

        if track_width > 0.0 {
            self.offset_x = self.offset_x.clamp(0.0, track_width);
            self.progress = self.offset_x / track_width * 100.0;
        } else {
            self.offset_x = 0.0;
            self.progress = 0.0;
        }

        SliderSnapshot {
            offset_x: self.offset_x,
            progress: self.progress,
            is_pressed: self.is_pressed,
            track_width,
        }
    }

    /// The value to pass to `on_slide` after this layout pass, if any.
    ///
    /// Call after [`Self::layout`]. A degenerate track reports `0`.
    pub fn take_notification(&mut self, policy: NotifyPolicy) -> Option<f32> {
        if !self.progress.is_finite() {
            return None;
        }

        let progress = self.progress;
        let report = match policy {
            NotifyPolicy::Always => true,
            NotifyPolicy::OnChange => self.last_reported != Some(progress),
        };

        if report {
            self.last_reported = Some(progress);
            Some(progress)
        } else {
            None
        }
    }
}

/// What the slider looked like after a layout pass.
///
/// Painting is a pure function of this and the config.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderSnapshot {
    /// Clamped to `0..=track_width`.
    pub offset_x: f32,

    /// Clamped to `0..=100`.
    pub progress: f32,

    /// True while the slider is being dragged.
    pub is_pressed: bool,

    /// Width of the draggable range, never negative.
    pub track_width: f32,
}

impl SliderSnapshot {
    /// Is there anything to drag along?
    pub fn has_track(&self) -> bool {
        self.track_width > 0.0
    }

    /// Font size of the floating label, or `None` when it should not be shown.
    pub fn floating_label_size(&self) -> Option<f32> {
        self.is_pressed.then(|| {
            self.progress.clamp(
                *FLOATING_LABEL_SIZE_RANGE.start(),
                *FLOATING_LABEL_SIZE_RANGE.end(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-4, "{a} != {b}");
    }

    #[test]
    fn starts_near_the_left_edge() {
        let mut state = SliderState::new();
        assert_eq!(state.offset_x, 10.0);
        assert!(!state.is_pressed);

        let snapshot = state.layout(200.0);
        assert_eq!(snapshot.offset_x, 10.0);
        assert_close(snapshot.progress, 5.0);
        assert_eq!(state.take_notification(NotifyPolicy::Always), Some(5.0));
    }

    #[test]
    fn drag_past_the_right_edge_clamps() {
        let mut state = SliderState::new();
        state.drag_started();
        assert!(state.dragged_by(190.0));
        assert_eq!(state.offset_x, 200.0, "deltas are not clamped on accumulation");

        let snapshot = state.layout(200.0);
        assert_eq!(snapshot.offset_x, 200.0);
        assert_eq!(snapshot.progress, 100.0);

        state.dragged_by(50.0);
        assert_eq!(state.offset_x, 250.0);
        assert_eq!(state.layout(200.0).offset_x, 200.0);
    }

    #[test]
    fn drag_past_the_left_edge_clamps() {
        let mut state = SliderState::new();
        state.dragged_by(-50.0);
        let snapshot = state.layout(200.0);
        assert_eq!(snapshot.offset_x, 0.0);
        assert_eq!(snapshot.progress, 0.0);
    }

    #[test]
    fn invariants_hold_for_drag_sequences() {
        let deltas = [
            37.5, -12.0, 300.0, -0.25, -1000.0, 64.0, 64.0, 64.0, -3.5, 0.0, 199.0, -77.7,
        ];
        for track_width in [1.0, 50.0, 172.0, 200.0, 1234.5] {
            let mut state = SliderState::new();
            for delta in deltas {
                state.dragged_by(delta);
                let snapshot = state.layout(track_width);
                assert!((0.0..=track_width).contains(&snapshot.offset_x));
                assert!((0.0..=100.0).contains(&snapshot.progress));
                assert_close(snapshot.progress, snapshot.offset_x / track_width * 100.0);
            }
        }
    }

    #[test]
    fn pressed_only_between_start_and_stop() {
        let mut state = SliderState::new();
        assert!(state.drag_started());
        assert!(state.is_pressed);
        assert!(!state.drag_started(), "already pressed");

        assert!(state.drag_stopped());
        assert!(!state.is_pressed);
        assert!(!state.drag_stopped(), "already released");
        assert_eq!(state.offset_x, 10.0, "no movement");
    }

    #[test]
    fn degenerate_track_reports_zero() {
        for track_width in [0.0, -20.0, f32::NAN, f32::INFINITY] {
            let mut state = SliderState::new();
            state.dragged_by(30.0);
            let snapshot = state.layout(track_width);
            assert_eq!(snapshot.progress, 0.0);
            assert_eq!(snapshot.offset_x, 0.0);
            assert!(!snapshot.has_track());
            assert_eq!(state.take_notification(NotifyPolicy::Always), Some(0.0));
            assert_eq!(state.take_notification(NotifyPolicy::Always), Some(0.0));
        }
    }

    #[test]
    fn degenerate_track_reports_zero_once_on_change() {
        let mut state = SliderState::new();
        for _ in 0..3 {
            state.layout(0.0);
        }
        assert_eq!(state.take_notification(NotifyPolicy::OnChange), Some(0.0));
        state.layout(0.0);
        assert_eq!(state.take_notification(NotifyPolicy::OnChange), None);
    }

    #[test]
    fn always_policy_reports_every_pass() {
        let mut state = SliderState::new();
        for _ in 0..3 {
            state.layout(200.0);
            assert_eq!(state.take_notification(NotifyPolicy::Always), Some(5.0));
        }
    }

    #[test]
    fn on_change_policy_reports_only_changes() {
        let mut state = SliderState::new();
        state.layout(200.0);
        assert_eq!(state.take_notification(NotifyPolicy::OnChange), Some(5.0));
        state.layout(200.0);
        assert_eq!(state.take_notification(NotifyPolicy::OnChange), None);

        state.dragged_by(10.0);
        state.layout(200.0);
        assert_eq!(state.take_notification(NotifyPolicy::OnChange), Some(10.0));
    }

    #[test]
    fn floating_label_grows_with_progress() {
        let mut state = SliderState::new();
        assert_eq!(state.layout(200.0).floating_label_size(), None);

        state.drag_started();
        assert_eq!(state.layout(200.0).floating_label_size(), Some(20.0));

        state.dragged_by(90.0);
        assert_eq!(state.layout(200.0).floating_label_size(), Some(50.0));

        state.dragged_by(1000.0);
        assert_eq!(state.layout(200.0).floating_label_size(), Some(80.0));

        state.drag_stopped();
        assert_eq!(state.layout(200.0).floating_label_size(), None);
    }

    #[test]
    fn state_is_kept_per_id() {
        let ctx = Context::default();
        let a = Id::new("a");
        let b = Id::new("b");

        let mut state = SliderState::new();
        state.dragged_by(40.0);
        state.store(&ctx, a);

        assert_eq!(SliderState::load(&ctx, a).map(|s| s.offset_x), Some(50.0));
        assert_eq!(SliderState::load(&ctx, b), None);

        SliderState::remove(&ctx, a);
        assert_eq!(SliderState::load(&ctx, a), None);
    }
}
