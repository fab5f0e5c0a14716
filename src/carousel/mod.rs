// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Infinite auto-scrolling carousel engine.
//!
//! The carousel is a single horizontal offset moving through a track made of
//! the visible items repeated several times, so that folding the offset back
//! by a whole number of loops is invisible. The engine knows nothing about
//! rendering; it is driven by ticks and input notifications and exposes the
//! derived quantities the view needs.
//!
//! # States
//!
//! * `Running` - the offset advances on every tick.
//! * `Paused` - the pointer hovers the track, it holds keyboard focus, or a
//!   drag is in progress.
//! * `Stopped` - reduced motion is requested or the track is not on screen.
//!
//! Manual navigation and dragging move the offset in every state.

use std::time::Duration;

/// Smallest item width used for any division until a real measurement exists.
const MIN_ITEM_WIDTH: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Settings {
    pub(crate) item_width: f64,
    pub(crate) gap: f64,
    /// Units per second at a speed multiplier of 1.
    pub(crate) base_speed: f64,
    pub(crate) duplication_factor: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CarouselState {
    Running,
    Paused,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    last_x: f64,
}

#[derive(Debug, Clone)]
pub(crate) struct Carousel {
    settings: Settings,
    item_width: f64,
    item_count: usize,
    visible_width: f64,
    offset: f64,
    speed: f64,

    hovered: bool,
    focused: bool,
    drag: Option<Drag>,
    reduced_motion: bool,
    in_view: bool,
}

impl Carousel {
    pub(crate) fn new(settings: Settings, item_count: usize) -> Self {
        Self {
            settings,
            item_width: settings.item_width.max(MIN_ITEM_WIDTH),
            item_count,
            visible_width: 0.0,
            offset: 0.0,
            speed: 1.0,
            hovered: false,
            focused: false,
            drag: None,
            reduced_motion: false,
            in_view: true,
        }
    }

    pub(crate) fn state(&self) -> CarouselState {
        if self.reduced_motion || !self.in_view {
            CarouselState::Stopped
        } else if self.hovered || self.focused || self.drag.is_some() {
            CarouselState::Paused
        } else {
            CarouselState::Running
        }
    }

    pub(crate) fn offset(&self) -> f64 {
        self.offset
    }

    pub(crate) fn speed(&self) -> f64 {
        self.speed
    }

    pub(crate) fn item_count(&self) -> usize {
        self.item_count
    }

    pub(crate) fn item_width(&self) -> f64 {
        self.item_width
    }

    /// Distance between the left edges of two neighbouring items.
    pub(crate) fn stride(&self) -> f64 {
        self.item_width + self.settings.gap.max(0.0)
    }

    /// Width of one pass through the undoubled item sequence.
    pub(crate) fn loop_width(&self) -> f64 {
        self.item_count as f64 * self.stride()
    }

    /// Distance after which the offset folds back to the start of the track.
    pub(crate) fn wrap_width(&self) -> f64 {
        self.loop_width() * self.settings.duplication_factor.max(1) as f64
    }

    /// How many copies of the item sequence the track must contain.
    ///
    /// At the fold point the track still has to cover a full viewport, so the
    /// configured factor is extended by as many loops as the viewport spans.
    pub(crate) fn rendered_copies(&self) -> usize {
        let factor = self.settings.duplication_factor.max(1);
        let loop_width = self.loop_width();
        if loop_width <= 0.0 {
            return factor;
        }
        factor + (self.visible_width / loop_width).ceil() as usize
    }

    pub(crate) fn active_index(&self) -> usize {
        if self.item_count == 0 {
            return 0;
        }
        let steps = (self.offset.abs() / self.stride()).floor() as usize;
        steps % self.item_count
    }

    /// Position through the wrap cycle, in `[0, 1)`.
    pub(crate) fn progress(&self) -> f64 {
        let wrap = self.wrap_width();
        if wrap <= 0.0 {
            return 0.0;
        }
        (self.offset.abs() / wrap).min(1.0 - f64::EPSILON)
    }

    /// Advances the animation by the time elapsed since the previous tick.
    pub(crate) fn tick(&mut self, elapsed: Duration) {
        if self.state() != CarouselState::Running || self.item_count == 0 {
            return;
        }
        let elapsed_ms = elapsed.as_secs_f64() * 1000.0;
        self.offset -= elapsed_ms * self.settings.base_speed * self.speed / 1000.0;
        self.wrap();
    }

    pub(crate) fn set_speed(&mut self, speed: f64) {
        if speed.is_finite() && speed > 0.0 {
            self.speed = speed;
        }
    }

    /// Records the measured item and viewport widths.
    ///
    /// A zero measurement (layout not ready) keeps the previous item width.
    pub(crate) fn measure(&mut self, item_width: f64, visible_width: f64) {
        if item_width.is_finite() && item_width > 0.0 {
            self.item_width = item_width.max(MIN_ITEM_WIDTH);
        }
        if visible_width.is_finite() {
            self.visible_width = visible_width.max(0.0);
        }
        self.wrap();
    }

    /// Adopts a new number of items, for example after the filters changed.
    pub(crate) fn set_item_count(&mut self, count: usize) {
        if count == self.item_count {
            return;
        }
        self.item_count = count;

        let wrap = self.wrap_width();
        if count == 0 || self.offset.abs() >= wrap {
            self.offset = 0.0;
        }
    }

    pub(crate) fn next(&mut self) {
        self.shift_by_items(1);
    }

    pub(crate) fn prev(&mut self) {
        self.shift_by_items(-1);
    }

    /// Moves so that `index` becomes the active item.
    pub(crate) fn go_to(&mut self, index: usize) {
        if index >= self.item_count {
            return;
        }
        let delta = index as i64 - self.active_index() as i64;
        self.shift_by_items(delta);
    }

    fn shift_by_items(&mut self, n: i64) {
        if self.item_count == 0 {
            return;
        }
        self.offset -= n as f64 * self.stride();
        self.wrap();
    }

    pub(crate) fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    pub(crate) fn pointer_leave(&mut self) {
        self.hovered = false;
    }

    pub(crate) fn focus(&mut self) {
        self.focused = true;
    }

    pub(crate) fn blur(&mut self) {
        self.focused = false;
    }

    pub(crate) fn is_focused(&self) -> bool {
        self.focused
    }

    pub(crate) fn set_in_view(&mut self, in_view: bool) {
        self.in_view = in_view;
    }

    pub(crate) fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    pub(crate) fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub(crate) fn drag_start(&mut self, x: f64) {
        self.drag = Some(Drag { last_x: x });
    }

    /// Follows the pointer directly while a drag is in progress.
    pub(crate) fn drag_to(&mut self, x: f64) {
        if let Some(drag) = self.drag.as_mut() {
            let delta = x - drag.last_x;
            drag.last_x = x;
            self.offset += delta;
            self.wrap();
        }
    }

    pub(crate) fn drag_end(&mut self) {
        self.drag = None;
    }

    pub(crate) fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Keeps the offset within `(-wrap_width, 0]`.
    fn wrap(&mut self) {
        let wrap = self.wrap_width();
        if wrap <= 0.0 || !self.offset.is_finite() {
            self.offset = 0.0;
            return;
        }
        self.offset %= wrap;
        if self.offset > 0.0 {
            self.offset -= wrap;
        }
        // -0.0 and values rounding to the boundary both mean "at the start"
        if self.offset == 0.0 || self.offset <= -wrap {
            self.offset = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn settings() -> Settings {
        Settings {
            item_width: 360.0,
            gap: 24.0,
            base_speed: 80.0,
            duplication_factor: 2,
        }
    }

    #[test]
    fn three_nexts_move_three_strides() {
        let mut carousel = Carousel::new(settings(), 10);
        carousel.next();
        carousel.next();
        carousel.next();
        assert_eq!(carousel.offset(), -1152.0);
        assert_eq!(carousel.active_index(), 3);
    }

    #[test]
    fn prev_from_start_wraps_to_last_item() {
        let mut carousel = Carousel::new(settings(), 4);
        carousel.prev();
        assert_eq!(carousel.active_index(), 3);
        assert!(carousel.offset() <= 0.0);
    }

    #[test]
    fn tick_advances_only_while_running() {
        let mut carousel = Carousel::new(settings(), 5);
        carousel.tick(Duration::from_millis(500));
        assert_eq!(carousel.offset(), -40.0);

        carousel.pointer_enter();
        assert_eq!(carousel.state(), CarouselState::Paused);
        carousel.tick(Duration::from_millis(500));
        assert_eq!(carousel.offset(), -40.0);

        carousel.pointer_leave();
        carousel.set_speed(2.0);
        carousel.tick(Duration::from_millis(250));
        assert_eq!(carousel.offset(), -80.0);
    }

    #[test]
    fn stop_conditions_win_over_pause() {
        let mut carousel = Carousel::new(settings(), 5);
        carousel.focus();
        carousel.set_reduced_motion(true);
        assert_eq!(carousel.state(), CarouselState::Stopped);

        carousel.set_reduced_motion(false);
        assert_eq!(carousel.state(), CarouselState::Paused);
        carousel.blur();
        carousel.set_in_view(false);
        assert_eq!(carousel.state(), CarouselState::Stopped);
        carousel.tick(Duration::from_secs(1));
        assert_eq!(carousel.offset(), 0.0);
    }

    #[test]
    fn drag_follows_pointer_and_resumes_on_release() {
        let mut carousel = Carousel::new(settings(), 5);
        carousel.drag_start(100.0);
        assert_eq!(carousel.state(), CarouselState::Paused);
        carousel.drag_to(40.0);
        assert_eq!(carousel.offset(), -60.0);
        carousel.tick(Duration::from_secs(1));
        assert_eq!(carousel.offset(), -60.0);

        carousel.drag_end();
        assert_eq!(carousel.state(), CarouselState::Running);

        carousel.pointer_enter();
        carousel.drag_start(0.0);
        carousel.drag_end();
        assert_eq!(carousel.state(), CarouselState::Paused);
    }

    #[test]
    fn dragging_right_past_origin_folds_to_the_end() {
        let mut carousel = Carousel::new(settings(), 3);
        carousel.drag_start(0.0);
        carousel.drag_to(10.0);
        let wrap = carousel.wrap_width();
        assert_eq!(carousel.offset(), 10.0 - wrap);
        assert_eq!(carousel.active_index(), 2);
    }

    #[test]
    fn offset_wraps_at_loop_times_duplication() {
        let mut carousel = Carousel::new(settings(), 3);
        let wrap = carousel.wrap_width();
        assert_eq!(wrap, 3.0 * 384.0 * 2.0);

        for _ in 0..6 {
            carousel.next();
        }
        assert_eq!(carousel.offset(), 0.0);

        carousel.next();
        assert_eq!(carousel.offset(), -384.0);
    }

    #[test]
    fn active_index_stays_in_range_for_any_offset() {
        let mut carousel = Carousel::new(settings(), 7);
        for step in 0..2_000 {
            carousel.tick(Duration::from_millis(16 + (step % 40)));
            if step % 97 == 0 {
                carousel.next();
            }
            if step % 131 == 0 {
                carousel.drag_start(0.0);
                carousel.drag_to(5_000.0);
                carousel.drag_end();
            }
            assert!(carousel.active_index() < 7);
            assert!(carousel.offset() <= 0.0);
            assert!(carousel.offset() > -carousel.wrap_width());
        }
    }

    #[test]
    fn shrinking_item_count_resets_out_of_range_offset() {
        let mut carousel = Carousel::new(settings(), 10);
        for _ in 0..8 {
            carousel.next();
        }
        assert_eq!(carousel.active_index(), 8);

        carousel.set_item_count(2);
        assert_eq!(carousel.offset(), 0.0);
        assert_eq!(carousel.active_index(), 0);

        carousel.set_item_count(0);
        assert_eq!(carousel.active_index(), 0);
        carousel.next();
        carousel.tick(Duration::from_secs(1));
        assert_eq!(carousel.offset(), 0.0);
    }

    #[test]
    fn zero_measurements_are_guarded() {
        let mut carousel = Carousel::new(Settings { item_width: 0.0, gap: 0.0, ..settings() }, 4);
        assert_eq!(carousel.item_width(), MIN_ITEM_WIDTH);
        carousel.measure(0.0, 0.0);
        assert_eq!(carousel.item_width(), MIN_ITEM_WIDTH);
        carousel.tick(Duration::from_millis(30));
        assert!(carousel.active_index() < 4);

        carousel.measure(30.0, 120.0);
        assert_eq!(carousel.item_width(), 30.0);
    }

    #[test]
    fn go_to_selects_requested_index() {
        let mut carousel = Carousel::new(settings(), 5);
        carousel.go_to(3);
        assert_eq!(carousel.active_index(), 3);
        carousel.go_to(1);
        assert_eq!(carousel.active_index(), 1);
        carousel.go_to(9);
        assert_eq!(carousel.active_index(), 1);
    }

    #[test]
    fn rendered_copies_cover_the_viewport_past_the_fold() {
        let mut carousel = Carousel::new(settings(), 2);
        carousel.measure(360.0, 1_000.0);
        let copies = carousel.rendered_copies();
        let track = copies as f64 * carousel.loop_width();
        assert!(track >= carousel.wrap_width() + 1_000.0);
    }

    #[test]
    fn progress_is_fraction_of_wrap() {
        let mut carousel = Carousel::new(settings(), 2);
        assert_eq!(carousel.progress(), 0.0);
        carousel.next();
        assert_eq!(carousel.progress(), 0.25);
    }

    #[test]
    fn invalid_speeds_are_ignored() {
        let mut carousel = Carousel::new(settings(), 2);
        carousel.set_speed(0.0);
        carousel.set_speed(f64::NAN);
        assert_eq!(carousel.speed(), 1.0);
        carousel.set_speed(0.5);
        assert_eq!(carousel.speed(), 0.5);
    }
}
