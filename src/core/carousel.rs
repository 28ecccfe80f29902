use std::time::Duration;

use chrono::NaiveDate;

use super::date_window::{CENTER_INDEX, WINDOW_SIZE, week_anchors};
use super::spring::{Spring, SpringConfig};

/// Minimum horizontal travel for a release to count as a swipe.
pub const SWIPE_THRESHOLD: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    pub swipe_threshold: f32,
    pub spring: SpringConfig,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: SWIPE_THRESHOLD,
            spring: SpringConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left: show the following week.
    Left,
    /// Finger moved right: show the preceding week.
    Right,
}

/// Classify a finished pan. Distance and velocity must agree in sign.
pub fn classify(translation: f32, velocity: f32, threshold: f32) -> Option<SwipeDirection> {
    if translation < -threshold && velocity < 0.0 {
        Some(SwipeDirection::Left)
    } else if translation > threshold && velocity > 0.0 {
        Some(SwipeDirection::Right)
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CarouselPhase {
    Idle,
    Dragging,
    Settling(Spring),
}

/// Result of releasing a pan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Release {
    pub swipe: Option<SwipeDirection>,
    pub index_changed: bool,
}

/// Snapshot published to the renderer after every input or tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselFrame {
    pub offset: f32,
    pub index: usize,
    pub animating: bool,
    pub slide_width: f32,
}

impl CarouselFrame {
    /// Horizontal scroll position for a strip laid out as
    /// `[gutter][slide 0]..[slide W-1][gutter]` in a viewport one slide wide.
    ///
    /// The gutters leave room for dragging and spring overshoot past the
    /// first and last slide; anything further is clamped.
    pub fn scroll_x(&self, gutter: f32) -> f32 {
        let gutter = gutter.max(0.0);
        let max = 2.0 * gutter + (WINDOW_SIZE - 1) as f32 * self.slide_width;
        (gutter - self.offset).clamp(0.0, max)
    }
}

/// Horizontally swipeable window of week slides.
///
/// The settled index only changes on release; the visual offset tracks the
/// pointer while dragging and follows a spring while settling.
#[derive(Debug, Clone)]
pub struct GestureCarousel {
    anchors: [NaiveDate; WINDOW_SIZE],
    index: usize,
    slide_width: f32,
    offset: f32,
    phase: CarouselPhase,
    config: CarouselConfig,
}

impl GestureCarousel {
    pub fn new(today: NaiveDate, slide_width: f32, config: CarouselConfig) -> Self {
        let slide_width = slide_width.max(0.0);
        Self {
            anchors: week_anchors(today),
            index: CENTER_INDEX,
            slide_width,
            offset: -(CENTER_INDEX as f32) * slide_width,
            phase: CarouselPhase::Idle,
            config,
        }
    }

    pub fn anchors(&self) -> &[NaiveDate; WINDOW_SIZE] {
        &self.anchors
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn active_anchor(&self) -> NaiveDate {
        self.anchors[self.index]
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn slide_width(&self) -> f32 {
        self.slide_width
    }

    pub fn phase(&self) -> &CarouselPhase {
        &self.phase
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, CarouselPhase::Settling(_))
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == CarouselPhase::Dragging
    }

    pub fn resting_offset(&self) -> f32 {
        -(self.index as f32) * self.slide_width
    }

    pub fn frame(&self) -> CarouselFrame {
        CarouselFrame {
            offset: self.offset,
            index: self.index,
            animating: self.is_animating(),
            slide_width: self.slide_width,
        }
    }

    /// One dot per slide, lit for the settled index.
    pub fn pagination(&self) -> [bool; WINDOW_SIZE] {
        std::array::from_fn(|slide| slide == self.index)
    }

    /// Only the active slide and its direct neighbours accept input.
    pub fn is_interactable(&self, slide: usize) -> bool {
        slide < WINDOW_SIZE && slide.abs_diff(self.index) <= 1
    }

    pub fn set_slide_width(&mut self, width: f32) {
        let width = width.max(0.0);
        if width == self.slide_width {
            return;
        }
        self.slide_width = width;
        match &self.phase {
            CarouselPhase::Idle => self.offset = self.resting_offset(),
            CarouselPhase::Settling(spring) => {
                let velocity = spring.velocity();
                self.settle_from(self.offset, velocity);
            }
            // The next pointer sample recomputes the offset against the new width.
            CarouselPhase::Dragging => {}
        }
    }

    /// A pointer went down. Cancels any running settle animation.
    pub fn gesture_start(&mut self) {
        if self.is_animating() {
            log::debug!("carousel: gesture interrupted settle at {:.1}", self.offset);
        }
        self.phase = CarouselPhase::Dragging;
    }

    /// Pointer moved; `translation` is measured from where the gesture began.
    pub fn gesture_update(&mut self, translation: f32) {
        if !self.is_dragging() {
            self.gesture_start();
        }
        self.offset = translation + self.resting_offset();
    }

    /// Pointer released with the pan's total `translation` and `velocity`.
    pub fn gesture_end(&mut self, translation: f32, velocity: f32) -> Release {
        let swipe = classify(translation, velocity, self.config.swipe_threshold);
        let before = self.index;
        match swipe {
            Some(SwipeDirection::Left) if self.index < WINDOW_SIZE - 1 => self.index += 1,
            Some(SwipeDirection::Right) if self.index > 0 => self.index -= 1,
            _ => {}
        }
        let index_changed = self.index != before;
        log::debug!(
            "carousel: release dx={translation:.1} v={velocity:.1} swipe={swipe:?} index {before} -> {}",
            self.index
        );
        self.settle_from(self.offset, 0.0);
        Release { swipe, index_changed }
    }

    /// The pointer was taken by something else before it was released.
    ///
    /// Settles back to the current index without classifying the drag.
    pub fn gesture_cancel(&mut self) {
        if !self.is_dragging() {
            return;
        }
        log::debug!("carousel: gesture cancelled at {:.1}", self.offset);
        self.settle_from(self.offset, 0.0);
    }

    /// Advance the settle animation by one frame. Returns true while still animating.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let CarouselPhase::Settling(spring) = &mut self.phase else {
            return false;
        };
        let settled = spring.step(dt);
        self.offset = spring.position();
        if settled {
            log::debug!("carousel: settled on slide {}", self.index);
            self.phase = CarouselPhase::Idle;
        }
        !settled
    }

    fn settle_from(&mut self, position: f32, velocity: f32) {
        let spring = Spring::new(self.config.spring, position, self.resting_offset()).with_velocity(velocity);
        if spring.is_settled() {
            self.offset = spring.target();
            self.phase = CarouselPhase::Idle;
        } else {
            self.offset = position;
            self.phase = CarouselPhase::Settling(spring);
        }
    }
}
