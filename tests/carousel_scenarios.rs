use std::time::{Duration, Instant};

use chrono::NaiveDate;
use mealplan::core::carousel::{CarouselConfig, CarouselPhase, GestureCarousel};
use mealplan::core::date_window::WINDOW_SIZE;
use mealplan::core::day_grid::day_grid;
use mealplan::core::gesture::PanTracker;

const WIDTH: f32 = 360.0;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn settle(carousel: &mut GestureCarousel) -> usize {
    let mut frames = 0;
    while carousel.tick(Duration::from_millis(16)) {
        frames += 1;
        assert!(frames < 1000, "carousel never settled");
    }
    frames
}

/// Drive a pan through the tracker the way the UI does.
fn pan(carousel: &mut GestureCarousel, points: &[(u64, f32)]) {
    let t0 = Instant::now();
    let (first_ms, first_x) = points[0];
    let mut tracker = PanTracker::begin(first_x, t0 + Duration::from_millis(first_ms));
    carousel.gesture_start();
    for &(ms, x) in &points[1..points.len() - 1] {
        let translation = tracker.sample(x, t0 + Duration::from_millis(ms));
        carousel.gesture_update(translation);
    }
    let (last_ms, last_x) = points[points.len() - 1];
    let release = tracker.release(last_x, t0 + Duration::from_millis(last_ms));
    carousel.gesture_update(release.translation);
    carousel.gesture_end(release.translation, release.velocity);
}

#[test]
fn week_of_june_fifteenth() {
    let mut carousel = GestureCarousel::new(date(2024, 6, 15), WIDTH, CarouselConfig::default());
    assert_eq!(
        carousel.anchors(),
        &[date(2024, 6, 1), date(2024, 6, 8), date(2024, 6, 15), date(2024, 6, 22), date(2024, 6, 29)]
    );
    assert_eq!(carousel.index(), 2);

    pan(&mut carousel, &[(0, 300.0), (30, 240.0), (60, 180.0), (90, 120.0)]);
    assert_eq!(carousel.index(), 3);
    settle(&mut carousel);
    assert_eq!(carousel.offset(), -3.0 * WIDTH);
    assert_eq!(carousel.phase(), &CarouselPhase::Idle);

    let cells = day_grid(carousel.active_anchor());
    assert_eq!(cells[0].date, date(2024, 6, 16));
    assert_eq!(cells[6].date, date(2024, 6, 22));
}

#[test]
fn slow_drag_that_reverses_does_not_swipe() {
    let mut carousel = GestureCarousel::new(date(2024, 6, 15), WIDTH, CarouselConfig::default());
    pan(&mut carousel, &[(0, 300.0), (200, 100.0), (400, 120.0), (450, 140.0)]);
    assert_eq!(carousel.index(), 2);
    settle(&mut carousel);
    assert_eq!(carousel.offset(), -2.0 * WIDTH);
}

#[test]
fn flicking_past_the_ends_never_leaves_the_window() {
    let mut carousel = GestureCarousel::new(date(2024, 6, 15), WIDTH, CarouselConfig::default());
    for _ in 0..10 {
        pan(&mut carousel, &[(0, 100.0), (20, 200.0), (40, 300.0)]);
    }
    assert_eq!(carousel.index(), 0);
    settle(&mut carousel);
    assert_eq!(carousel.offset(), 0.0);

    for _ in 0..10 {
        pan(&mut carousel, &[(0, 300.0), (20, 200.0), (40, 100.0)]);
    }
    assert_eq!(carousel.index(), WINDOW_SIZE - 1);
    settle(&mut carousel);
    assert_eq!(carousel.offset(), -((WINDOW_SIZE - 1) as f32) * WIDTH);
}

#[test]
fn grabbing_mid_settle_takes_over() {
    let mut carousel = GestureCarousel::new(date(2024, 6, 15), WIDTH, CarouselConfig::default());
    pan(&mut carousel, &[(0, 300.0), (20, 200.0), (40, 100.0)]);
    assert!(carousel.tick(Duration::from_millis(16)));

    carousel.gesture_start();
    assert!(carousel.is_dragging());
    carousel.gesture_update(15.0);
    assert_eq!(carousel.offset(), -3.0 * WIDTH + 15.0);
    carousel.gesture_end(15.0, 40.0);
    settle(&mut carousel);
    assert_eq!(carousel.index(), 3);
    assert_eq!(carousel.offset(), -3.0 * WIDTH);
}

#[test]
fn press_taken_by_a_control_mid_settle_still_comes_to_rest() {
    let mut carousel = GestureCarousel::new(date(2024, 6, 15), WIDTH, CarouselConfig::default());
    pan(&mut carousel, &[(0, 300.0), (20, 250.0), (40, 200.0), (60, 150.0)]);
    assert_eq!(carousel.index(), 3);
    for _ in 0..5 {
        carousel.tick(Duration::from_millis(16));
    }

    // A press lands on the delete button, which then owns the pointer.
    carousel.gesture_start();
    assert!(!carousel.is_animating());
    carousel.gesture_cancel();

    assert!(carousel.is_animating());
    settle(&mut carousel);
    assert_eq!(carousel.index(), 3);
    assert_eq!(carousel.offset(), carousel.resting_offset());
    assert_eq!(carousel.phase(), &CarouselPhase::Idle);
}
