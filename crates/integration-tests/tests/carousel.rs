//! Integration tests for carousel navigation and autoplay bookkeeping.

#![allow(clippy::unwrap_used)]

use std::cell::RefCell;

use bistro_storefront::carousel::{Autoplay, Carousel};
use bistro_storefront::config::SiteConfig;

#[test]
fn test_full_cycle_in_both_directions() {
    let mut carousel = Carousel::new(4).unwrap();

    let forward: Vec<_> = (0..5).map(|_| carousel.next()).collect();
    assert_eq!(forward, [1, 2, 3, 0, 1]);

    let backward: Vec<_> = (0..3).map(|_| carousel.prev()).collect();
    assert_eq!(backward, [0, 3, 2]);
}

#[test]
fn test_exactly_one_slide_active() {
    let mut carousel = Carousel::new(3).unwrap();
    carousel.goto(-1);

    let active: Vec<_> = (0..carousel.len()).filter(|&n| carousel.is_active(n)).collect();
    assert_eq!(active, [2]);
}

#[test]
fn test_empty_slider_builds_nothing() {
    assert_eq!(Carousel::new(0), None);
}

#[test]
fn test_hover_pauses_and_resumes_with_one_timer() {
    // Fake timer host: hands out increasing ids and records what is live
    let live = RefCell::new(Vec::<i32>::new());
    let next_id = RefCell::new(0);
    let schedule = |_period: i32| {
        *next_id.borrow_mut() += 1;
        let id = *next_id.borrow();
        live.borrow_mut().push(id);
        Some(id)
    };
    let cancel = |id: i32| live.borrow_mut().retain(|&h| h != id);

    let mut autoplay = Autoplay::new(SiteConfig::default().autoplay_interval());
    assert_eq!(autoplay.period_ms(), 5000);

    autoplay.start(schedule, cancel);
    assert_eq!(*live.borrow(), [1]);

    // mouseenter
    autoplay.stop(cancel);
    assert!(live.borrow().is_empty());

    // mouseleave, twice in a row
    autoplay.start(schedule, cancel);
    autoplay.start(schedule, cancel);
    assert_eq!(*live.borrow(), [3]);
}
