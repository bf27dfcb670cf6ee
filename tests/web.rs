#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use software_chamber::animation::counter::CounterAnimation;
use software_chamber::animation::frames::{AnimationFrames, CounterDriver};
use software_chamber::animation::visibility::{BrowserIntersection, VisibilityTracker};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn tracker_observes_detached_region_without_revealing() {
    let document = web_sys::window().unwrap().document().unwrap();
    let region = document.create_element("section").unwrap();

    let mut tracker = VisibilityTracker::<BrowserIntersection>::new(0.4);
    tracker.bind(&BrowserIntersection, &region, || ());

    assert!(tracker.is_observing());
    assert!(!tracker.is_visible());
    drop(tracker);
}

#[wasm_bindgen_test]
async fn counter_reaches_target_on_animation_frames() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let driver = CounterDriver::new(CounterAnimation::new(30, 100.0), AnimationFrames, {
        let seen = seen.clone();
        move |value| seen.borrow_mut().push(value)
    });

    driver.set_start(true);
    TimeoutFuture::new(1_000).await;

    assert_eq!(driver.value(), 30);
    assert_eq!(seen.borrow().last(), Some(&30));
    assert!(!driver.has_pending_frame());
}

#[wasm_bindgen_test]
async fn dropped_counter_stops_updating() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let driver = CounterDriver::new(CounterAnimation::new(1000, 5_000.0), AnimationFrames, {
        let seen = seen.clone();
        move |value| seen.borrow_mut().push(value)
    });

    driver.set_start(true);
    TimeoutFuture::new(100).await;
    drop(driver);
    let updates = seen.borrow().len();

    TimeoutFuture::new(200).await;
    assert_eq!(seen.borrow().len(), updates);
}
