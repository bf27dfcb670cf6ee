use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::animation::counter::CounterAnimation;
use crate::animation::frames::{AnimationFrames, CounterDriver};
use crate::animation::visibility::{BrowserIntersection, VisibilityTracker};
use crate::error::ObserveError;

#[derive(Clone, PartialEq)]
pub struct InView {
    /// Attach to the element whose visibility gates the reveal.
    pub node: NodeRef,
    pub visible: bool,
}

/// Reports whether the referenced element has ever been at least
/// `threshold` visible. The threshold of the first render is kept for the
/// lifetime of the component.
#[hook]
pub fn use_in_view(threshold: f64) -> InView {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);
    let threshold = *use_state(|| threshold);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let mut tracker = VisibilityTracker::<BrowserIntersection>::new(threshold);
                match node.cast::<Element>() {
                    Some(region) => {
                        tracker.bind(&BrowserIntersection, &region, move || visible.set(true))
                    }
                    None => warn!("visibility tracking disabled: {}", ObserveError::Unmounted),
                }
                move || drop(tracker)
            },
            (),
        );
    }

    InView {
        node,
        visible: *visible,
    }
}

/// Counts from zero up to `target` over `duration_ms` once `start` is true.
/// Any change of input begins again from zero.
#[hook]
pub fn use_counter(target: i64, duration_ms: f64, start: bool) -> i64 {
    let value = use_state_eq(|| 0_i64);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |&(target, duration_ms, start)| {
                let driver = CounterDriver::new(
                    CounterAnimation::new(target, duration_ms),
                    AnimationFrames,
                    {
                        let value = value.clone();
                        move |next| value.set(next)
                    },
                );
                if start {
                    driver.set_start(true);
                } else {
                    value.set(0);
                }
                move || drop(driver)
            },
            (target, duration_ms, start),
        );
    }

    *value
}
