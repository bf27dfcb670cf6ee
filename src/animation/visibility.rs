//! One-shot "has this region been on screen" tracking.
//!
//! A [`VisibilityTracker`] owns a [`VisibilityLatch`] and at most one
//! subscription to an [`IntersectionSource`]. The latch flips to visible the
//! first time a delivery reports the region intersecting at or above the
//! threshold and never flips back. Dropping the tracker drops the
//! subscription, which disconnects the underlying observer.

use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config;
use crate::error::ObserveError;

/// A single report from the host about how much of a region is on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub ratio: f64,
    pub intersecting: bool,
}

impl IntersectionSample {
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            intersecting: ratio > 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityLatch {
    threshold: f64,
    visible: bool,
}

impl VisibilityLatch {
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            config::DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            visible: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feeds one delivery into the latch. Returns `true` only for the
    /// delivery that flips it.
    pub fn record(&mut self, sample: IntersectionSample) -> bool {
        if self.visible {
            return false;
        }
        if sample.intersecting && sample.ratio >= self.threshold {
            self.visible = true;
            return true;
        }
        false
    }
}

impl Default for VisibilityLatch {
    fn default() -> Self {
        Self::new(config::DEFAULT_THRESHOLD)
    }
}

/// Something that can report intersection changes for a region.
///
/// The subscription stays active for as long as the returned value lives.
pub trait IntersectionSource {
    type Region: ?Sized;
    type Subscription;

    fn subscribe(
        &self,
        region: &Self::Region,
        threshold: f64,
        on_sample: Box<dyn FnMut(IntersectionSample)>,
    ) -> Result<Self::Subscription, ObserveError>;
}

pub struct VisibilityTracker<S: IntersectionSource> {
    latch: Rc<Cell<VisibilityLatch>>,
    subscription: Option<S::Subscription>,
    bound: bool,
}

impl<S: IntersectionSource> VisibilityTracker<S> {
    pub fn new(threshold: f64) -> Self {
        Self {
            latch: Rc::new(Cell::new(VisibilityLatch::new(threshold))),
            subscription: None,
            bound: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.latch.get().threshold()
    }

    pub fn is_visible(&self) -> bool {
        self.latch.get().is_visible()
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    pub fn is_observing(&self) -> bool {
        self.subscription.is_some()
    }

    /// Starts observing `region`. Only the first call has any effect; a
    /// failed subscription leaves the tracker permanently hidden.
    ///
    /// `on_visible` runs once, on the delivery that flips the latch.
    pub fn bind<F>(&mut self, source: &S, region: &S::Region, on_visible: F)
    where
        F: Fn() + 'static,
    {
        if self.bound {
            return;
        }
        self.bound = true;

        let latch = Rc::downgrade(&self.latch);
        let on_sample = Box::new(move |sample: IntersectionSample| {
            // Tracker already torn down.
            let Some(latch) = latch.upgrade() else {
                return;
            };
            let mut state = latch.get();
            if state.record(sample) {
                latch.set(state);
                debug!("region visible at ratio {:.2}", sample.ratio);
                on_visible();
            }
        });

        match source.subscribe(region, self.threshold(), on_sample) {
            Ok(subscription) => self.subscription = Some(subscription),
            Err(err) => warn!("visibility tracking disabled: {}", err),
        }
    }

    /// Releases the subscription early. The latch keeps its value.
    pub fn release(&mut self) {
        self.subscription = None;
    }
}

/// [`IntersectionSource`] backed by the browser's `IntersectionObserver`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct BrowserIntersection;

pub struct ObserverSubscription {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ObserverSubscription {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl IntersectionSource for BrowserIntersection {
    type Region = Element;
    type Subscription = ObserverSubscription;

    fn subscribe(
        &self,
        region: &Element,
        threshold: f64,
        mut on_sample: Box<dyn FnMut(IntersectionSample)>,
    ) -> Result<ObserverSubscription, ObserveError> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        on_sample(IntersectionSample {
                            ratio: entry.intersection_ratio(),
                            intersecting: entry.is_intersecting(),
                        });
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|err| ObserveError::Unsupported(format!("{:?}", err)))?;
        observer.observe(region);

        Ok(ObserverSubscription {
            observer,
            _callback: callback,
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::{Cell, RefCell};
    use std::rc::{Rc, Weak};

    use super::*;

    type Sinks = RefCell<Vec<(usize, Box<dyn FnMut(IntersectionSample)>)>>;

    /// In-memory source: tests push ratios at every live subscriber.
    #[derive(Clone, Default)]
    pub struct ManualIntersection {
        sinks: Rc<Sinks>,
        next_id: Rc<Cell<usize>>,
        subscribe_calls: Rc<Cell<usize>>,
        unsupported: bool,
    }

    pub struct ManualSubscription {
        id: usize,
        sinks: Weak<Sinks>,
    }

    impl Drop for ManualSubscription {
        fn drop(&mut self) {
            if let Some(sinks) = self.sinks.upgrade() {
                sinks.borrow_mut().retain(|(id, _)| *id != self.id);
            }
        }
    }

    impl ManualIntersection {
        pub fn unsupported() -> Self {
            Self {
                unsupported: true,
                ..Self::default()
            }
        }

        pub fn deliver(&self, ratio: f64) {
            self.deliver_sample(IntersectionSample::from_ratio(ratio));
        }

        pub fn deliver_sample(&self, sample: IntersectionSample) {
            for (_, sink) in self.sinks.borrow_mut().iter_mut() {
                sink(sample);
            }
        }

        pub fn live_subscriptions(&self) -> usize {
            self.sinks.borrow().len()
        }

        pub fn subscribe_calls(&self) -> usize {
            self.subscribe_calls.get()
        }

        /// Detaches every sink without cancelling it, so a test can fire a
        /// delivery that arrives after teardown.
        pub fn steal_sinks(&self) -> Vec<Box<dyn FnMut(IntersectionSample)>> {
            self.sinks
                .borrow_mut()
                .drain(..)
                .map(|(_, sink)| sink)
                .collect()
        }
    }

    impl IntersectionSource for ManualIntersection {
        type Region = str;
        type Subscription = ManualSubscription;

        fn subscribe(
            &self,
            _region: &str,
            _threshold: f64,
            on_sample: Box<dyn FnMut(IntersectionSample)>,
        ) -> Result<ManualSubscription, ObserveError> {
            self.subscribe_calls.set(self.subscribe_calls.get() + 1);
            if self.unsupported {
                return Err(ObserveError::Unsupported("ReferenceError".to_string()));
            }
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.sinks.borrow_mut().push((id, on_sample));
            Ok(ManualSubscription {
                id,
                sinks: Rc::downgrade(&self.sinks),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::testing::ManualIntersection;
    use super::*;

    fn counting() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
        let calls = Rc::new(Cell::new(0));
        let hook = {
            let calls = calls.clone();
            move || calls.set(calls.get() + 1)
        };
        (calls, hook)
    }

    #[test]
    fn latch_clamps_threshold() {
        assert_eq!(VisibilityLatch::new(1.7).threshold(), 1.0);
        assert_eq!(VisibilityLatch::new(-0.2).threshold(), 0.0);
        assert_eq!(VisibilityLatch::new(f64::NAN).threshold(), 0.4);
        assert_eq!(VisibilityLatch::default().threshold(), 0.4);
    }

    #[test]
    fn ratio_below_threshold_never_flips() {
        for threshold in [0.1, 0.25, 0.4, 0.75, 1.0] {
            let mut latch = VisibilityLatch::new(threshold);
            for step in 0..100 {
                let ratio = threshold * f64::from(step) / 100.0;
                latch.record(IntersectionSample::from_ratio(ratio));
            }
            assert!(!latch.is_visible(), "threshold {threshold}");
        }
    }

    #[test]
    fn zero_ratio_never_counts_even_at_zero_threshold() {
        let mut latch = VisibilityLatch::new(0.0);
        assert!(!latch.record(IntersectionSample::from_ratio(0.0)));
        assert!(!latch.is_visible());
        assert!(latch.record(IntersectionSample::from_ratio(0.01)));
    }

    #[test]
    fn non_intersecting_report_is_ignored() {
        let mut latch = VisibilityLatch::new(0.4);
        latch.record(IntersectionSample {
            ratio: 0.9,
            intersecting: false,
        });
        assert!(!latch.is_visible());
    }

    #[test]
    fn latch_flips_once_and_stays() {
        let mut latch = VisibilityLatch::new(0.4);
        assert!(latch.record(IntersectionSample::from_ratio(0.4)));
        assert!(!latch.record(IntersectionSample::from_ratio(0.9)));
        latch.record(IntersectionSample::from_ratio(0.0));
        assert!(latch.is_visible());
    }

    #[test]
    fn tracker_reports_visible_after_crossing() {
        let source = ManualIntersection::default();
        let (calls, on_visible) = counting();
        let mut tracker = VisibilityTracker::new(0.4);

        tracker.bind(&source, "stats", on_visible);
        assert!(!tracker.is_visible());

        source.deliver(0.2);
        assert!(!tracker.is_visible());

        source.deliver(0.55);
        source.deliver(0.0);
        source.deliver(0.8);
        assert!(tracker.is_visible());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn bind_is_idempotent() {
        let source = ManualIntersection::default();
        let mut tracker = VisibilityTracker::new(0.3);

        tracker.bind(&source, "hero", || ());
        tracker.bind(&source, "hero", || ());
        tracker.bind(&source, "elsewhere", || ());

        assert!(tracker.is_bound());
        assert_eq!(source.subscribe_calls(), 1);
        assert_eq!(source.live_subscriptions(), 1);
    }

    #[test]
    fn drop_disconnects_whether_or_not_visible() {
        let source = ManualIntersection::default();
        {
            let mut never_seen = VisibilityTracker::new(0.4);
            never_seen.bind(&source, "faq", || ());
            let mut seen = VisibilityTracker::new(0.4);
            seen.bind(&source, "contact", || ());
            source.deliver(1.0);
            assert!(seen.is_visible());
            assert_eq!(source.live_subscriptions(), 2);
        }
        assert_eq!(source.live_subscriptions(), 0);
    }

    #[test]
    fn unsupported_source_degrades_to_hidden() {
        let source = ManualIntersection::unsupported();
        let (calls, on_visible) = counting();
        let mut tracker = VisibilityTracker::new(0.4);

        tracker.bind(&source, "stats", on_visible);
        source.deliver(1.0);

        assert!(tracker.is_bound());
        assert!(!tracker.is_observing());
        assert!(!tracker.is_visible());
        assert_eq!(calls.get(), 0);

        // A failed bind is not retried.
        tracker.bind(&source, "stats", || ());
        assert_eq!(source.subscribe_calls(), 1);
    }

    #[test]
    fn delivery_after_teardown_is_a_no_op() {
        let source = ManualIntersection::default();
        let (calls, on_visible) = counting();
        let mut tracker = VisibilityTracker::new(0.4);
        tracker.bind(&source, "process", on_visible);

        let mut stray = source.steal_sinks();
        drop(tracker);

        for sink in stray.iter_mut() {
            sink(IntersectionSample::from_ratio(1.0));
        }
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn release_keeps_latched_value() {
        let source = ManualIntersection::default();
        let mut tracker = VisibilityTracker::new(0.4);
        tracker.bind(&source, "services", || ());
        source.deliver(0.6);

        tracker.release();
        assert!(tracker.is_visible());
        assert_eq!(source.live_subscriptions(), 0);
    }
}
