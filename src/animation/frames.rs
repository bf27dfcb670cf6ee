use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::counter::{CounterAnimation, Step};

/// A per-frame callback primitive.
///
/// `request` must never run the callback synchronously. Dropping the returned
/// handle cancels the request if it has not fired yet. `None` means frames
/// cannot be scheduled at all.
pub trait FrameScheduler {
    type Handle: 'static;

    fn request(&self, callback: Box<dyn FnOnce(f64)>) -> Option<Self::Handle>;
}

/// [`FrameScheduler`] backed by `window.requestAnimationFrame`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AnimationFrames;

pub struct FrameRequest {
    id: i32,
    _callback: Closure<dyn FnMut(f64)>,
}

impl Drop for FrameRequest {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(self.id);
        }
    }
}

impl FrameScheduler for AnimationFrames {
    type Handle = FrameRequest;

    fn request(&self, callback: Box<dyn FnOnce(f64)>) -> Option<FrameRequest> {
        let window = web_sys::window()?;
        let mut callback = Some(callback);
        let closure = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            if let Some(callback) = callback.take() {
                callback(timestamp);
            }
        });
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => Some(FrameRequest {
                id,
                _callback: closure,
            }),
            Err(err) => {
                warn!("requestAnimationFrame failed: {:?}", err);
                None
            }
        }
    }
}

struct DriverState<S: FrameScheduler> {
    animation: CounterAnimation,
    scheduler: S,
    pending: Option<S::Handle>,
    started: bool,
    generation: u64,
    listener: Rc<dyn Fn(i64)>,
}

/// Runs a [`CounterAnimation`] on a [`FrameScheduler`], one frame in flight
/// at a time, and reports every value to a listener.
///
/// Frames hold only a weak reference back to the driver, so a frame that
/// fires after the driver is dropped does nothing.
pub struct CounterDriver<S: FrameScheduler + 'static> {
    inner: Rc<RefCell<DriverState<S>>>,
}

impl<S: FrameScheduler + 'static> CounterDriver<S> {
    pub fn new<F>(animation: CounterAnimation, scheduler: S, listener: F) -> Self
    where
        F: Fn(i64) + 'static,
    {
        Self {
            inner: Rc::new(RefCell::new(DriverState {
                animation,
                scheduler,
                pending: None,
                started: false,
                generation: 0,
                listener: Rc::new(listener),
            })),
        }
    }

    pub fn value(&self) -> i64 {
        self.inner.borrow().animation.value()
    }

    pub fn target(&self) -> i64 {
        self.inner.borrow().animation.target()
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().animation.is_running()
    }

    pub fn has_pending_frame(&self) -> bool {
        self.inner.borrow().pending.is_some()
    }

    /// Applies the start gate. Only edges matter: `true` starts a fresh run,
    /// `false` cancels it and drops the value back to zero.
    pub fn set_start(&self, start: bool) {
        let (listener, value) = {
            let mut state = self.inner.borrow_mut();
            if state.started == start {
                return;
            }
            state.started = start;
            state.generation += 1;
            state.pending = None;

            if start {
                state.animation.start();
                debug!("counter to {} starting", state.animation.target());
                Self::schedule(&self.inner, &mut state);
            } else {
                state.animation.reset();
            }
            (state.listener.clone(), state.animation.value())
        };
        listener(value);
    }

    fn schedule(inner: &Rc<RefCell<DriverState<S>>>, state: &mut DriverState<S>) {
        let weak = Rc::downgrade(inner);
        let generation = state.generation;
        let request = state
            .scheduler
            .request(Box::new(move |now| Self::on_frame(&weak, generation, now)));
        match request {
            Some(handle) => state.pending = Some(handle),
            None => {
                warn!("animation frames unavailable, showing final value");
                state.animation.finish();
            }
        }
    }

    fn on_frame(inner: &Weak<RefCell<DriverState<S>>>, generation: u64, now: f64) {
        let Some(inner) = inner.upgrade() else {
            return;
        };
        let (listener, value) = {
            let Ok(mut state) = inner.try_borrow_mut() else {
                return;
            };
            // Left over from a run that has since been cancelled.
            if state.generation != generation {
                return;
            }
            state.pending = None;
            match state.animation.tick(now) {
                Step::Idle => return,
                Step::Running => Self::schedule(&inner, &mut state),
                Step::Finished => debug!("counter reached {}", state.animation.target()),
            }
            (state.listener.clone(), state.animation.value())
        };
        listener(value);
    }
}
