use crate::config;

/// `1 - (1 - x)^3`, with `x` clamped to `[0, 1]`.
pub fn ease_out_cubic(x: f64) -> f64 {
    let x = if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) };
    1.0 - (1.0 - x).powi(3)
}

/// Outcome of a single [`CounterAnimation::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Not started, or already finished. Nothing changed.
    Idle,
    /// Value advanced; another frame is wanted.
    Running,
    /// Value pinned at the target; no more frames.
    Finished,
}

/// Count-up state advanced by an externally supplied clock.
///
/// The first tick after [`start`](Self::start) becomes the time origin.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: i64,
    duration_ms: f64,
    started_at: Option<f64>,
    current: i64,
    running: bool,
}

impl CounterAnimation {
    /// Negative targets count to zero. A duration that is not a positive
    /// finite number finishes on the first tick.
    pub fn new(target: i64, duration_ms: f64) -> Self {
        Self {
            target: target.max(0),
            duration_ms,
            started_at: None,
            current: 0,
            running: false,
        }
    }

    pub fn with_target(target: i64) -> Self {
        Self::new(target, config::DEFAULT_COUNTER_DURATION_MS)
    }

    pub fn value(&self) -> i64 {
        self.current
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn started_at(&self) -> Option<f64> {
        self.started_at
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        !self.running && self.started_at.is_some() && self.current == self.target
    }

    /// Begins a fresh run from zero, forgetting any earlier progress.
    pub fn start(&mut self) {
        self.started_at = None;
        self.current = 0;
        self.running = true;
    }

    pub fn reset(&mut self) {
        self.started_at = None;
        self.current = 0;
        self.running = false;
    }

    /// Jumps straight to the target, as when no frames can be scheduled.
    pub fn finish(&mut self) {
        self.started_at.get_or_insert(0.0);
        self.current = self.target;
        self.running = false;
    }

    /// Linear progress in `[0, 1]` at `now_ms`. Zero before the first tick.
    pub fn progress(&self, now_ms: f64) -> f64 {
        let Some(started_at) = self.started_at else {
            return 0.0;
        };
        if !(self.duration_ms > 0.0) || !self.duration_ms.is_finite() {
            return 1.0;
        }
        let progress = (now_ms - started_at) / self.duration_ms;
        if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        }
    }

    pub fn tick(&mut self, now_ms: f64) -> Step {
        if !self.running {
            return Step::Idle;
        }
        self.started_at.get_or_insert(now_ms);

        let progress = self.progress(now_ms);
        if progress >= 1.0 {
            self.current = self.target;
            self.running = false;
            return Step::Finished;
        }

        let eased = ease_out_cubic(progress);
        let next = (self.target as f64 * eased).floor() as i64;
        // A clock stepping backwards must not pull the display down.
        self.current = next.max(self.current).min(self.target);
        Step::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(animation: &mut CounterAnimation, frames: impl IntoIterator<Item = f64>) -> Vec<i64> {
        frames
            .into_iter()
            .map(|now| {
                animation.tick(now);
                animation.value()
            })
            .collect()
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.5), 0.875);
        assert_eq!(ease_out_cubic(-3.0), 0.0);
        assert_eq!(ease_out_cubic(4.0), 1.0);
        assert_eq!(ease_out_cubic(f64::NAN), 0.0);
    }

    #[test]
    fn idle_until_started() {
        let mut animation = CounterAnimation::new(50, 1200.0);
        assert_eq!(animation.tick(0.0), Step::Idle);
        assert_eq!(animation.tick(5000.0), Step::Idle);
        assert_eq!(animation.value(), 0);
        assert_eq!(animation.started_at(), None);
    }

    #[test]
    fn first_tick_sets_origin() {
        let mut animation = CounterAnimation::new(50, 1200.0);
        animation.start();
        assert_eq!(animation.tick(340.0), Step::Running);
        assert_eq!(animation.started_at(), Some(340.0));
        assert_eq!(animation.value(), 0);

        animation.tick(340.0 + 600.0);
        assert_eq!(animation.value(), 43);
    }

    #[test]
    fn counts_to_fifty_over_1200ms() {
        let mut animation = CounterAnimation::new(50, 1200.0);
        animation.start();
        let values = run(&mut animation, (0..=60).map(|frame| f64::from(frame) * 20.0));

        assert_eq!(values.last(), Some(&50));
        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(values.iter().all(|value| (0..=50).contains(value)));
        assert!(animation.is_finished());
        assert_eq!(animation.tick(1300.0), Step::Idle);
    }

    #[test]
    fn stops_exactly_at_full_progress() {
        let mut animation = CounterAnimation::new(7, 100.0);
        animation.start();
        assert_eq!(animation.tick(0.0), Step::Running);
        assert_eq!(animation.tick(99.0), Step::Running);
        assert_eq!(animation.tick(100.0), Step::Finished);
        assert_eq!(animation.value(), 7);
    }

    #[test]
    fn zero_target_stays_zero() {
        let mut animation = CounterAnimation::new(0, 1200.0);
        animation.start();
        let values = run(&mut animation, (0..=12).map(|frame| f64::from(frame) * 100.0));
        assert!(values.iter().all(|value| *value == 0));
        assert!(!animation.is_running());
    }

    #[test]
    fn negative_target_clamps_to_zero() {
        let mut animation = CounterAnimation::new(-25, 1200.0);
        animation.start();
        animation.tick(0.0);
        animation.tick(1200.0);
        assert_eq!(animation.target(), 0);
        assert_eq!(animation.value(), 0);
    }

    #[test]
    fn non_positive_duration_finishes_on_first_tick() {
        for duration in [0.0, -500.0, f64::NAN, f64::INFINITY] {
            let mut animation = CounterAnimation::new(150, duration);
            animation.start();
            assert_eq!(animation.tick(16.0), Step::Finished);
            assert_eq!(animation.value(), 150);
        }
    }

    #[test]
    fn backwards_clock_never_decreases_value() {
        let mut animation = CounterAnimation::new(1000, 1200.0);
        animation.start();
        animation.tick(0.0);
        animation.tick(600.0);
        let reached = animation.value();
        animation.tick(100.0);
        assert_eq!(animation.value(), reached);
    }

    #[test]
    fn start_forgets_previous_run() {
        let mut animation = CounterAnimation::new(50, 1200.0);
        animation.start();
        run(&mut animation, [0.0, 400.0, 800.0]);
        assert!(animation.value() > 0);

        animation.start();
        assert_eq!(animation.value(), 0);
        assert_eq!(animation.started_at(), None);
        animation.tick(5000.0);
        assert_eq!(animation.started_at(), Some(5000.0));
        assert_eq!(animation.value(), 0);
    }

    #[test]
    fn finish_pins_target() {
        let mut animation = CounterAnimation::with_target(20);
        animation.start();
        animation.finish();
        assert_eq!(animation.value(), 20);
        assert!(animation.is_finished());
        assert_eq!(animation.tick(10.0), Step::Idle);
    }
}
