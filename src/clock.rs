//! Frame timing: fixed-step updates, soft interval schedules, frame-rate
//! limiting and FPS measurement.  Everything here is driven by explicit
//! durations so it can be exercised without a window.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Longest wall-clock gap fed into the simulation per frame, in seconds.
/// Longer stalls (window drags, breakpoints) are dropped instead of replayed.
pub const MAX_FRAME_TIME: f32 = 0.25;

/// Fixed-timestep accumulator driving `Game::update`.
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    accumulator: f32,
}

impl FixedStep {
    pub fn new(updates_per_second: u32) -> Self {
        Self { step: 1.0 / updates_per_second.max(1) as f32, accumulator: 0.0 }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Add `elapsed` seconds and return how many whole steps are due.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_TIME);
        let mut steps = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            steps += 1;
        }
        steps
    }
}

/// A repeating interval that only accumulates time while running.
///
/// "Soft" scheduling: a late frame catches up with extra ticks, but never
/// more than [`IntervalSchedule::MAX_CATCH_UP`] in one `advance`.
#[derive(Debug, Clone)]
pub struct IntervalSchedule {
    interval: f32,
    pending: f32,
    running: bool,
}

impl IntervalSchedule {
    pub const MAX_CATCH_UP: u32 = 5;

    pub fn new(interval: f32) -> Self {
        Self { interval: interval.max(f32::EPSILON), pending: 0.0, running: false }
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.pending = 0.0;
        }
    }

    /// Stop ticking and forget any partially elapsed interval.
    pub fn stop(&mut self) {
        self.running = false;
        self.pending = 0.0;
    }

    /// Feed `dt` seconds; returns the ticks that are due.
    ///
    /// Each tick normally covers one interval.  When the backlog is too long
    /// to replay, the capped ticks share all of the time that passed.
    pub fn advance(&mut self, dt: f32) -> Due {
        if !self.running {
            return Due::NONE;
        }
        self.pending += dt.max(0.0);
        let due = (self.pending / self.interval).floor() as u32;
        if due > Self::MAX_CATCH_UP {
            let share = self.pending / Self::MAX_CATCH_UP as f32;
            self.pending = 0.0;
            return Due { ticks: Self::MAX_CATCH_UP, dt: share };
        }
        self.pending -= due as f32 * self.interval;
        Due { ticks: due, dt: self.interval }
    }
}

/// Ticks produced by one [`IntervalSchedule::advance`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Due {
    pub ticks: u32,
    /// Seconds each tick stands for.
    pub dt: f32,
}

impl Due {
    pub const NONE: Self = Self { ticks: 0, dt: 0.0 };
}

/// Caps how often frames are presented.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    frame: Duration,
    next: Option<Instant>,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        Self { frame: Duration::from_secs_f64(1.0 / fps.max(1) as f64), next: None }
    }

    /// Returns true if a frame may be drawn at `now`, and books the next slot.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next {
            Some(next) if now < next => false,
            Some(next) => {
                // Keep the booked cadence unless a whole frame was missed.
                let booked = next + self.frame;
                self.next = Some(if booked <= now { now + self.frame } else { booked });
                true
            }
            None => {
                self.next = Some(now + self.frame);
                true
            }
        }
    }

    /// When the next frame is due, if one has been booked.
    pub fn deadline(&self) -> Option<Instant> {
        self.next
    }
}

/// Rolling frame-time window for the FPS readout.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: VecDeque<f32>,
    capacity: usize,
    since_report: f32,
}

impl FpsCounter {
    /// How often [`FpsCounter::record`] reports a fresh reading, in seconds.
    pub const REPORT_INTERVAL: f32 = 0.5;

    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { frame_times: VecDeque::with_capacity(capacity), capacity, since_report: 0.0 }
    }

    /// Record one frame; returns the average FPS when a report is due.
    pub fn record(&mut self, frame_time: f32) -> Option<f32> {
        if self.frame_times.len() >= self.capacity {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(frame_time);

        self.since_report += frame_time;
        if self.since_report >= Self::REPORT_INTERVAL {
            self.since_report = 0.0;
            Some(self.fps())
        } else {
            None
        }
    }

    pub fn fps(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let avg = self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32;
        if avg > 0.0 { 1.0 / avg } else { 0.0 }
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(60)
    }
}
