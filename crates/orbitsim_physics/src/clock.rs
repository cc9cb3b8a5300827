//! Variable time step from animation-frame timestamps

/// Simulated seconds advanced on the very first frame
pub const DEFAULT_INITIAL_DT: f64 = 1.0 / 60.0;

/// Simulated seconds per wall-clock second
///
/// 128 simulated seconds per elapsed millisecond.
pub const DEFAULT_TIME_SCALE: f64 = 128_000.0;

/// Converts frame timestamps into simulation time steps
///
/// The first tick has no previous timestamp and returns `initial_dt`.
/// Later ticks return `time_scale * min(now - last, max_frame_gap)`, so a
/// long pause (window hidden, debugger) cannot produce one giant step.
#[derive(Clone, Debug)]
pub struct FrameClock {
    /// Simulated seconds per wall-clock second
    pub time_scale: f64,
    /// Step used before a previous timestamp exists
    pub initial_dt: f64,
    /// Largest wall-clock gap (seconds) honoured between two frames
    pub max_frame_gap: f64,
    last: Option<f64>,
    frames: u64,
    simulated: f64,
}

impl FrameClock {
    /// Create a clock with the given time scale
    pub fn new(time_scale: f64) -> Self {
        Self {
            time_scale,
            initial_dt: DEFAULT_INITIAL_DT,
            max_frame_gap: 0.25,
            last: None,
            frames: 0,
            simulated: 0.0,
        }
    }

    /// Set the first-frame step
    pub fn with_initial_dt(mut self, initial_dt: f64) -> Self {
        self.initial_dt = initial_dt;
        self
    }

    /// Set the largest honoured wall-clock gap
    pub fn with_max_frame_gap(mut self, max_frame_gap: f64) -> Self {
        self.max_frame_gap = max_frame_gap;
        self
    }

    /// Advance to timestamp `now` (seconds) and return the simulation step
    pub fn tick(&mut self, now: f64) -> f64 {
        let dt = match self.last {
            None => self.initial_dt,
            Some(last) => {
                // Out-of-order timestamps never run time backwards
                let gap = (now - last).max(0.0).min(self.max_frame_gap);
                self.time_scale * gap
            }
        };

        self.last = Some(match self.last {
            Some(last) => last.max(now),
            None => now,
        });
        self.frames += 1;
        self.simulated += dt;
        dt
    }

    /// Number of ticks so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Total simulated seconds handed out so far
    pub fn simulated_seconds(&self) -> f64 {
        self.simulated
    }

    /// Forget the previous timestamp (next tick uses `initial_dt` again)
    pub fn reset(&mut self) {
        self.last = None;
        self.frames = 0;
        self.simulated = 0.0;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_SCALE)
    }
}
