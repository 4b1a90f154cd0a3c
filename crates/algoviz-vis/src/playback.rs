//! Step-at-a-time replay of a recorded log.
//!
//! No timer lives here. The host runs one repeating timer every
//! [`Playback::interval_ms`] milliseconds while [`Playback::is_playing`]
//! holds, and calls [`Playback::on_interval`] from it.

/// Interval between steps when none is configured.
pub const DEFAULT_INTERVAL_MS: u64 = 200;

/// Replay cursor over a step log.
#[derive(Debug, Clone)]
pub struct Playback<S> {
    steps: Vec<S>,
    next: usize,
    playing: bool,
    interval_ms: u64,
}

impl<S> Playback<S> {
    /// Paused cursor before the first step.
    pub fn new(steps: impl Into<Vec<S>>) -> Self {
        Self {
            steps: steps.into(),
            next: 0,
            playing: false,
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }

    /// Pause, swap in a freshly built log and rewind.
    pub fn reload(&mut self, steps: impl Into<Vec<S>>) {
        self.pause();
        self.steps = steps.into();
        self.next = 0;
    }

    /// Number of steps already emitted.
    pub fn position(&self) -> usize {
        self.next
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether every step has been emitted.
    pub fn is_finished(&self) -> bool {
        self.next >= self.steps.len()
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Change the step interval.
    ///
    /// Returns `true` when playback is running, in which case the host has to
    /// restart its timer for the new interval to take effect.
    pub fn set_interval_ms(&mut self, interval_ms: u64) -> bool {
        self.interval_ms = interval_ms;
        self.playing
    }

    /// Start playing. Returns `false` if already playing.
    pub fn play(&mut self) -> bool {
        if self.playing {
            return false;
        }
        self.playing = true;
        true
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Emit the next step.
    ///
    /// Returns the step (none once the log is exhausted) and whether further
    /// steps remain after it.
    pub fn tick(&mut self) -> (Option<&S>, bool) {
        let Some(step) = self.steps.get(self.next) else {
            return (None, false);
        };
        self.next += 1;
        (Some(step), self.next < self.steps.len())
    }

    /// Manual single step: pauses, then emits the next step.
    pub fn step_forward(&mut self) -> Option<&S> {
        self.pause();
        self.tick().0
    }

    /// Timer callback. Emits a step while playing and pauses itself when
    /// the log runs out, so the host can drop its timer.
    pub fn on_interval(&mut self) -> Option<&S> {
        if !self.playing {
            return None;
        }
        if self.next + 1 >= self.steps.len() {
            self.playing = false;
        }
        self.tick().0
    }

    /// Every step already emitted, for rebuilding state.
    pub fn steps_to_current(&self) -> &[S] {
        &self.steps[..self.next]
    }

    /// Steps not yet emitted.
    pub fn remaining(&self) -> &[S] {
        &self.steps[self.next..]
    }
}
