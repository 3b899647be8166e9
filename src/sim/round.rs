//! Round countdown state machine
//!
//! Idle until the first direction key, then one tick per second. A tick that
//! finds zero seconds left ends the round.

use crate::error::GameError;

/// Whether the countdown is ticking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerPhase {
    #[default]
    Idle,
    Running,
}

/// What a single countdown tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundTick {
    /// No round is running; nothing changed
    Inactive,
    /// One second elapsed
    Counted { remaining: u32 },
    /// The round is over and the tick source must be cancelled
    Ended { final_score: u32, best_score: u32 },
}

/// Score, best score and countdown for the current round
#[derive(Debug, Clone)]
pub struct RoundState {
    pub phase: TimerPhase,
    pub seconds_remaining: u32,
    pub score: u32,
    pub best_score: u32,
    /// Accumulated background scroll time while the round runs
    pub scroll_seconds: f32,
    duration_secs: u32,
}

impl RoundState {
    pub fn new(duration_secs: u32) -> Self {
        Self {
            phase: TimerPhase::Idle,
            seconds_remaining: duration_secs,
            score: 0,
            best_score: 0,
            scroll_seconds: 0.0,
            duration_secs,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    /// Idle -> Running. Fails if a countdown is already live.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.is_running() {
            log::warn!("Round start rejected: timer already running");
            return Err(GameError::RoundTimerAlreadyRunning);
        }
        self.phase = TimerPhase::Running;
        self.seconds_remaining = self.duration_secs;
        log::info!("Round started ({}s)", self.duration_secs);
        Ok(())
    }

    /// Advance the countdown by one second
    pub fn tick(&mut self) -> RoundTick {
        if !self.is_running() {
            return RoundTick::Inactive;
        }

        if self.seconds_remaining == 0 {
            let final_score = self.score;
            self.phase = TimerPhase::Idle;
            self.best_score = self.best_score.max(final_score);
            self.score = 0;
            self.seconds_remaining = self.duration_secs;
            self.scroll_seconds = 0.0;
            log::info!(
                "Round over: score {}, best {}",
                final_score,
                self.best_score
            );
            return RoundTick::Ended {
                final_score,
                best_score: self.best_score,
            };
        }

        self.seconds_remaining -= 1;
        RoundTick::Counted {
            remaining: self.seconds_remaining,
        }
    }
}
