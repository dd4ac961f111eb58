//! Pomodoro timer state machine.
//!
//! The timer is driven by [`Pomodoro::tick`] with elapsed seconds, so it
//! works the same under a real clock and in tests.

use serde::Serialize;

use crate::config::{PomodoroConfig, MAX_POMODORO_CYCLES};
use crate::tools::{ToolError, ToolResult};

named_options! {
    /// Timer phase.
    pub enum Phase {
        /// Focused work session
        Work => "work",
        /// Break between work sessions
        ShortBreak => "short-break",
        /// Break after every Nth work session
        LongBreak => "long-break",
    }
}

named_options! {
    /// Whether the clock is counting.
    pub enum TimerStatus {
        /// Not started yet, or reset
        Idle => "idle",
        /// Counting down
        Running => "running",
        /// Stopped mid-phase
        Paused => "paused",
    }
}

/// Something that happened during [`Pomodoro::tick`] or [`Pomodoro::skip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PomodoroEvent {
    /// A phase ran out (or was skipped)
    PhaseCompleted {
        /// The phase that ended
        phase: Phase,
        /// Work sessions completed so far
        completed_sessions: u32,
    },
    /// The next phase began
    PhaseStarted {
        /// The phase that began
        phase: Phase,
        /// Its length in seconds
        duration_seconds: u64,
    },
}

/// One entry of [`schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduledPhase {
    /// Phase
    pub phase: Phase,
    /// Length in minutes
    pub minutes: u32,
    /// Minutes from the start of the schedule to the start of this phase
    pub starts_after_minutes: u32,
}

/// Length of `phase` in minutes under `config`.
pub const fn phase_minutes(config: &PomodoroConfig, phase: Phase) -> u32 {
    match phase {
        Phase::Work => config.work_minutes,
        Phase::ShortBreak => config.short_break_minutes,
        Phase::LongBreak => config.long_break_minutes,
    }
}

/// Break that follows the `completed`-th work session.
const fn break_after(config: &PomodoroConfig, completed: u32) -> Phase {
    if config.sessions_before_long_break > 0 && completed % config.sessions_before_long_break == 0
    {
        Phase::LongBreak
    } else {
        Phase::ShortBreak
    }
}

/// Upcoming phases for `cycles` work sessions, each followed by its break.
///
/// ```
/// use utilkit::config::PomodoroConfig;
/// use utilkit::tools::pomodoro::{schedule, Phase};
///
/// let plan = schedule(&PomodoroConfig::default(), 4).unwrap();
/// assert_eq!(plan.len(), 8);
/// assert_eq!(plan[7].phase, Phase::LongBreak);
/// ```
pub fn schedule(config: &PomodoroConfig, cycles: u32) -> ToolResult<Vec<ScheduledPhase>> {
    check_cycles(cycles)?;
    config
        .validate()
        .map_err(|e| ToolError::invalid_option(e.to_string()))?;

    let mut phases = Vec::with_capacity(cycles as usize * 2);
    let mut elapsed: u32 = 0;
    for completed in 1..=cycles {
        for phase in [Phase::Work, break_after(config, completed)] {
            let minutes = phase_minutes(config, phase);
            phases.push(ScheduledPhase {
                phase,
                minutes,
                starts_after_minutes: elapsed,
            });
            elapsed = elapsed
                .checked_add(minutes)
                .ok_or_else(|| ToolError::invalid_option("schedule is too long"))?;
        }
    }
    Ok(phases)
}

/// Accepts 1..=[`MAX_POMODORO_CYCLES`] work sessions.
pub fn check_cycles(cycles: u32) -> ToolResult<()> {
    if (1..=MAX_POMODORO_CYCLES).contains(&cycles) {
        Ok(())
    } else {
        Err(ToolError::invalid_option(format!(
            "cycles must be between 1 and {MAX_POMODORO_CYCLES}, got {cycles}"
        )))
    }
}

/// Pomodoro timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pomodoro {
    #[serde(skip)]
    config: PomodoroConfig,
    phase: Phase,
    status: TimerStatus,
    remaining_seconds: u64,
    completed_sessions: u32,
}

impl Pomodoro {
    /// An idle timer at the start of a work session.
    pub fn new(config: PomodoroConfig) -> Self {
        Self {
            config,
            phase: Phase::Work,
            status: TimerStatus::Idle,
            remaining_seconds: Self::seconds(&config, Phase::Work),
            completed_sessions: 0,
        }
    }

    fn seconds(config: &PomodoroConfig, phase: Phase) -> u64 {
        u64::from(phase_minutes(config, phase)) * 60
    }

    /// Current phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Current status.
    pub const fn status(&self) -> TimerStatus {
        self.status
    }

    /// Seconds left in the current phase.
    pub const fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    /// Work sessions completed since the last reset.
    pub const fn completed_sessions(&self) -> u32 {
        self.completed_sessions
    }

    /// Remaining time as `MM:SS`.
    pub fn remaining_display(&self) -> String {
        format!("{:02}:{:02}", self.remaining_seconds / 60, self.remaining_seconds % 60)
    }

    /// Idle → Running.
    pub fn start(&mut self) -> ToolResult<()> {
        match self.status {
            TimerStatus::Idle => {
                self.status = TimerStatus::Running;
                Ok(())
            }
            TimerStatus::Running => Err(ToolError::invalid_option("timer is already running")),
            TimerStatus::Paused => Err(ToolError::invalid_option("timer is paused, resume it")),
        }
    }

    /// Running → Paused.
    pub fn pause(&mut self) -> ToolResult<()> {
        if self.status != TimerStatus::Running {
            return Err(ToolError::invalid_option("timer is not running"));
        }
        self.status = TimerStatus::Paused;
        Ok(())
    }

    /// Paused → Running.
    pub fn resume(&mut self) -> ToolResult<()> {
        if self.status != TimerStatus::Paused {
            return Err(ToolError::invalid_option("timer is not paused"));
        }
        self.status = TimerStatus::Running;
        Ok(())
    }

    /// Back to an idle work session with no completed sessions.
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    /// Ends the current phase now. A skipped work session still counts
    /// towards the long break. The status is unchanged.
    pub fn skip(&mut self) -> Vec<PomodoroEvent> {
        self.advance()
    }

    fn advance(&mut self) -> Vec<PomodoroEvent> {
        let finished = self.phase;
        if finished == Phase::Work {
            self.completed_sessions += 1;
        }
        let next = match finished {
            Phase::Work => break_after(&self.config, self.completed_sessions),
            Phase::ShortBreak | Phase::LongBreak => Phase::Work,
        };
        self.phase = next;
        self.remaining_seconds = Self::seconds(&self.config, next);

        vec![
            PomodoroEvent::PhaseCompleted {
                phase: finished,
                completed_sessions: self.completed_sessions,
            },
            PomodoroEvent::PhaseStarted {
                phase: next,
                duration_seconds: self.remaining_seconds,
            },
        ]
    }

    /// Lets `seconds` pass. Does nothing unless running; time left over
    /// after a phase ends carries into the next phase.
    pub fn tick(&mut self, seconds: u64) -> Vec<PomodoroEvent> {
        let mut events = Vec::new();
        if self.status != TimerStatus::Running {
            return events;
        }

        let mut left = seconds;
        while left > 0 {
            if left < self.remaining_seconds {
                self.remaining_seconds -= left;
                break;
            }
            left -= self.remaining_seconds;
            events.extend(self.advance());
            if self.remaining_seconds == 0 {
                break;
            }
        }
        events
    }
}
