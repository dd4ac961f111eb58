//! Pomodoro timer commands.

use clap::{Args, Subcommand};
use std::io::Write;
use std::time::Duration;
use tracing::debug;

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::config::PomodoroConfig;
use crate::tools::pomodoro::{self, Phase, Pomodoro, PomodoroEvent};

/// Pomodoro timer
#[derive(Debug, Clone, Args)]
pub struct PomodoroArgs {
    /// Pomodoro subcommand
    #[command(subcommand)]
    pub command: PomodoroCommand,
}

/// Pomodoro subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum PomodoroCommand {
    /// Print the upcoming phases
    Plan(PlanArgs),
    /// Run the timer in the terminal
    Run(RunArgs),
}

impl PomodoroArgs {
    /// Execute the pomodoro command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            PomodoroCommand::Plan(args) => args.execute(),
            PomodoroCommand::Run(args) => args.execute(),
        }
    }
}

/// Duration overrides on top of the configured defaults.
#[derive(Debug, Clone, Args)]
pub struct DurationArgs {
    /// Work session length in minutes
    #[arg(long, value_name = "MIN")]
    work: Option<u32>,

    /// Short break length in minutes
    #[arg(long, value_name = "MIN")]
    short_break: Option<u32>,

    /// Long break length in minutes
    #[arg(long, value_name = "MIN")]
    long_break: Option<u32>,

    /// Work sessions before a long break
    #[arg(long, value_name = "N")]
    sessions: Option<u32>,

    /// Number of work sessions
    #[arg(long, default_value_t = 4)]
    cycles: u32,
}

impl DurationArgs {
    fn resolve(&self) -> CliResult<PomodoroConfig> {
        let mut config = load_config()?.tools.pomodoro;
        if let Some(work) = self.work {
            config.work_minutes = work;
        }
        if let Some(short) = self.short_break {
            config.short_break_minutes = short;
        }
        if let Some(long) = self.long_break {
            config.long_break_minutes = long;
        }
        if let Some(sessions) = self.sessions {
            config.sessions_before_long_break = sessions;
        }
        config
            .validate()
            .map_err(|e| CliError::validation(e.to_string()))?;
        pomodoro::check_cycles(self.cycles)?;
        Ok(config)
    }
}

fn label(phase: Phase) -> &'static str {
    match phase {
        Phase::Work => "Work",
        Phase::ShortBreak => "Short break",
        Phase::LongBreak => "Long break",
    }
}

/// Schedule preview
#[derive(Debug, Clone, Args)]
pub struct PlanArgs {
    #[command(flatten)]
    durations: DurationArgs,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl PlanArgs {
    fn execute(&self) -> CliResult<()> {
        let config = self.durations.resolve()?;
        let plan = pomodoro::schedule(&config, self.durations.cycles)?;

        if self.json {
            return print_json(&plan);
        }
        for entry in &plan {
            let start = entry.starts_after_minutes;
            println!(
                "+{:>2}:{:02}  {:<12} {} min",
                start / 60,
                start % 60,
                label(entry.phase),
                entry.minutes
            );
        }
        let total: u32 = plan.iter().map(|p| p.minutes).sum();
        println!();
        println!("Total: {} h {:02} min", total / 60, total % 60);
        Ok(())
    }
}

/// Live countdown
#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    #[command(flatten)]
    durations: DurationArgs,
}

impl RunArgs {
    fn execute(&self) -> CliResult<()> {
        let config = self.durations.resolve()?;
        let cycles = self.durations.cycles;

        let mut timer = Pomodoro::new(config);
        timer.start()?;
        eprintln!("{} started ({} min)", label(timer.phase()), config.work_minutes);

        let mut stderr = std::io::stderr();
        while timer.completed_sessions() < cycles {
            // progress line is best effort
            let _ = write!(stderr, "\r{:<12} {}", label(timer.phase()), timer.remaining_display());
            let _ = stderr.flush();

            std::thread::sleep(Duration::from_secs(1));
            for event in timer.tick(1) {
                debug!(?event, "pomodoro event");
                match event {
                    PomodoroEvent::PhaseCompleted {
                        phase,
                        completed_sessions,
                    } => {
                        eprintln!();
                        if phase == Phase::Work {
                            println!("Session {completed_sessions} of {cycles} done.");
                        } else {
                            println!("{} over.", label(phase));
                        }
                    }
                    PomodoroEvent::PhaseStarted {
                        phase,
                        duration_seconds,
                    } if timer.completed_sessions() < cycles => {
                        eprintln!("{} started ({} min)", label(phase), duration_seconds / 60);
                    }
                    PomodoroEvent::PhaseStarted { .. } => {}
                }
            }
        }

        println!("All {cycles} sessions complete.");
        Ok(())
    }
}
