//! Converter commands.

use chrono::Utc;
use clap::{Args, Subcommand};
use serde_json::json;

use crate::cli::common::{print_json, CliError, CliResult, OutputArgs};
use crate::services::ContentKind;
use crate::tools::convert::{
    temperature::{self, TemperatureUnit},
    timestamp::{self, TimestampInfo, TimestampUnit},
    units::{self, Quantity},
};

/// Temperature, unit and timestamp conversion
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Converter subcommand
    #[command(subcommand)]
    pub command: ConvertCommand,
}

/// Converter subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ConvertCommand {
    /// Convert a temperature to every scale
    Temperature(TemperatureArgs),
    /// Convert between measurement units
    Unit(UnitArgs),
    /// List the units of a quantity
    Units(UnitsArgs),
    /// Convert between Unix timestamps and dates
    Timestamp(TimestampArgs),
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConvertCommand::Temperature(args) => args.execute(),
            ConvertCommand::Unit(args) => args.execute(),
            ConvertCommand::Units(args) => args.execute(),
            ConvertCommand::Timestamp(args) => args.execute(),
        }
    }
}

/// Temperature conversion
#[derive(Debug, Clone, Args)]
pub struct TemperatureArgs {
    /// Temperature value
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    value: f64,

    /// Scale of VALUE: celsius, fahrenheit, kelvin, rankine
    #[arg(long, default_value = "celsius")]
    from: TemperatureUnit,

    #[command(flatten)]
    output: OutputArgs,
}

impl TemperatureArgs {
    fn execute(&self) -> CliResult<()> {
        let temps = temperature::convert(self.value, self.from)?;
        let text = TemperatureUnit::ALL
            .iter()
            .map(|&unit| format!("{:<11} {} {}", unit, temps.get(unit), unit.symbol()))
            .collect::<Vec<_>>()
            .join("\n");
        self.output.emit(&text, &temps, ContentKind::PlainText)
    }
}

/// Unit conversion
#[derive(Debug, Clone, Args)]
pub struct UnitArgs {
    /// Value to convert
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    value: f64,

    /// length, mass, volume, area, speed, time, data
    #[arg(long)]
    quantity: Quantity,

    /// Source unit symbol or name
    #[arg(long)]
    from: String,

    /// Target unit symbol or name
    #[arg(long)]
    to: String,

    #[command(flatten)]
    output: OutputArgs,
}

impl UnitArgs {
    fn execute(&self) -> CliResult<()> {
        let result = units::convert(self.value, self.quantity, &self.from, &self.to)?;
        let from = self.quantity.unit(&self.from)?;
        let to = self.quantity.unit(&self.to)?;
        let text = format!("{} {} = {} {}", self.value, from.symbol, result, to.symbol);
        self.output.emit(
            &text,
            &json!({
                "quantity": self.quantity,
                "value": self.value,
                "from": from.symbol,
                "to": to.symbol,
                "result": result,
            }),
            ContentKind::PlainText,
        )
    }
}

/// Unit listing
#[derive(Debug, Clone, Args)]
pub struct UnitsArgs {
    /// Quantity to list; every quantity when omitted
    #[arg(value_name = "QUANTITY")]
    quantity: Option<Quantity>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl UnitsArgs {
    fn execute(&self) -> CliResult<()> {
        let quantities: Vec<Quantity> = match self.quantity {
            Some(q) => vec![q],
            None => Quantity::ALL.to_vec(),
        };

        if self.json {
            let body: Vec<_> = quantities
                .iter()
                .map(|q| json!({ "quantity": q, "units": q.units() }))
                .collect();
            return print_json(&body);
        }

        for q in quantities {
            println!("{q}:");
            for unit in q.units() {
                println!("  {:<8} {}", unit.symbol, unit.name);
            }
        }
        Ok(())
    }
}

/// Timestamp conversion
#[derive(Debug, Clone, Args)]
pub struct TimestampArgs {
    /// Unix timestamp, or a date with --to-unix; now when omitted
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    value: Option<String>,

    /// Read VALUE as a date (RFC 3339 or YYYY-MM-DD[ HH:MM[:SS]])
    #[arg(long)]
    to_unix: bool,

    /// Unit of a numeric VALUE: auto, seconds, milliseconds
    #[arg(long, default_value = "auto")]
    unit: TimestampUnit,

    #[command(flatten)]
    output: OutputArgs,
}

impl TimestampArgs {
    fn execute(&self) -> CliResult<()> {
        let now = Utc::now();
        let instant = match (&self.value, self.to_unix) {
            (None, _) => now,
            (Some(value), true) => timestamp::to_unix(value)?,
            (Some(value), false) => {
                let number: i64 = value.trim().parse().map_err(|_| {
                    CliError::validation(format!(
                        "'{value}' is not a Unix timestamp (use --to-unix for dates)"
                    ))
                })?;
                timestamp::from_unix(number, self.unit)?
            }
        };

        let info = TimestampInfo::new(instant, now);
        let text = format!(
            "Unix seconds:      {}\nUnix milliseconds: {}\nRFC 3339:          {}\nRFC 2822:          {}\nDate:              {} ({})\nRelative:          {}",
            info.unix_seconds,
            info.unix_milliseconds,
            info.rfc3339,
            info.rfc2822,
            info.iso_date,
            info.weekday,
            info.relative
        );
        self.output.emit(&text, &info, ContentKind::PlainText)
    }
}
