//! Calculator commands.

use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use serde_json::json;

use crate::cli::common::{CliError, CliResult, OutputArgs};
use crate::services::ContentKind;
use crate::tools::calc::{
    age,
    bmi::{self, UnitSystem},
    loan,
    percentage::{self, PercentMode},
    tip,
};

/// BMI, percentage, age, tip and loan calculators
#[derive(Debug, Clone, Args)]
pub struct CalcArgs {
    /// Calculator subcommand
    #[command(subcommand)]
    pub command: CalcCommand,
}

/// Calculator subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum CalcCommand {
    /// Body mass index
    Bmi(BmiArgs),
    /// Percent of, ratio or change
    Percent(PercentArgs),
    /// Age from a birth date
    Age(AgeArgs),
    /// Tip and bill split
    Tip(TipArgs),
    /// Monthly loan payment
    Loan(LoanArgs),
}

impl CalcArgs {
    /// Execute the calc command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            CalcCommand::Bmi(args) => args.execute(),
            CalcCommand::Percent(args) => args.execute(),
            CalcCommand::Age(args) => args.execute(),
            CalcCommand::Tip(args) => args.execute(),
            CalcCommand::Loan(args) => args.execute(),
        }
    }
}

fn parse_date(input: &str, what: &str) -> CliResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        CliError::validation(format!("{what} '{input}' is not a YYYY-MM-DD date"))
    })
}

/// Body mass index
#[derive(Debug, Clone, Args)]
pub struct BmiArgs {
    /// Weight in kg (metric) or lb (imperial)
    #[arg(long, allow_negative_numbers = true)]
    weight: f64,

    /// Height in cm (metric) or in (imperial)
    #[arg(long, allow_negative_numbers = true)]
    height: f64,

    /// metric or imperial
    #[arg(long, default_value = "metric")]
    system: UnitSystem,

    #[command(flatten)]
    output: OutputArgs,
}

impl BmiArgs {
    fn execute(&self) -> CliResult<()> {
        let result = bmi::bmi(self.weight, self.height, self.system)?;
        let text = format!("BMI: {:.1} ({})", result.bmi, result.category);
        self.output.emit(&text, &result, ContentKind::PlainText)
    }
}

/// Percentages
#[derive(Debug, Clone, Args)]
pub struct PercentArgs {
    /// of: X% of Y; ratio: X is what % of Y; change: % change from X to Y
    #[arg(long, default_value = "of")]
    mode: PercentMode,

    /// First value
    #[arg(value_name = "X", allow_negative_numbers = true)]
    x: f64,

    /// Second value
    #[arg(value_name = "Y", allow_negative_numbers = true)]
    y: f64,

    #[command(flatten)]
    output: OutputArgs,
}

impl PercentArgs {
    fn execute(&self) -> CliResult<()> {
        let result = percentage::calculate(self.mode, self.x, self.y)?;
        let text = match self.mode {
            PercentMode::Of => format!("{}% of {} = {}", self.x, self.y, result),
            PercentMode::Ratio => format!("{} is {}% of {}", self.x, result, self.y),
            PercentMode::Change => format!("{} -> {}: {:+}%", self.x, self.y, result),
        };
        self.output.emit(
            &text,
            &json!({ "mode": self.mode, "x": self.x, "y": self.y, "result": result }),
            ContentKind::PlainText,
        )
    }
}

/// Age
#[derive(Debug, Clone, Args)]
pub struct AgeArgs {
    /// Birth date, YYYY-MM-DD
    #[arg(value_name = "BIRTH_DATE")]
    birth: String,

    /// Reference date, YYYY-MM-DD (today when omitted)
    #[arg(long, value_name = "DATE")]
    on: Option<String>,

    #[command(flatten)]
    output: OutputArgs,
}

impl AgeArgs {
    fn execute(&self) -> CliResult<()> {
        let birth = parse_date(&self.birth, "Birth date")?;
        let reference = match &self.on {
            Some(date) => parse_date(date, "Reference date")?,
            None => Local::now().date_naive(),
        };
        let age = age::age(birth, reference)?;
        let text = format!(
            "Age: {} years, {} months, {} days\nDays lived: {}\nNext birthday: {} (in {} days)",
            age.years,
            age.months,
            age.days,
            age.total_days,
            age.next_birthday,
            age.days_until_birthday
        );
        self.output.emit(&text, &age, ContentKind::PlainText)
    }
}

/// Tip split
#[derive(Debug, Clone, Args)]
pub struct TipArgs {
    /// Bill amount
    #[arg(value_name = "BILL", allow_negative_numbers = true)]
    bill: f64,

    /// Tip percent
    #[arg(long, default_value_t = 15.0, allow_negative_numbers = true)]
    percent: f64,

    /// Number of people sharing the bill
    #[arg(long, default_value_t = 1)]
    people: u32,

    #[command(flatten)]
    output: OutputArgs,
}

impl TipArgs {
    fn execute(&self) -> CliResult<()> {
        let split = tip::tip(self.bill, self.percent, self.people)?;
        let mut text = format!("Tip:   {:.2}\nTotal: {:.2}", split.tip, split.total);
        if self.people > 1 {
            text.push_str(&format!(
                "\nPer person: {:.2} ({:.2} tip)",
                split.total_per_person, split.tip_per_person
            ));
        }
        self.output.emit(&text, &split, ContentKind::PlainText)
    }
}

/// Loan payment
#[derive(Debug, Clone, Args)]
pub struct LoanArgs {
    /// Amount borrowed
    #[arg(value_name = "PRINCIPAL", allow_negative_numbers = true)]
    principal: f64,

    /// Annual interest rate in percent
    #[arg(long, allow_negative_numbers = true)]
    rate: f64,

    /// Term in months
    #[arg(long)]
    months: u32,

    #[command(flatten)]
    output: OutputArgs,
}

impl LoanArgs {
    fn execute(&self) -> CliResult<()> {
        let summary = loan::loan(self.principal, self.rate, self.months)?;
        let text = format!(
            "Monthly payment: {:.2}\nTotal paid:      {:.2}\nTotal interest:  {:.2}",
            summary.monthly_payment, summary.total_paid, summary.total_interest
        );
        self.output.emit(&text, &summary, ContentKind::PlainText)
    }
}
