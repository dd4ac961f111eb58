//! Pure transforms behind every catalog tool.
//!
//! Each submodule exposes synchronous, side-effect free functions from
//! `(input, options)` to an output value. Failures are reported as
//! [`ToolError`] and never leave partial results behind.

/// Declares a fieldless option enum with lowercase kebab names.
///
/// Generates `ALL`, `as_str`, `Display`, `FromStr` (case-insensitive) and a
/// string `Serialize`, so the same type works for clap arguments and JSON.
/// Outer and variant attributes pass through, so `#[derive(Default)]` with a
/// `#[default]` variant works as on a plain enum.
macro_rules! named_options {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Lowercase name used on the command line and in JSON.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == wanted)
                    .ok_or_else(|| {
                        let names: Vec<&str> = Self::ALL.iter().map(|v| v.as_str()).collect();
                        format!("unknown value '{s}', expected one of: {}", names.join(", "))
                    })
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

pub mod calc;
pub mod color;
pub mod convert;
pub mod encoding;
pub mod generate;
pub mod pomodoro;
pub mod text;

use thiserror::Error;

/// Errors a transform can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// Required input was empty (after trimming whitespace)
    #[error("{field} is empty")]
    EmptyInput {
        /// Human-readable name of the missing input
        field: &'static str,
    },

    /// Input could not be parsed for the chosen format
    #[error("Malformed input: {0}")]
    Malformed(String),

    /// Options cannot produce any output
    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

impl ToolError {
    /// Shorthand for [`ToolError::Malformed`].
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }

    /// Shorthand for [`ToolError::InvalidOption`].
    pub fn invalid_option(message: impl Into<String>) -> Self {
        Self::InvalidOption(message.into())
    }
}

/// Result alias used by all transforms.
pub type ToolResult<T> = std::result::Result<T, ToolError>;

/// Fails with [`ToolError::EmptyInput`] when `value` is blank.
pub fn require_input<'a>(value: &'a str, field: &'static str) -> ToolResult<&'a str> {
    if value.trim().is_empty() {
        Err(ToolError::EmptyInput { field })
    } else {
        Ok(value)
    }
}

/// Rounds to a fixed number of decimal places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
