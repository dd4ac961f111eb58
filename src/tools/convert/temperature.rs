//! Temperature converter. Every conversion goes through kelvin.

use serde::Serialize;

use crate::tools::{round_to, ToolError, ToolResult};

named_options! {
    /// Temperature scale.
    pub enum TemperatureUnit {
        /// °C
        Celsius => "celsius",
        /// °F
        Fahrenheit => "fahrenheit",
        /// K
        Kelvin => "kelvin",
        /// °R
        Rankine => "rankine",
    }
}

impl TemperatureUnit {
    /// Display symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
            Self::Kelvin => "K",
            Self::Rankine => "°R",
        }
    }
}

/// Converts `value` in `unit` to kelvin. Fails below absolute zero.
pub fn to_kelvin(value: f64, unit: TemperatureUnit) -> ToolResult<f64> {
    if !value.is_finite() {
        return Err(ToolError::malformed(format!("{value} is not a temperature")));
    }
    let kelvin = match unit {
        TemperatureUnit::Celsius => value + 273.15,
        TemperatureUnit::Fahrenheit => (value + 459.67) * 5.0 / 9.0,
        TemperatureUnit::Kelvin => value,
        TemperatureUnit::Rankine => value * 5.0 / 9.0,
    };
    // tolerate rounding noise right at absolute zero
    if kelvin < -1e-9 {
        return Err(ToolError::malformed(format!(
            "{value}{} is below absolute zero",
            unit.symbol()
        )));
    }
    Ok(kelvin.max(0.0))
}

/// Converts `kelvin` to `unit`.
pub fn from_kelvin(kelvin: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => kelvin - 273.15,
        TemperatureUnit::Fahrenheit => kelvin * 9.0 / 5.0 - 459.67,
        TemperatureUnit::Kelvin => kelvin,
        TemperatureUnit::Rankine => kelvin * 9.0 / 5.0,
    }
}

/// A temperature expressed on every scale (two decimals).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Temperatures {
    /// °C
    pub celsius: f64,
    /// °F
    pub fahrenheit: f64,
    /// K
    pub kelvin: f64,
    /// °R
    pub rankine: f64,
}

impl Temperatures {
    /// Value on one scale.
    pub const fn get(&self, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Celsius => self.celsius,
            TemperatureUnit::Fahrenheit => self.fahrenheit,
            TemperatureUnit::Kelvin => self.kelvin,
            TemperatureUnit::Rankine => self.rankine,
        }
    }
}

/// Converts `value` in `from` to every scale.
///
/// ```
/// use utilkit::tools::convert::temperature::{convert, TemperatureUnit};
///
/// let t = convert(100.0, TemperatureUnit::Celsius).unwrap();
/// assert_eq!(t.fahrenheit, 212.0);
/// assert_eq!(t.kelvin, 373.15);
/// ```
pub fn convert(value: f64, from: TemperatureUnit) -> ToolResult<Temperatures> {
    let kelvin = to_kelvin(value, from)?;
    let on = |unit| round_to(from_kelvin(kelvin, unit), 2);
    Ok(Temperatures {
        celsius: on(TemperatureUnit::Celsius),
        fahrenheit: on(TemperatureUnit::Fahrenheit),
        kelvin: on(TemperatureUnit::Kelvin),
        rankine: on(TemperatureUnit::Rankine),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_points() {
        let freezing = convert(32.0, TemperatureUnit::Fahrenheit).unwrap();
        assert!(freezing.celsius.abs() < 1e-9);
        assert!((freezing.kelvin - 273.15).abs() < 1e-9);
        assert!((freezing.rankine - 491.67).abs() < 1e-9);

        let minus_forty = convert(-40.0, TemperatureUnit::Celsius).unwrap();
        assert!((minus_forty.fahrenheit + 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_every_unit() {
        for &unit in TemperatureUnit::ALL {
            for value in [-10.0, 0.0, 36.6, 451.0, 1000.0] {
                let Ok(kelvin) = to_kelvin(value, unit) else {
                    continue;
                };
                assert!((from_kelvin(kelvin, unit) - value).abs() < 1e-9, "{unit} {value}");
            }
        }
    }

    #[test]
    fn test_absolute_zero_is_valid_on_every_scale() {
        let zero = Temperatures {
            celsius: -273.15,
            fahrenheit: -459.67,
            kelvin: 0.0,
            rankine: 0.0,
        };
        for &unit in TemperatureUnit::ALL {
            let kelvin = to_kelvin(zero.get(unit), unit).unwrap();
            assert!(kelvin.abs() < 1e-9, "{unit}");
            assert!((from_kelvin(kelvin, unit) - zero.get(unit)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_below_absolute_zero() {
        assert!(matches!(
            to_kelvin(-274.0, TemperatureUnit::Celsius),
            Err(ToolError::Malformed(_))
        ));
        assert!(to_kelvin(-0.01, TemperatureUnit::Kelvin).is_err());
        assert!(to_kelvin(f64::NAN, TemperatureUnit::Kelvin).is_err());
    }
}
