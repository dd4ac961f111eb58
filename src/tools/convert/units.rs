//! Measurement unit converter.
//!
//! Each quantity is a table of units with a fixed factor to the quantity's
//! base unit (meter, kilogram, liter, square meter, meter per second,
//! second, byte).

use serde::Serialize;

use crate::tools::{ToolError, ToolResult};

named_options! {
    /// Physical quantity.
    pub enum Quantity {
        /// Base unit: meter
        Length => "length",
        /// Base unit: kilogram
        Mass => "mass",
        /// Base unit: liter
        Volume => "volume",
        /// Base unit: square meter
        Area => "area",
        /// Base unit: meter per second
        Speed => "speed",
        /// Base unit: second
        Time => "time",
        /// Base unit: byte
        Data => "data",
    }
}

/// A unit and its size in the quantity's base unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Unit {
    /// Symbol accepted on input, e.g. `km`
    pub symbol: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// Size in base units
    pub factor: f64,
}

const fn unit(symbol: &'static str, name: &'static str, factor: f64) -> Unit {
    Unit { symbol, name, factor }
}

const LENGTH: &[Unit] = &[
    unit("mm", "millimeter", 0.001),
    unit("cm", "centimeter", 0.01),
    unit("m", "meter", 1.0),
    unit("km", "kilometer", 1000.0),
    unit("in", "inch", 0.0254),
    unit("ft", "foot", 0.3048),
    unit("yd", "yard", 0.9144),
    unit("mi", "mile", 1609.344),
    unit("nmi", "nautical mile", 1852.0),
];

const MASS: &[Unit] = &[
    unit("mg", "milligram", 0.000_001),
    unit("g", "gram", 0.001),
    unit("kg", "kilogram", 1.0),
    unit("t", "metric ton", 1000.0),
    unit("oz", "ounce", 0.028_349_523_125),
    unit("lb", "pound", 0.453_592_37),
    unit("st", "stone", 6.350_293_18),
];

const VOLUME: &[Unit] = &[
    unit("ml", "milliliter", 0.001),
    unit("l", "liter", 1.0),
    unit("m3", "cubic meter", 1000.0),
    unit("tsp", "teaspoon (US)", 0.004_928_921_593_75),
    unit("tbsp", "tablespoon (US)", 0.014_786_764_781_25),
    unit("floz", "fluid ounce (US)", 0.029_573_529_562_5),
    unit("cup", "cup (US)", 0.236_588_236_5),
    unit("pt", "pint (US)", 0.473_176_473),
    unit("qt", "quart (US)", 0.946_352_946),
    unit("gal", "gallon (US)", 3.785_411_784),
];

const AREA: &[Unit] = &[
    unit("mm2", "square millimeter", 0.000_001),
    unit("cm2", "square centimeter", 0.0001),
    unit("m2", "square meter", 1.0),
    unit("ha", "hectare", 10_000.0),
    unit("km2", "square kilometer", 1_000_000.0),
    unit("in2", "square inch", 0.000_645_16),
    unit("ft2", "square foot", 0.092_903_04),
    unit("ac", "acre", 4_046.856_422_4),
    unit("mi2", "square mile", 2_589_988.110_336),
];

const SPEED: &[Unit] = &[
    unit("m/s", "meter per second", 1.0),
    unit("km/h", "kilometer per hour", 1000.0 / 3600.0),
    unit("mph", "mile per hour", 0.447_04),
    unit("kn", "knot", 1852.0 / 3600.0),
    unit("ft/s", "foot per second", 0.3048),
];

const TIME: &[Unit] = &[
    unit("ms", "millisecond", 0.001),
    unit("s", "second", 1.0),
    unit("min", "minute", 60.0),
    unit("h", "hour", 3600.0),
    unit("d", "day", 86_400.0),
    unit("wk", "week", 604_800.0),
    unit("yr", "year (365 days)", 31_536_000.0),
];

const DATA: &[Unit] = &[
    unit("bit", "bit", 0.125),
    unit("b", "byte", 1.0),
    unit("kb", "kilobyte", 1e3),
    unit("mb", "megabyte", 1e6),
    unit("gb", "gigabyte", 1e9),
    unit("tb", "terabyte", 1e12),
    unit("kib", "kibibyte", 1024.0),
    unit("mib", "mebibyte", 1_048_576.0),
    unit("gib", "gibibyte", 1_073_741_824.0),
    unit("tib", "tebibyte", 1_099_511_627_776.0),
];

impl Quantity {
    /// Units available for this quantity.
    pub const fn units(self) -> &'static [Unit] {
        match self {
            Self::Length => LENGTH,
            Self::Mass => MASS,
            Self::Volume => VOLUME,
            Self::Area => AREA,
            Self::Speed => SPEED,
            Self::Time => TIME,
            Self::Data => DATA,
        }
    }

    /// Looks up a unit by symbol or name, ignoring case.
    pub fn unit(self, name: &str) -> ToolResult<Unit> {
        let wanted = name.trim().to_lowercase();
        self.units()
            .iter()
            .find(|u| u.symbol == wanted || u.name == wanted)
            .copied()
            .ok_or_else(|| {
                let symbols: Vec<&str> = self.units().iter().map(|u| u.symbol).collect();
                ToolError::invalid_option(format!(
                    "unknown {self} unit '{name}', expected one of: {}",
                    symbols.join(", ")
                ))
            })
    }
}

/// Converts `value` between two units of `quantity`.
///
/// ```
/// use utilkit::tools::convert::units::{convert, Quantity};
///
/// let feet = convert(1.0, Quantity::Length, "m", "ft").unwrap();
/// assert!((feet - 3.280_84).abs() < 1e-5);
/// ```
pub fn convert(value: f64, quantity: Quantity, from: &str, to: &str) -> ToolResult<f64> {
    if !value.is_finite() {
        return Err(ToolError::malformed(format!("{value} is not a number")));
    }
    let from = quantity.unit(from)?;
    let to = quantity.unit(to)?;
    Ok(value * from.factor / to.factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_known_conversions() {
        assert!(close(convert(1.0, Quantity::Length, "mi", "km").unwrap(), 1.609_344));
        assert!(close(convert(1.0, Quantity::Mass, "kg", "lb").unwrap(), 2.204_622_621_8));
        assert!(close(convert(1.0, Quantity::Volume, "gal", "l").unwrap(), 3.785_411_784));
        assert!(close(convert(1.0, Quantity::Area, "ha", "m2").unwrap(), 10_000.0));
        assert!(close(convert(100.0, Quantity::Speed, "km/h", "m/s").unwrap(), 27.777_777_777_8));
        assert!(close(convert(2.0, Quantity::Time, "h", "min").unwrap(), 120.0));
        assert!(close(convert(1.0, Quantity::Data, "mib", "kb").unwrap(), 1048.576));
    }

    #[test]
    fn test_names_and_case() {
        assert!(close(convert(12.0, Quantity::Length, "Inch", "FT").unwrap(), 1.0));
    }

    #[test]
    fn test_symbols_are_unique_per_quantity() {
        for quantity in Quantity::ALL {
            let mut symbols: Vec<&str> = quantity.units().iter().map(|u| u.symbol).collect();
            symbols.sort_unstable();
            symbols.dedup();
            assert_eq!(symbols.len(), quantity.units().len(), "{quantity}");
        }
    }

    #[test]
    fn test_unknown_unit() {
        assert!(matches!(
            convert(1.0, Quantity::Mass, "kg", "furlong"),
            Err(ToolError::InvalidOption(_))
        ));
    }
}
