//! Body mass index calculator.

use serde::Serialize;

use super::require_positive;
use crate::tools::{round_to, ToolResult};

named_options! {
    /// Measurement system of the inputs.
    pub enum UnitSystem {
        /// Kilograms and centimeters
        Metric => "metric",
        /// Pounds and inches
        Imperial => "imperial",
    }
}

named_options! {
    /// WHO adult weight category.
    pub enum BmiCategory {
        /// BMI below 18.5
        Underweight => "underweight",
        /// 18.5 up to 25
        Normal => "normal",
        /// 25 up to 30
        Overweight => "overweight",
        /// 30 and above
        Obese => "obese",
    }
}

impl BmiCategory {
    /// Category for a BMI value.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }
}

/// BMI and its category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiResult {
    /// Body mass index, one decimal
    pub bmi: f64,
    /// Category of the rounded value
    pub category: BmiCategory,
}

/// Computes BMI from weight and height in the given unit system.
///
/// ```
/// use utilkit::tools::calc::bmi::{bmi, BmiCategory, UnitSystem};
///
/// let result = bmi(70.0, 175.0, UnitSystem::Metric).unwrap();
/// assert_eq!(result.bmi, 22.9);
/// assert_eq!(result.category, BmiCategory::Normal);
/// ```
pub fn bmi(weight: f64, height: f64, system: UnitSystem) -> ToolResult<BmiResult> {
    let weight = require_positive(weight, "Weight")?;
    let height = require_positive(height, "Height")?;

    let raw = match system {
        UnitSystem::Metric => weight / (height / 100.0).powi(2),
        UnitSystem::Imperial => 703.0 * weight / height.powi(2),
    };
    let bmi = round_to(raw, 1);
    Ok(BmiResult {
        bmi,
        category: BmiCategory::from_bmi(bmi),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolError;

    #[test]
    fn test_imperial_matches_metric() {
        let metric = bmi(80.0, 180.0, UnitSystem::Metric).unwrap();
        let imperial = bmi(176.37, 70.87, UnitSystem::Imperial).unwrap();
        assert!((metric.bmi - imperial.bmi).abs() <= 0.1);
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_non_positive_inputs() {
        assert!(matches!(
            bmi(0.0, 170.0, UnitSystem::Metric),
            Err(ToolError::Malformed(_))
        ));
        assert!(bmi(70.0, -1.0, UnitSystem::Metric).is_err());
    }
}
