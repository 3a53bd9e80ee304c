//! Metal form validation.
//!
//! Mirrors the checks the admin dashboard runs before saving a metal:
//! - A name and a color are required
//! - A color starting with `#` must be a 3- or 6-digit hex code
//! - At least one purity level is required
//! - Every level needs a positive karat and a positive price multiplier
//! - Karats must be unique within a metal

use super::{Karat, Metal};

/// Validates a metal, collecting every failed rule.
///
/// # Examples
/// ```
/// use bijou::metal::{Metal, PurityLevel};
/// use bijou::metal::validation::validate_metal;
///
/// let gold = Metal::new("Yellow Gold", "#FFD700").with_level(PurityLevel::new(14.0, 1.15));
/// assert!(validate_metal(&gold).is_ok());
///
/// let blank = Metal::new("", "");
/// assert_eq!(validate_metal(&blank).unwrap_err().len(), 3);
/// ```
pub fn validate_metal(metal: &Metal) -> Result<(), Vec<MetalValidationError>> {
    let mut errors = Vec::new();

    if metal.name.trim().is_empty() {
        errors.push(MetalValidationError::MissingName);
    }

    let color = metal.color.trim();
    if color.is_empty() {
        errors.push(MetalValidationError::MissingColor);
    } else if color.starts_with('#') && !is_hex_color(color) {
        errors.push(MetalValidationError::InvalidHexColor(color.to_string()));
    }

    if metal.purity_levels.is_empty() {
        errors.push(MetalValidationError::NoPurityLevels);
    }

    let mut seen: Vec<Karat> = Vec::new();
    for (index, level) in metal.purity_levels.iter().enumerate() {
        match level.karat {
            None => errors.push(MetalValidationError::MissingKarat(index)),
            Some(karat) if karat.value() <= 0.0 => {
                errors.push(MetalValidationError::NonPositiveKarat(index, karat))
            }
            Some(karat) => {
                if seen.contains(&karat) {
                    errors.push(MetalValidationError::DuplicateKarat(karat));
                } else {
                    seen.push(karat);
                }
            }
        }

        match level.price_multiplier {
            Some(m) if m.is_finite() && m > 0.0 => {}
            _ => errors.push(MetalValidationError::InvalidMultiplier(index)),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_hex_color(color: &str) -> bool {
    let digits = &color[1..];
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Error type for metal validation failures. Indexes are zero-based level positions.
#[derive(Debug, Clone, PartialEq)]
pub enum MetalValidationError {
    /// Metal name is empty
    MissingName,
    /// Metal color is empty
    MissingColor,
    /// Color looks like a hex code but is not one
    InvalidHexColor(String),
    /// Metal has no purity levels
    NoPurityLevels,
    /// Level has no readable karat
    MissingKarat(usize),
    /// Level karat is zero or negative
    NonPositiveKarat(usize, Karat),
    /// The same karat appears on more than one level
    DuplicateKarat(Karat),
    /// Level multiplier is missing, unreadable or not positive
    InvalidMultiplier(usize),
}

impl std::fmt::Display for MetalValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetalValidationError::MissingName => write!(f, "metal name is required"),
            MetalValidationError::MissingColor => write!(f, "metal color is required"),
            MetalValidationError::InvalidHexColor(color) => {
                write!(f, "color '{}' is not a valid hex code", color)
            }
            MetalValidationError::NoPurityLevels => {
                write!(f, "at least one purity level is required")
            }
            MetalValidationError::MissingKarat(i) => {
                write!(f, "purity level {} has no karat", i + 1)
            }
            MetalValidationError::NonPositiveKarat(i, karat) => {
                write!(f, "purity level {} has non-positive karat {}", i + 1, karat)
            }
            MetalValidationError::DuplicateKarat(karat) => {
                write!(f, "karat {} is listed more than once", karat)
            }
            MetalValidationError::InvalidMultiplier(i) => {
                write!(f, "purity level {} needs a positive price multiplier", i + 1)
            }
        }
    }
}

impl std::error::Error for MetalValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metal::PurityLevel;
    use serde_json::json;

    fn valid() -> Metal {
        Metal::new("Yellow Gold", "#FFD700")
            .with_level(PurityLevel::new(10.0, 1.0))
            .with_level(PurityLevel::new(14.0, 1.15))
    }

    #[test]
    fn test_valid_metal() {
        assert!(validate_metal(&valid()).is_ok());
    }

    #[test]
    fn test_named_and_short_hex_colors() {
        let mut metal = valid();
        metal.color = "silver".to_string();
        assert!(validate_metal(&metal).is_ok());
        metal.color = "#fff".to_string();
        assert!(validate_metal(&metal).is_ok());
    }

    #[test]
    fn test_bad_hex_color() {
        let mut metal = valid();
        metal.color = "#GG0000".to_string();
        assert_eq!(
            validate_metal(&metal).unwrap_err(),
            vec![MetalValidationError::InvalidHexColor("#GG0000".to_string())]
        );
        metal.color = "#12345".to_string();
        assert!(validate_metal(&metal).is_err());
    }

    #[test]
    fn test_missing_fields() {
        let errors = validate_metal(&Metal::new(" ", "")).unwrap_err();
        assert_eq!(
            errors,
            vec![
                MetalValidationError::MissingName,
                MetalValidationError::MissingColor,
                MetalValidationError::NoPurityLevels,
            ]
        );
    }

    #[test]
    fn test_level_rules() {
        let metal: Metal = serde_json::from_value(json!({
            "name": "Gold",
            "color": "#FFD700",
            "purityLevels": [
                {"karat": "abc", "priceMultiplier": 1.0},
                {"karat": 0, "priceMultiplier": 1.0},
                {"karat": 14, "priceMultiplier": 0},
                {"karat": "14", "priceMultiplier": "1.2"}
            ]
        }))
        .unwrap();

        let errors = validate_metal(&metal).unwrap_err();
        assert_eq!(
            errors,
            vec![
                MetalValidationError::MissingKarat(0),
                MetalValidationError::NonPositiveKarat(1, Karat::new(0.0).unwrap()),
                MetalValidationError::InvalidMultiplier(2),
                MetalValidationError::DuplicateKarat(Karat::new(14.0).unwrap()),
            ]
        );
    }

    #[test]
    fn test_messages_are_one_based() {
        assert_eq!(
            MetalValidationError::InvalidMultiplier(0).to_string(),
            "purity level 1 needs a positive price multiplier"
        );
        assert_eq!(
            MetalValidationError::DuplicateKarat(Karat::new(18.0).unwrap()).to_string(),
            "karat 18K is listed more than once"
        );
    }
}
