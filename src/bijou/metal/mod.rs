//! # Metals and Purity Pricing
//!
//! A metal (gold, platinum, ...) offers an ordered list of purity levels. Each
//! level's `priceMultiplier` is *incremental*: it applies on top of every level
//! before it, not on the base price. The price of a product at a given karat is
//! therefore `base_price * m[0] * m[1] * ... * m[i]`, where `i` is the index of
//! the requested level.
//!
//! Values coming from the admin form may be numbers or numeric strings, so the
//! karat a caller asks for is parsed once into a [`Karat`] and level fields are
//! read leniently. Anything that cannot be read as a positive multiplier counts
//! as `1.0`, which keeps `NaN` out of displayed prices.

pub mod validation;

use crate::error::{BijouError, Result};
use crate::lenient;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A purity value such as 14 (karat gold) or 950 (platinum fineness).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Karat(f64);

impl Karat {
    /// Returns `None` for non-finite values.
    pub fn new(value: f64) -> Option<Self> {
        value.is_finite().then_some(Karat(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl FromStr for Karat {
    type Err = BijouError;

    /// Accepts `14`, `14.0`, `"14k"` and `"14K"`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_suffix('k')
            .or_else(|| trimmed.strip_suffix('K'))
            .unwrap_or(trimmed)
            .trim_end();
        digits
            .parse::<f64>()
            .ok()
            .and_then(Karat::new)
            .ok_or_else(|| BijouError::InvalidKarat(s.to_string()))
    }
}

impl TryFrom<&Value> for Karat {
    type Error = BijouError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Number(n) => n
                .as_f64()
                .and_then(Karat::new)
                .ok_or_else(|| BijouError::InvalidKarat(n.to_string())),
            Value::String(s) => s.parse(),
            other => Err(BijouError::InvalidKarat(other.to_string())),
        }
    }
}

impl fmt::Display for Karat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{}K", self.0 as i64)
        } else {
            write!(f, "{}K", self.0)
        }
    }
}

fn lenient_karat<'de, D>(deserializer: D) -> std::result::Result<Option<Karat>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| Karat::try_from(v).ok()))
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurityLevel {
    #[serde(default, deserialize_with = "lenient_karat")]
    pub karat: Option<Karat>,

    #[serde(default, deserialize_with = "lenient::number")]
    pub price_multiplier: Option<f64>,

    #[serde(default = "default_active", deserialize_with = "lenient::flag_on")]
    pub active: bool,
}

impl PurityLevel {
    pub fn new(karat: f64, price_multiplier: f64) -> Self {
        Self {
            karat: Karat::new(karat),
            price_multiplier: Some(price_multiplier),
            active: true,
        }
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// The factor this level contributes; unreadable or non-positive values count as 1.
    pub fn effective_multiplier(&self) -> f64 {
        match self.price_multiplier {
            Some(m) if m.is_finite() && m > 0.0 => m,
            _ => 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metal {
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub color: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub color_name: String,

    #[serde(default = "default_active", deserialize_with = "lenient::flag_on")]
    pub active: bool,

    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub purity_levels: Vec<PurityLevel>,
}

/// One row of a metal's price preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurityPrice {
    pub karat: Karat,
    pub multiplier: f64,
    pub price: f64,
    pub active: bool,
}

impl Metal {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            color: color.into(),
            color_name: String::new(),
            active: true,
            purity_levels: Vec::new(),
        }
    }

    pub fn with_level(mut self, level: PurityLevel) -> Self {
        self.purity_levels.push(level);
        self
    }

    /// Index of the first level with the given karat.
    pub fn level_index(&self, karat: Karat) -> Option<usize> {
        self.purity_levels
            .iter()
            .position(|level| level.karat == Some(karat))
    }

    /// The compounded multiplier from the first level through `karat`'s level,
    /// or `1.0` when the metal has no such level.
    pub fn cumulative_multiplier(&self, karat: Karat) -> f64 {
        match self.level_index(karat) {
            Some(i) => self.purity_levels[..=i]
                .iter()
                .map(PurityLevel::effective_multiplier)
                .product(),
            None => {
                tracing::debug!(metal = %self.name, %karat, "karat not offered, no adjustment");
                1.0
            }
        }
    }

    pub fn price_for(&self, base_price: f64, karat: Karat) -> f64 {
        base_price * self.cumulative_multiplier(karat)
    }

    pub fn active_levels(&self) -> impl Iterator<Item = &PurityLevel> {
        self.purity_levels.iter().filter(|level| level.active)
    }

    /// Price preview for every level with a readable karat, in level order.
    pub fn price_table(&self, base_price: f64) -> Vec<PurityPrice> {
        self.purity_levels
            .iter()
            .filter_map(|level| {
                let karat = level.karat?;
                let multiplier = self.cumulative_multiplier(karat);
                Some(PurityPrice {
                    karat,
                    multiplier,
                    price: base_price * multiplier,
                    active: level.active,
                })
            })
            .collect()
    }

    pub fn price_table_active(&self, base_price: f64) -> Vec<PurityPrice> {
        self.price_table(base_price)
            .into_iter()
            .filter(|row| row.active)
            .collect()
    }
}

/// Free-function form used where a metal is looked up per displayed level.
pub fn cumulative_multiplier(metal: &Metal, target_karat: Karat) -> f64 {
    metal.cumulative_multiplier(target_karat)
}

/// Reads metals from a backend payload: a single metal, an array of metals,
/// or a list response wrapping the array under `metals` or `data`.
pub fn load_metals(json: &str) -> Result<Vec<Metal>> {
    let value: Value = serde_json::from_str(json).map_err(BijouError::Serialization)?;
    let wrapped = value
        .get("metals")
        .or_else(|| value.get("data"))
        .filter(|inner| inner.is_array())
        .cloned();
    let list = match (wrapped, value) {
        (Some(inner), _) => inner,
        (None, list @ Value::Array(_)) => list,
        (None, single @ Value::Object(_)) => Value::Array(vec![single]),
        (None, other) => {
            return Err(BijouError::Api(format!(
                "expected a metal object or array, found {}",
                other
            )))
        }
    };
    serde_json::from_value(list).map_err(BijouError::Serialization)
}

/// Finds a metal by case-insensitive name. Without a name the file must hold exactly one metal.
pub fn find_metal<'a>(metals: &'a [Metal], name: Option<&str>) -> Result<&'a Metal> {
    match name {
        Some(name) => metals
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| BijouError::MetalNotFound(name.to_string())),
        None => match metals {
            [only] => Ok(only),
            [] => Err(BijouError::MetalNotFound("no metals in input".to_string())),
            _ => Err(BijouError::Api(format!(
                "input holds {} metals; choose one with --metal",
                metals.len()
            ))),
        },
    }
}
