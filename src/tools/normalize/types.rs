use serde::{Deserialize, Serialize};

/// Labels whose values are always converted to a number (compared case-insensitively).
pub const NUMERIC_FIELDS: [&str; 3] = ["running time", "budget", "box office"];

/// Whether `label` names one of the numeric fields.
pub fn is_numeric_field(label: &str) -> bool {
    NUMERIC_FIELDS
        .iter()
        .any(|field| field.eq_ignore_ascii_case(label.trim()))
}

/// Fixed conversion rates to USD.
///
/// These are historical constants, not live quotes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeRates {
    /// Applied to values carrying a bare `U` currency marker.
    pub u_code: f64,
    pub rupee: f64,
    pub yen: f64,
    pub ruble: f64,
}

impl Default for ExchangeRates {
    fn default() -> Self {
        Self {
            u_code: 0.71,
            rupee: 0.013,
            yen: 0.0087,
            ruble: 0.013,
        }
    }
}

/// Multiplier used for the `billion` magnitude suffix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillionScale {
    /// 10^12, what existing output files were produced with.
    #[default]
    Legacy,
    /// 10^9.
    Short,
}

impl BillionScale {
    pub fn factor(self) -> f64 {
        match self {
            Self::Legacy => 1_000_000_000_000.0,
            Self::Short => 1_000_000_000.0,
        }
    }
}

pub const MILLION: f64 = 1_000_000.0;

/// Knobs for numeric normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    pub rates: ExchangeRates,
    pub billion: BillionScale,
}

impl NormalizeOptions {
    pub fn with_billion(mut self, billion: BillionScale) -> Self {
        self.billion = billion;
        self
    }
}
