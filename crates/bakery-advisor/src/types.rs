//! Advisory result shapes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Recipe cost-reduction advice.
///
/// All three fields are required when parsing a reply; a reply missing
/// any of them is rejected rather than partially filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advice {
    /// Brief analysis of the current cost drivers
    pub analysis: String,
    /// Actionable advice (substitution, waste reduction)
    pub suggestion: String,
    /// Estimated savings, as text (`12.5%`)
    pub potential_savings: String,
}

/// Demand direction over the forecast window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Trend {
    /// Demand rising
    Up,
    /// Demand falling
    Down,
    /// Demand flat
    Stable,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Trend::Up => "UP",
            Trend::Down => "DOWN",
            Trend::Stable => "STABLE",
        })
    }
}

/// Predicted demand for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    /// Day label
    pub day: String,
    /// Predicted units
    pub predicted_qty: u32,
    /// Why the model expects this
    pub reasoning: String,
}

/// Demand forecast for the next few days
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandForecast {
    /// Per-day predictions
    pub forecast: Vec<ForecastDay>,
    /// Overall direction
    pub trend: Trend,
}

impl DemandForecast {
    /// Sum of predicted units
    #[must_use]
    pub fn total_predicted(&self) -> u32 {
        self.forecast.iter().map(|d| d.predicted_qty).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advice_requires_every_field() {
        let full = r#"{"analysis":"a","suggestion":"s","potentialSavings":"5%"}"#;
        let advice: Advice = serde_json::from_str(full).unwrap();
        assert_eq!(advice.potential_savings, "5%");

        let partial = r#"{"analysis":"a","suggestion":"s"}"#;
        assert!(serde_json::from_str::<Advice>(partial).is_err());
    }

    #[test]
    fn forecast_parses_wire_shape() {
        let json = r#"{"forecast":[{"day":"Sat","predictedQty":500,"reasoning":"sun"}],"trend":"STABLE"}"#;
        let forecast: DemandForecast = serde_json::from_str(json).unwrap();
        assert_eq!(forecast.trend, Trend::Stable);
        assert_eq!(forecast.total_predicted(), 500);
    }
}
