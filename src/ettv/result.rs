use crate::ettv::orientation::Orientation;
use crate::ettv::surface::SurfaceType;
use serde::Serialize;
use std::collections::BTreeMap;

pub const NOTE_NO_SURFACES: &str = "No surfaces provided for calculation.";
pub const NOTE_NO_AREA: &str = "No surfaces with measurable area were provided for calculation.";
pub const NOTE_PASSED: &str = "ETTV calculation passed.";

/// Summed heat gain per orientation, in W (area-weighted W/m^2).
pub type OrientationBreakdown = BTreeMap<Orientation, f64>;
/// Summed heat gain per envelope component, in W.
pub type ComponentBreakdown = BTreeMap<SurfaceType, f64>;

/// Areas and heat-gain sums accumulated over all contributing surfaces.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnvelopeTotals {
    pub wall_area: f64,
    pub window_area: f64,
    pub roof_area: f64,
    pub wall_contribution: f64,
    pub window_solar_contribution: f64,
    pub window_conductive_contribution: f64,
    pub roof_contribution: f64,
}

impl EnvelopeTotals {
    /// Gross envelope area in m^2.
    pub fn total_area(&self) -> f64 {
        self.wall_area + self.window_area + self.roof_area
    }

    /// Sum of all heat-gain terms, the numerator of the ETTV formula.
    pub fn numerator(&self) -> f64 {
        self.wall_contribution
            + self.window_solar_contribution
            + self.window_conductive_contribution
            + self.roof_contribution
    }
}

/// Outcome of one ETTV calculation.
///
/// A new result is created by every calculation and replaces the previous one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputationResult {
    /// ETTV in W/m^2. `None` when no surface contributed any area.
    pub ettv_value: Option<f64>,
    pub pass: bool,
    pub limit: f64,
    pub climate: String,
    pub orientation_breakdown: OrientationBreakdown,
    pub component_breakdown: ComponentBreakdown,
    pub totals: EnvelopeTotals,
    pub notes: String,
}

impl ComputationResult {
    /// Result for a model with nothing to compute.
    pub fn empty(limit: f64, climate: &str, notes: &str) -> Self {
        Self {
            ettv_value: None,
            pass: false,
            limit,
            climate: climate.to_string(),
            orientation_breakdown: BTreeMap::new(),
            component_breakdown: BTreeMap::new(),
            totals: EnvelopeTotals::default(),
            notes: notes.to_string(),
        }
    }

    /// Amount by which the limit is exceeded (negative when passing).
    pub fn margin(&self) -> Option<f64> {
        self.ettv_value.map(|v| v - self.limit)
    }

    pub fn orientation_total(&self) -> f64 {
        self.orientation_breakdown.values().sum()
    }

    pub fn component_total(&self) -> f64 {
        self.component_breakdown.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = ComputationResult::empty(50.0, "Tropical", NOTE_NO_SURFACES);
        assert!(result.ettv_value.is_none());
        assert!(!result.pass);
        assert!(result.margin().is_none());
        assert!(result.orientation_breakdown.is_empty());
        assert_eq!(result.totals.total_area(), 0.0);
    }

    #[test]
    fn test_totals() {
        let totals = EnvelopeTotals {
            wall_area: 10.0,
            window_area: 5.0,
            roof_area: 2.0,
            wall_contribution: 15.0,
            window_solar_contribution: 386.0,
            window_conductive_contribution: 10.0,
            roof_contribution: 1.0,
        };
        assert!((totals.total_area() - 17.0).abs() < 1e-12);
        assert!((totals.numerator() - 412.0).abs() < 1e-12);
    }

    #[test]
    fn test_breakdown_serializes_with_names() {
        let mut result = ComputationResult::empty(50.0, "Tropical", "");
        result.orientation_breakdown.insert(Orientation::SouthWest, 12.5);
        result.component_breakdown.insert(SurfaceType::Fenestration, 12.5);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"SouthWest\":12.5"));
        assert!(json.contains("\"Fenestration\":12.5"));
    }
}
