//! ETTV aggregation.
//!
//! `ETTV = (sum(U_w * A_w) + sum(U_f * A_f) + sum(CF * A_f * SC) + sum(U_r * A_r)) / A_total`
//!
//! Walls and roofs contribute conduction only. Fenestration contributes
//! conduction plus a solar term scaled by the orientation's cooling factor
//! and the construction's resolved solar-control factor.

use crate::ettv::config::EttvConfig;
use crate::ettv::model::Model;
use crate::ettv::orientation::Orientation;
use crate::ettv::result::{
    ComponentBreakdown, ComputationResult, EnvelopeTotals, NOTE_NO_AREA, NOTE_NO_SURFACES,
    NOTE_PASSED, OrientationBreakdown,
};
use crate::ettv::surface::{Surface, SurfaceType};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Heat gain of a single surface in W.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceGain {
    pub component: SurfaceType,
    pub area: f64,
    pub conductive: f64,
    pub solar: f64,
}

impl SurfaceGain {
    /// Evaluates one surface with an already measured area.
    ///
    /// Fenestration is recognised by its construction. Any other surface
    /// facing up is a roof and everything else (floors included) a wall.
    pub fn of(surface: &Surface, area: f64) -> Self {
        let orientation = surface.orientation_or_unknown();
        let conductive = surface.u_value() * area;

        if surface.surface_type() == SurfaceType::Fenestration {
            let sc = surface
                .construction()
                .and_then(|c| c.resolved_sc_total())
                .unwrap_or(1.0);
            let solar = orientation.cooling_factor() * area * sc;
            return Self {
                component: SurfaceType::Fenestration,
                area,
                conductive,
                solar,
            };
        }

        let component = if orientation.is_roof() {
            SurfaceType::Roof
        } else {
            SurfaceType::Wall
        };
        Self {
            component,
            area,
            conductive,
            solar: 0.0,
        }
    }

    pub fn total(&self) -> f64 {
        self.conductive + self.solar
    }
}

/// Component key of a surface: roofs by orientation, otherwise the surface type.
fn component_key(surface: &Surface, orientation: Orientation) -> SurfaceType {
    if orientation.is_roof() {
        SurfaceType::Roof
    } else {
        surface.surface_type()
    }
}

/// Adds `value` under `key`. Zero contributions do not create entries.
fn add_contribution<K: Ord>(map: &mut BTreeMap<K, f64>, key: K, value: f64) {
    if value == 0.0 {
        return;
    }
    *map.entry(key).or_insert(0.0) += value;
}

/// Computes ETTV for models and stores the result on them.
#[derive(Debug, Clone, Default)]
pub struct EttvCalculator {
    config: EttvConfig,
}

impl EttvCalculator {
    pub fn new(config: EttvConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EttvConfig {
        &self.config
    }

    /// Calculates ETTV for `model`, replaces its computation result and
    /// returns the value (`None` if no surface has a measurable area).
    pub fn calculate(&self, model: &mut Model) -> Option<f64> {
        let result = self.evaluate(model.surfaces());
        let value = result.ettv_value;
        model.set_computation_result(result);
        value
    }

    /// Evaluates a surface sequence without touching any model.
    pub fn evaluate(&self, surfaces: &[Surface]) -> ComputationResult {
        let limit = self.config.limit;
        let climate = self.config.climate.as_str();

        if surfaces.is_empty() {
            warn!("ETTV requested for a model without surfaces");
            return ComputationResult::empty(limit, climate, NOTE_NO_SURFACES);
        }

        let mut totals = EnvelopeTotals::default();
        let mut orientation_breakdown = OrientationBreakdown::new();
        let mut component_breakdown = ComponentBreakdown::new();

        for surface in surfaces {
            let area = surface.area();
            if area <= self.config.area_epsilon {
                debug!(
                    surface = surface.id(),
                    name = surface.name(),
                    "skipping surface without measurable area"
                );
                continue;
            }
            if surface.construction().is_none() {
                debug!(
                    surface = surface.id(),
                    name = surface.name(),
                    "surface has no construction, counted with U = 0"
                );
            }

            let orientation = surface.orientation_or_unknown();
            let gain = SurfaceGain::of(surface, area);
            match gain.component {
                SurfaceType::Fenestration => {
                    totals.window_area += area;
                    totals.window_solar_contribution += gain.solar;
                    totals.window_conductive_contribution += gain.conductive;
                }
                SurfaceType::Roof => {
                    totals.roof_area += area;
                    totals.roof_contribution += gain.conductive;
                }
                SurfaceType::Wall | SurfaceType::Unknown => {
                    totals.wall_area += area;
                    totals.wall_contribution += gain.conductive;
                }
            }

            let contribution = gain.total();
            add_contribution(&mut orientation_breakdown, orientation, contribution);
            add_contribution(
                &mut component_breakdown,
                component_key(surface, orientation),
                contribution,
            );
        }

        let total_area = totals.total_area();
        if total_area <= 0.0 {
            warn!("no surface with measurable area, ETTV not computed");
            return ComputationResult::empty(limit, climate, NOTE_NO_AREA);
        }

        let ettv = totals.numerator() / total_area;
        let pass = ettv <= limit;
        info!(ettv, limit, pass, total_area, "ETTV calculated");

        let mut result = ComputationResult {
            ettv_value: Some(ettv),
            pass,
            limit,
            climate: climate.to_string(),
            orientation_breakdown,
            component_breakdown,
            totals,
            notes: String::new(),
        };
        result.notes = match result.margin() {
            Some(excess) if !pass => format!("ETTV exceeds limit by {excess:.2} W/m²"),
            _ => NOTE_PASSED.to_string(),
        };
        result
    }
}

/// Calculates ETTV for `model` against `limit` and stores the result on it.
pub fn calculate_ettv(model: &mut Model, limit: f64, climate: &str) -> Option<f64> {
    EttvCalculator::new(EttvConfig::with_limit(limit, climate)).calculate(model)
}
