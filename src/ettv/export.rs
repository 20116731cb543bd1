//! Serializable snapshot of a model for interchange.

use crate::ettv::model::Model;
use crate::ettv::orientation::Orientation;
use crate::ettv::surface::{Surface, SurfaceType};
use serde::{Deserialize, Serialize};

/// Flat, JSON-friendly view of a [`Model`].
///
/// Surfaces appear in sequence order. `surface_order` holds the clustering
/// view as groups of surface ids, or a single group with every id when the
/// model has not been reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelExport {
    pub project_name: String,
    pub version: String,
    pub reordered: bool,
    pub surface_order: Vec<Vec<usize>>,
    pub surfaces: Vec<SurfaceExport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ettv_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceExport {
    pub id: usize,
    pub name: String,
    #[serde(rename = "type")]
    pub surface_type: SurfaceType,
    pub orientation: Orientation,
    pub area: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub construction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub construction_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub u_value: Option<f64>,
    /// Resolved shading coefficient, fenestration only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sc_total: Option<f64>,
    pub material_count: usize,
}

impl ModelExport {
    pub fn from_model(model: &Model) -> Self {
        let surface_order = match model.clustered_order() {
            Some(clusters) => clusters.iter().map(|c| c.surface_ids.clone()).collect(),
            None => vec![model.surfaces().iter().map(|s| s.id()).collect()],
        };
        let result = model.computation_result();

        Self {
            project_name: model.project_name().to_string(),
            version: model.version().to_string(),
            reordered: model.is_reordered(),
            surface_order,
            surfaces: model.surfaces().iter().map(SurfaceExport::from_surface).collect(),
            ettv_value: result.and_then(|r| r.ettv_value),
            pass: result.map(|r| r.pass),
        }
    }
}

impl SurfaceExport {
    pub fn from_surface(surface: &Surface) -> Self {
        let construction = surface.construction();
        Self {
            id: surface.id(),
            name: surface.name().to_string(),
            surface_type: surface.surface_type(),
            orientation: surface.orientation_or_unknown(),
            area: surface.area(),
            construction_id: construction.map(|c| c.id().to_string()),
            construction_name: construction.map(|c| c.name().to_string()),
            u_value: construction.map(|c| c.u_value()),
            sc_total: construction.and_then(|c| c.resolved_sc_total()),
            material_count: construction.map_or(0, |c| c.materials().len()),
        }
    }
}
