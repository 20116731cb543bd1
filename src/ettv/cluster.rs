//! Grouping of surfaces by orientation for reporting.
//!
//! Clustering is a view: it never reorders the model's surfaces or changes
//! their ids, and it has no effect on the computed ETTV.

use crate::ettv::model::{Model, SurfaceCluster};
use crate::ettv::orientation::Orientation;
use crate::ettv::surface::Surface;
use std::collections::BTreeMap;
use tracing::debug;

/// Groups surfaces by orientation.
///
/// Groups follow the canonical orientation order (North, NorthEast, ..., Roof,
/// Floor, Unknown); surfaces without an orientation go to `Unknown`. Within a
/// group, surfaces keep their sequence order.
pub fn cluster_surfaces(surfaces: &[Surface]) -> Vec<SurfaceCluster> {
    let mut groups: BTreeMap<Orientation, Vec<usize>> = BTreeMap::new();
    for s in surfaces {
        groups.entry(s.orientation_or_unknown()).or_default().push(s.id());
    }
    groups
        .into_iter()
        .map(|(orientation, surface_ids)| SurfaceCluster {
            orientation,
            surface_ids,
        })
        .collect()
}

/// Stores the orientation clustering of `model` and marks it as reordered.
pub fn reorder_surfaces(model: &mut Model) {
    let clusters = cluster_surfaces(model.surfaces());
    debug!(
        surfaces = model.surfaces().len(),
        groups = clusters.len(),
        "surfaces clustered by orientation"
    );
    model.set_clustered_order(clusters);
}
