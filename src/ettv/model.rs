use crate::ettv::construction::Construction;
use crate::ettv::orientation::Orientation;
use crate::ettv::result::ComputationResult;
use crate::ettv::surface::Surface;
use std::collections::HashSet;
use std::rc::Rc;

/// Hands out project names and versions for new models.
///
/// Every call to [`ModelSequence::next_identity`] returns a name and a version that
/// differ from all previous ones issued by the same sequence.
#[derive(Debug, Clone, Default)]
pub struct ModelSequence {
    next_project: u64,
    next_version: u64,
}

impl ModelSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(project: u64, version: u64) -> Self {
        Self {
            next_project: project,
            next_version: version,
        }
    }

    /// Returns `(project_name, version)` and advances the sequence.
    pub fn next_identity(&mut self) -> (String, String) {
        let project_name = format!("EttvProject_{}", self.next_project);
        let version = self.next_version.to_string();
        self.next_project += 1;
        self.next_version += 1;
        (project_name, version)
    }
}

/// Surfaces sharing one orientation, in surface sequence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceCluster {
    pub orientation: Orientation,
    pub surface_ids: Vec<usize>,
}

/// ETTV model: the surfaces of one building envelope and the results derived from them.
#[derive(Debug)]
pub struct Model {
    project_name: String,
    version: String,
    surfaces: Vec<Surface>,
    computation_result: Option<ComputationResult>,
    clustered_order: Option<Vec<SurfaceCluster>>,
    reordered: bool,
}

impl Model {
    /// Creates a model named by the next entry of `sequence`.
    pub fn new(surfaces: Vec<Surface>, sequence: &mut ModelSequence) -> Self {
        let (project_name, version) = sequence.next_identity();
        Self::with_identity(&project_name, &version, surfaces)
    }

    pub fn with_identity(project_name: &str, version: &str, surfaces: Vec<Surface>) -> Self {
        let mut model = Self {
            project_name: project_name.to_string(),
            version: version.to_string(),
            surfaces: Vec::new(),
            computation_result: None,
            clustered_order: None,
            reordered: false,
        };
        model.set_surfaces(surfaces);
        model
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn surface(&self, id: usize) -> Option<&Surface> {
        self.surfaces.get(id)
    }

    pub fn surface_mut(&mut self, id: usize) -> Option<&mut Surface> {
        self.surfaces.get_mut(id)
    }

    /// Replaces the surface sequence and renumbers every surface by its position.
    ///
    /// The clustering view refers to the old ids, so it is discarded.
    pub fn set_surfaces(&mut self, mut surfaces: Vec<Surface>) {
        for (i, s) in surfaces.iter_mut().enumerate() {
            s.set_id(i);
        }
        self.surfaces = surfaces;
        self.clustered_order = None;
        self.reordered = false;
    }

    /// Appends a surface and returns its id.
    pub fn push_surface(&mut self, mut surface: Surface) -> usize {
        let id = self.surfaces.len();
        surface.set_id(id);
        self.surfaces.push(surface);
        self.clustered_order = None;
        self.reordered = false;
        id
    }

    pub fn computation_result(&self) -> Option<&ComputationResult> {
        self.computation_result.as_ref()
    }

    pub(crate) fn set_computation_result(&mut self, result: ComputationResult) {
        self.computation_result = Some(result);
    }

    /// ETTV value of the last calculation.
    pub fn ettv_value(&self) -> Option<f64> {
        self.computation_result.as_ref().and_then(|r| r.ettv_value)
    }

    pub fn clustered_order(&self) -> Option<&[SurfaceCluster]> {
        self.clustered_order.as_deref()
    }

    pub(crate) fn set_clustered_order(&mut self, clusters: Vec<SurfaceCluster>) {
        self.clustered_order = Some(clusters);
        self.reordered = true;
    }

    /// The clustering view resolved to surfaces.
    pub fn clustered_surfaces(&self) -> Option<Vec<(Orientation, Vec<&Surface>)>> {
        let clusters = self.clustered_order.as_ref()?;
        let resolved = clusters
            .iter()
            .map(|c| {
                let surfaces = c
                    .surface_ids
                    .iter()
                    .filter_map(|&id| self.surfaces.get(id))
                    .collect();
                (c.orientation, surfaces)
            })
            .collect();
        Some(resolved)
    }

    pub fn is_reordered(&self) -> bool {
        self.reordered
    }

    /// Distinct constructions referenced by the surfaces, in first-seen order.
    ///
    /// Constructions are told apart by id.
    pub fn unique_constructions(&self) -> Vec<Rc<Construction>> {
        let mut seen = HashSet::new();
        self.surfaces
            .iter()
            .filter_map(|s| s.construction())
            .filter(|c| seen.insert(c.id().clone()))
            .cloned()
            .collect()
    }
}
