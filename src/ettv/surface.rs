use crate::ettv::construction::{Construction, ConstructionKind};
use crate::ettv::orientation::Orientation;
use crate::{HasName, MeasureArea, Mesh};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Envelope component type of a surface, also used as the component
/// breakdown key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SurfaceType {
    Wall,
    Fenestration,
    Roof,
    Unknown,
}

impl SurfaceType {
    pub fn name(&self) -> &'static str {
        match self {
            SurfaceType::Wall => "Wall",
            SurfaceType::Fenestration => "Fenestration",
            SurfaceType::Roof => "Roof",
            SurfaceType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for SurfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A geometric envelope element with a construction and an orientation.
///
/// The construction is shared: many surfaces may hold the same handle.
/// The id is the position of the surface in its owning [`Model`](crate::Model)
/// and is reassigned whenever the model's surface sequence is replaced.
#[derive(Debug)]
pub struct Surface {
    id: usize,
    name: String,
    geometry: Box<dyn MeasureArea>,
    construction: Option<Rc<Construction>>,
    orientation: Option<Orientation>,
}

impl HasName for Surface {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl Surface {
    pub fn new(
        name: &str,
        geometry: Box<dyn MeasureArea>,
        construction: Option<Rc<Construction>>,
        orientation: Option<Orientation>,
    ) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            geometry,
            construction,
            orientation,
        }
    }

    /// Creates a surface whose orientation is classified from the geometry's normal.
    ///
    /// Geometry without a normal is left without an orientation.
    pub fn from_geometry<G: MeasureArea + 'static>(
        name: &str,
        geometry: G,
        construction: Option<Rc<Construction>>,
    ) -> Self {
        let orientation = geometry.normal().map(Orientation::from_normal);
        Self::new(name, Box::new(geometry), construction, orientation)
    }

    pub fn from_mesh(name: &str, mesh: Mesh, construction: Option<Rc<Construction>>) -> Self {
        Self::from_geometry(name, mesh, construction)
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: usize) {
        self.id = id;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn geometry(&self) -> &dyn MeasureArea {
        self.geometry.as_ref()
    }

    /// Measured area in m^2. Negative or NaN measurements count as zero.
    pub fn area(&self) -> f64 {
        let area = self.geometry.area();
        if area > 0.0 { area } else { 0.0 }
    }

    pub fn construction(&self) -> Option<&Rc<Construction>> {
        self.construction.as_ref()
    }

    pub fn set_construction(&mut self, construction: Option<Rc<Construction>>) {
        self.construction = construction;
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    /// Orientation, or `Unknown` if none was assigned.
    pub fn orientation_or_unknown(&self) -> Orientation {
        self.orientation.unwrap_or(Orientation::Unknown)
    }

    pub fn set_orientation(&mut self, orientation: Option<Orientation>) {
        self.orientation = orientation;
    }

    /// U-value of the construction, `0.0` without one.
    pub fn u_value(&self) -> f64 {
        self.construction.as_ref().map_or(0.0, |c| c.u_value())
    }

    /// Type derived from the construction variant.
    ///
    /// Opaque constructions facing up are roofs, all other opaque ones walls.
    pub fn surface_type(&self) -> SurfaceType {
        match self.construction.as_ref().map(|c| c.kind()) {
            None => SurfaceType::Unknown,
            Some(ConstructionKind::Fenestration(_)) => SurfaceType::Fenestration,
            Some(ConstructionKind::Opaque) if self.orientation_or_unknown().is_roof() => {
                SurfaceType::Roof
            }
            Some(ConstructionKind::Opaque) => SurfaceType::Wall,
        }
    }
}
