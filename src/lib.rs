//! Envelope Thermal Transfer Value (ETTV) calculation for building envelopes.
//!
//! A [`Model`] holds envelope [`Surface`]s, each with a measured geometry, an
//! [`Orientation`] and a shared [`Construction`]. [`EttvCalculator`] combines
//! conduction through walls, roofs and glazing with solar gain through glazing
//! into a single area-weighted value and checks it against a limit.

pub mod ettv;
pub mod geom;
pub mod io;
pub mod logging;
mod name;
mod uid;

// Prelude
pub use ettv::calculator::{EttvCalculator, SurfaceGain, calculate_ettv};
pub use ettv::cluster::{cluster_surfaces, reorder_surfaces};
pub use ettv::config::EttvConfig;
pub use ettv::construction::{Construction, ConstructionKind, SolarControl, compute_u_value};
pub use ettv::export::{ModelExport, SurfaceExport};
pub use ettv::materials::MaterialLayer;
pub use ettv::model::{Model, ModelSequence, SurfaceCluster};
pub use ettv::orientation::Orientation;
pub use ettv::report::{deconstruct_construction, deconstruct_model};
pub use ettv::result::ComputationResult;
pub use ettv::surface::{Surface, SurfaceType};
pub use geom::mesh::{MeasureArea, Mesh, TriangleIndex};
pub use geom::point::Point;
pub use geom::vector::Vector;
pub use name::{HasName, SortByName};
pub use uid::UID;
