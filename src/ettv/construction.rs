use crate::ettv::materials::MaterialLayer;
use crate::{HasName, UID};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Interior surface resistance in m^2*K/W.
pub const R_SI: f64 = 0.12;
/// Exterior surface resistance in m^2*K/W.
pub const R_SE: f64 = 0.044;

/// Computes the U-value in W/(m^2*K) of a layered construction.
///
/// `R = R_SI + sum(thickness / k) + R_SE`, `U = 1 / R`.
/// Layer order does not matter. Layers with non-positive conductivity are
/// skipped and an empty layer list yields `0.0`.
pub fn compute_u_value(materials: &[MaterialLayer]) -> f64 {
    if materials.is_empty() {
        return 0.0;
    }
    let r_layers: f64 = materials.iter().map(MaterialLayer::resistance).sum();
    let r_total = R_SI + r_layers + R_SE;
    if r_total > 0.0 { 1.0 / r_total } else { 0.0 }
}

/// Solar-control factors of a fenestration construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarControl {
    pub sc1: f64,
    pub sc2: f64,
    /// Combined factor. Defaults to `sc1 * sc2`.
    pub sc_total: f64,
}

impl SolarControl {
    pub fn new(sc1: f64, sc2: f64) -> Self {
        Self {
            sc1,
            sc2,
            sc_total: combine(sc1, sc2),
        }
    }

    /// Factor applied to the solar gain of the fenestration.
    ///
    /// Prefers a positive `sc_total`, then `sc1 * sc2` with unset sub-factors
    /// taken as 1, and finally full transmission (1.0).
    pub fn resolved(&self) -> f64 {
        if self.sc_total > 0.0 {
            return self.sc_total;
        }
        let sc = combine(self.sc1, self.sc2);
        if sc > 0.0 { sc } else { 1.0 }
    }
}

/// Non-positive sub-factors count as 1 so an unset factor cannot zero the product.
fn combine(sc1: f64, sc2: f64) -> f64 {
    let or_one = |sc: f64| if sc > 0.0 { sc } else { 1.0 };
    or_one(sc1) * or_one(sc2)
}

/// Opaque or fenestration construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ConstructionKind {
    Opaque,
    Fenestration(SolarControl),
}

/// An envelope construction built from material layers.
///
/// The U-value is derived from the layers whenever they are assigned. It can
/// only be set directly for constructions that carry no layer data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Construction {
    id: UID,
    name: String,
    materials: Vec<MaterialLayer>,
    u_value: f64,
    kind: ConstructionKind,
}

impl HasName for Construction {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl Construction {
    fn with_kind(
        id: &str,
        name: &str,
        materials: Vec<MaterialLayer>,
        kind: ConstructionKind,
    ) -> Self {
        let u_value = compute_u_value(&materials);
        Self {
            id: UID::from(id),
            name: name.to_string(),
            materials,
            u_value,
            kind,
        }
    }

    /// Creates an opaque construction (wall, roof, floor). A blank `id` gets a random one.
    pub fn opaque(id: &str, name: &str, materials: Vec<MaterialLayer>) -> Self {
        Self::with_kind(id, name, materials, ConstructionKind::Opaque)
    }

    /// Creates a fenestration construction with `sc_total = sc1 * sc2`.
    pub fn fenestration(
        id: &str,
        name: &str,
        materials: Vec<MaterialLayer>,
        sc1: f64,
        sc2: f64,
    ) -> Self {
        let kind = ConstructionKind::Fenestration(SolarControl::new(sc1, sc2));
        Self::with_kind(id, name, materials, kind)
    }

    /// Creates an opaque construction from a known U-value (no layer data).
    pub fn opaque_with_u_value(name: &str, u_value: f64) -> Result<Self> {
        let mut c = Self::opaque("", name, vec![]);
        c.set_u_value_override(u_value)?;
        Ok(c)
    }

    /// Creates a fenestration construction from a known U-value (no layer data).
    pub fn fenestration_with_u_value(name: &str, u_value: f64, sc1: f64, sc2: f64) -> Result<Self> {
        let mut c = Self::fenestration("", name, vec![], sc1, sc2);
        c.set_u_value_override(u_value)?;
        Ok(c)
    }

    pub fn id(&self) -> &UID {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn materials(&self) -> &[MaterialLayer] {
        &self.materials
    }

    /// U-value in W/(m^2*K).
    pub fn u_value(&self) -> f64 {
        self.u_value
    }

    pub fn kind(&self) -> &ConstructionKind {
        &self.kind
    }

    pub fn is_fenestration(&self) -> bool {
        matches!(self.kind, ConstructionKind::Fenestration(_))
    }

    pub fn solar_control(&self) -> Option<&SolarControl> {
        match &self.kind {
            ConstructionKind::Fenestration(sc) => Some(sc),
            ConstructionKind::Opaque => None,
        }
    }

    /// Resolved solar-control factor, `None` for opaque constructions.
    pub fn resolved_sc_total(&self) -> Option<f64> {
        self.solar_control().map(SolarControl::resolved)
    }

    /// Replaces the material layers and recomputes the U-value.
    pub fn set_materials(&mut self, materials: Vec<MaterialLayer>) {
        self.u_value = compute_u_value(&materials);
        self.materials = materials;
    }

    /// Sets the U-value directly. Only allowed when there are no layers.
    pub fn set_u_value_override(&mut self, u_value: f64) -> Result<()> {
        if !self.materials.is_empty() {
            bail!(
                "Construction '{}' has {} material layers, its U-value is derived from them",
                self.name,
                self.materials.len()
            );
        }
        if !u_value.is_finite() || u_value < 0.0 {
            bail!("U-value must be >= 0, got {u_value}");
        }
        self.u_value = u_value;
        Ok(())
    }

    /// Sets `sc1` and `sc2` and recomputes `sc_total` from them.
    pub fn set_shading_coefficients(&mut self, sc1: f64, sc2: f64) -> Result<()> {
        match &mut self.kind {
            ConstructionKind::Fenestration(sc) => {
                *sc = SolarControl::new(sc1, sc2);
                Ok(())
            }
            ConstructionKind::Opaque => bail!(
                "Construction '{}' is opaque and has no solar-control factors",
                self.name
            ),
        }
    }

    /// Overrides the combined solar-control factor.
    pub fn set_sc_total(&mut self, sc_total: f64) -> Result<()> {
        match &mut self.kind {
            ConstructionKind::Fenestration(sc) => {
                sc.sc_total = sc_total;
                Ok(())
            }
            ConstructionKind::Opaque => bail!(
                "Construction '{}' is opaque and has no solar-control factors",
                self.name
            ),
        }
    }
}
