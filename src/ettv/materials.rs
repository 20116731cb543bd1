use crate::HasName;
use serde::{Deserialize, Serialize};

/// A single material layer of an envelope construction.
///
/// Thickness is given in millimetres, as entered by the authoring layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialLayer {
    pub name: String,
    /// Thermal conductivity in W/(m*K).
    pub conductivity: f64,
    /// Thickness in millimetres.
    pub thickness: f64,
}

impl HasName for MaterialLayer {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl MaterialLayer {
    pub fn new(name: &str, conductivity: f64, thickness_mm: f64) -> Self {
        Self {
            name: name.to_string(),
            conductivity,
            thickness: thickness_mm,
        }
    }

    /// Thickness in metres.
    pub fn thickness_m(&self) -> f64 {
        self.thickness / 1000.0
    }

    /// Thermal resistance of this layer in m^2*K/W.
    ///
    /// Layers with non-positive conductivity contribute no resistance.
    pub fn resistance(&self) -> f64 {
        if self.conductivity > 0.0 {
            self.thickness_m() / self.conductivity
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resistance() {
        // 200 mm concrete, k = 1.4
        let layer = MaterialLayer::new("concrete", 1.4, 200.0);
        assert!((layer.thickness_m() - 0.2).abs() < 1e-12);
        assert!((layer.resistance() - 0.2 / 1.4).abs() < 1e-12);
    }

    #[test]
    fn test_non_positive_conductivity_is_skipped() {
        assert_eq!(MaterialLayer::new("air", 0.0, 50.0).resistance(), 0.0);
        assert_eq!(MaterialLayer::new("bad", -1.0, 50.0).resistance(), 0.0);
    }
}
