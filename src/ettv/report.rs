//! Human-readable deconstruction of models and constructions.
//!
//! Pure formatting over data that is already on the model: nothing here
//! recomputes U-values or ETTV.

use crate::ettv::construction::{Construction, ConstructionKind};
use crate::ettv::model::Model;
use crate::ettv::orientation::Orientation;
use crate::ettv::result::ComputationResult;
use crate::ettv::surface::Surface;
use crate::SortByName;
use std::fmt;

const HEAVY_RULE: &str = "═══════════════════════════════════════════════════";
const LIGHT_RULE: &str = "───────────────────────────────────────────────────";

/// Formats the full model report: header, surfaces by orientation,
/// constructions and the last computation result.
pub fn deconstruct_model(model: &Model) -> String {
    ModelReport(model).to_string()
}

/// Formats a single construction with its layers.
pub fn deconstruct_construction(construction: &Construction) -> String {
    ConstructionReport(construction).to_string()
}

/// Display adapter for [`deconstruct_model`].
pub struct ModelReport<'a>(pub &'a Model);

/// Display adapter for [`deconstruct_construction`].
pub struct ConstructionReport<'a>(pub &'a Construction);

impl fmt::Display for ModelReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let model = self.0;
        writeln!(f, "{HEAVY_RULE}")?;
        writeln!(f, "Project: {}", model.project_name())?;
        writeln!(f, "Version: {}", model.version())?;
        writeln!(f, "Total Surfaces: {}", model.surfaces().len())?;
        writeln!(f, "{HEAVY_RULE}")?;

        let groups = surface_groups(model);
        if !groups.is_empty() {
            writeln!(f)?;
            writeln!(f, "SURFACES:")?;
            writeln!(f, "{LIGHT_RULE}")?;
            for (orientation, surfaces) in groups {
                writeln!(f)?;
                writeln!(
                    f,
                    "{} ({} surfaces)",
                    orientation.name().to_uppercase(),
                    surfaces.len()
                )?;
                for s in surfaces {
                    write_surface(f, s, "  ")?;
                }
            }
        }

        let mut constructions = model.unique_constructions();
        if !constructions.is_empty() {
            constructions.as_mut_slice().sort_by_name();
            writeln!(f)?;
            writeln!(f, "CONSTRUCTIONS:")?;
            writeln!(f, "{LIGHT_RULE}")?;
            for c in constructions {
                writeln!(
                    f,
                    "  {} [{}] {}, U = {:.3} W/m²·K",
                    display_name(&c),
                    c.id(),
                    kind_label(c.kind()),
                    c.u_value()
                )?;
            }
        }

        if let Some(result) = model.computation_result() {
            writeln!(f)?;
            write_result(f, result)?;
        }
        Ok(())
    }
}

impl fmt::Display for ConstructionReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.0;
        writeln!(f, "Construction: {}", display_name(c))?;
        writeln!(f, "Id: {}", c.id())?;
        writeln!(f, "Type: {}", kind_label(c.kind()))?;
        write_construction_details(f, c, "")
    }
}

/// Clustering view when the model has one, otherwise orientation groups in
/// order of first appearance.
fn surface_groups(model: &Model) -> Vec<(Orientation, Vec<&Surface>)> {
    if let Some(groups) = model.clustered_surfaces() {
        return groups;
    }
    let mut groups: Vec<(Orientation, Vec<&Surface>)> = Vec::new();
    for s in model.surfaces() {
        let o = s.orientation_or_unknown();
        match groups.iter_mut().find(|(go, _)| *go == o) {
            Some((_, members)) => members.push(s),
            None => groups.push((o, vec![s])),
        }
    }
    groups
}

fn display_name(c: &Construction) -> &str {
    if c.name().is_empty() { c.id().as_str() } else { c.name() }
}

fn kind_label(kind: &ConstructionKind) -> &'static str {
    match kind {
        ConstructionKind::Opaque => "Opaque",
        ConstructionKind::Fenestration(_) => "Fenestration",
    }
}

fn write_surface(f: &mut fmt::Formatter<'_>, s: &Surface, indent: &str) -> fmt::Result {
    if s.name().is_empty() {
        writeln!(f, "{indent}├─ Surface: ID:{}", s.id())?;
    } else {
        writeln!(f, "{indent}├─ Surface: {}", s.name())?;
    }
    writeln!(f, "{indent}│  Type: {}", s.surface_type())?;
    writeln!(f, "{indent}│  Area: {:.3} m²", s.area())?;
    if let Some(o) = s.orientation() {
        writeln!(f, "{indent}│  Orientation: {o}")?;
    }
    if let Some(c) = s.construction() {
        writeln!(f, "{indent}│  └─ Construction: {}", display_name(c))?;
        write_construction_details(f, c, &format!("{indent}│     "))?;
    }
    writeln!(f)
}

fn write_construction_details(
    f: &mut fmt::Formatter<'_>,
    c: &Construction,
    indent: &str,
) -> fmt::Result {
    if c.u_value() > 0.0 {
        writeln!(f, "{indent}U-value: {:.3} W/m²·K", c.u_value())?;
    }
    if let Some(sc) = c.solar_control() {
        writeln!(f, "{indent}Sc1: {:.3}", sc.sc1)?;
        writeln!(f, "{indent}Sc2: {:.3}", sc.sc2)?;
        writeln!(f, "{indent}ScTotal: {:.3}", sc.sc_total)?;
    }

    let materials = c.materials();
    if materials.is_empty() {
        return Ok(());
    }
    writeln!(f, "{indent}Materials ({}):", materials.len())?;
    for (i, m) in materials.iter().enumerate() {
        let last = i + 1 == materials.len();
        let (branch, sub) = if last { ("└─", "   ") } else { ("├─", "│  ") };
        writeln!(f, "{indent}   {branch} {}", m.name)?;
        writeln!(f, "{indent}   {sub} k: {:.3} W/m·K", m.conductivity)?;
        writeln!(f, "{indent}   {sub} Thickness: {:.3} m", m.thickness_m())?;
        writeln!(f, "{indent}   {sub} R: {:.3} m²·K/W", m.resistance())?;
    }
    Ok(())
}

fn write_result(f: &mut fmt::Formatter<'_>, result: &ComputationResult) -> fmt::Result {
    writeln!(f, "{HEAVY_RULE}")?;
    writeln!(f, "ETTV COMPUTATION RESULT")?;
    writeln!(f, "{HEAVY_RULE}")?;
    match result.ettv_value {
        Some(v) => writeln!(f, "ETTV Value: {v:.2} W/m²")?,
        None => writeln!(f, "ETTV Value: n/a")?,
    }
    writeln!(f, "Limit: {:.2} W/m²", result.limit)?;
    writeln!(f, "Pass: {}", if result.pass { "✓ YES" } else { "✗ NO" })?;
    writeln!(f, "Climate: {}", result.climate)?;
    if !result.notes.trim().is_empty() {
        writeln!(f, "Notes: {}", result.notes)?;
    }

    if !result.orientation_breakdown.is_empty() {
        writeln!(f)?;
        writeln!(f, "Orientation Breakdown:")?;
        let rows = result.orientation_breakdown.iter().map(|(k, v)| (k.name(), *v));
        write_descending(f, rows)?;
    }
    if !result.component_breakdown.is_empty() {
        writeln!(f)?;
        writeln!(f, "Component Breakdown:")?;
        let rows = result.component_breakdown.iter().map(|(k, v)| (k.name(), *v));
        write_descending(f, rows)?;
    }
    Ok(())
}

fn write_descending<'a>(
    f: &mut fmt::Formatter<'_>,
    rows: impl Iterator<Item = (&'a str, f64)>,
) -> fmt::Result {
    let mut rows: Vec<(&str, f64)> = rows.collect();
    rows.sort_by(|a, b| b.1.total_cmp(&a.1));
    for (name, value) in rows {
        writeln!(f, "  {name}: {value:.2} W")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ettv::cluster::reorder_surfaces;
    use crate::{MaterialLayer, MeasureArea, calculate_ettv};
    use std::rc::Rc;

    #[derive(Debug)]
    struct Area(f64);
    impl MeasureArea for Area {
        fn area(&self) -> f64 {
            self.0
        }
    }

    fn surface(name: &str, area: f64, c: &Rc<Construction>, o: Orientation) -> Surface {
        Surface::new(name, Box::new(Area(area)), Some(c.clone()), Some(o))
    }

    fn sample_model() -> Model {
        let wall = Rc::new(Construction::opaque(
            "w1",
            "Brick wall",
            vec![
                MaterialLayer::new("plaster", 0.72, 15.0),
                MaterialLayer::new("brick", 0.81, 100.0),
            ],
        ));
        let glass =
            Rc::new(Construction::fenestration_with_u_value("Glazing", 2.0, 0.5, 0.8).unwrap());
        Model::with_identity(
            "Tower A",
            "3",
            vec![
                surface("east wall", 10.0, &wall, Orientation::East),
                surface("north wall", 10.0, &wall, Orientation::North),
                surface("east window", 5.0, &glass, Orientation::East),
            ],
        )
    }

    #[test]
    fn test_header_and_groups() {
        let text = deconstruct_model(&sample_model());
        assert!(text.contains("Project: Tower A"));
        assert!(text.contains("Version: 3"));
        assert!(text.contains("Total Surfaces: 3"));
        assert!(text.contains("EAST (2 surfaces)"));
        assert!(text.contains("NORTH (1 surfaces)"));
        // First appearance order without clustering
        assert!(text.find("EAST (").unwrap() < text.find("NORTH (").unwrap());
        assert!(!text.contains("ETTV COMPUTATION RESULT"));
    }

    #[test]
    fn test_clustered_order_is_used() {
        let mut model = sample_model();
        reorder_surfaces(&mut model);
        let text = deconstruct_model(&model);
        assert!(text.find("NORTH (").unwrap() < text.find("EAST (").unwrap());
    }

    #[test]
    fn test_material_details() {
        let text = deconstruct_model(&sample_model());
        assert!(text.contains("Materials (2):"));
        assert!(text.contains("├─ plaster"));
        assert!(text.contains("└─ brick"));
        assert!(text.contains("Thickness: 0.100 m"));
        assert!(text.contains("ScTotal: 0.400"));
    }

    #[test]
    fn test_constructions_listed_by_name() {
        let text = deconstruct_model(&sample_model());
        let brick = text.find("  Brick wall [w1] Opaque").unwrap();
        let glazing = text.find("  Glazing [").unwrap();
        assert!(brick < glazing);
    }

    #[test]
    fn test_result_block() {
        let mut model = sample_model();
        calculate_ettv(&mut model, 10.0, "Tropical");
        let text = deconstruct_model(&model);
        assert!(text.contains("ETTV COMPUTATION RESULT"));
        assert!(text.contains("Pass: ✗ NO"));
        assert!(text.contains("Climate: Tropical"));
        assert!(text.contains("Orientation Breakdown:"));
        assert!(text.contains("Component Breakdown:"));
        // Largest contribution first
        assert!(text.find("  East:").unwrap() < text.find("  North:").unwrap());
    }

    #[test]
    fn test_empty_result_block() {
        let mut model = Model::with_identity("Empty", "0", vec![]);
        calculate_ettv(&mut model, 50.0, "Tropical");
        let text = deconstruct_model(&model);
        assert!(text.contains("ETTV Value: n/a"));
        assert!(text.contains("Notes: No surfaces provided for calculation."));
    }

    #[test]
    fn test_deconstruct_construction() {
        let c = Construction::fenestration("g1", "Low-E", vec![], 0.6, 0.0);
        let text = deconstruct_construction(&c);
        assert!(text.contains("Construction: Low-E"));
        assert!(text.contains("Id: g1"));
        assert!(text.contains("Type: Fenestration"));
        assert!(text.contains("Sc1: 0.600"));
        assert!(text.contains("ScTotal: 0.600"));
        // No layers and no U-value
        assert!(!text.contains("Materials"));
        assert!(!text.contains("U-value"));
    }
}
