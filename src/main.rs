use anyhow::Result;
use ettv::io::write_export;
use ettv::{
    Construction, EttvCalculator, EttvConfig, MaterialLayer, Mesh, Model, ModelSequence, Point,
    Surface, Vector, deconstruct_model, reorder_surfaces,
};
use std::path::PathBuf;
use std::rc::Rc;

/// Rectangle spanned by `along` and `up` from `origin`. The outward normal is `along x up`.
fn panel(origin: Point, along: Vector, up: Vector) -> Mesh {
    let p1 = origin + along;
    let p2 = p1 + up;
    let p3 = origin + up;
    Mesh::from_polygon(vec![origin, p1, p2, p3])
}

fn main() -> Result<()> {
    ettv::logging::init();

    let (width, depth, height) = (20.0, 12.0, 3.5);
    let sill = 1.0;
    let glazing_height = 1.5;

    let wall = Rc::new(Construction::opaque(
        "wall-200",
        "Brick cavity wall",
        vec![
            MaterialLayer::new("Cement plaster", 0.72, 15.0),
            MaterialLayer::new("Brick", 0.81, 100.0),
            MaterialLayer::new("Air gap", 0.16, 50.0),
            MaterialLayer::new("Brick", 0.81, 100.0),
            MaterialLayer::new("Cement plaster", 0.72, 15.0),
        ],
    ));
    let roof = Rc::new(Construction::opaque(
        "roof-150",
        "Insulated concrete roof",
        vec![
            MaterialLayer::new("Concrete slab", 1.44, 150.0),
            MaterialLayer::new("Polystyrene", 0.035, 50.0),
            MaterialLayer::new("Screed", 0.72, 25.0),
        ],
    ));
    let glazing = Rc::new(Construction::fenestration(
        "glz-6",
        "Tinted single glazing",
        vec![MaterialLayer::new("Tinted glass", 1.0, 6.0)],
        0.6,
        0.8,
    ));

    let up = Vector::new(0.0, 0.0, height);
    let band = Vector::new(0.0, 0.0, glazing_height);
    let facades = [
        ("South", Point::new(0.0, 0.0, 0.0), Vector::new(width, 0.0, 0.0)),
        ("East", Point::new(width, 0.0, 0.0), Vector::new(0.0, depth, 0.0)),
        ("North", Point::new(width, depth, 0.0), Vector::new(-width, 0.0, 0.0)),
        ("West", Point::new(0.0, depth, 0.0), Vector::new(0.0, -depth, 0.0)),
    ];

    let mut surfaces = Vec::new();
    for (label, origin, along) in facades {
        surfaces.push(Surface::from_mesh(
            &format!("{label} wall"),
            panel(origin, along, up),
            Some(wall.clone()),
        ));
        // Glazing strip along half of the facade
        let window_origin = origin + along * 0.25 + Vector::new(0.0, 0.0, sill);
        surfaces.push(Surface::from_mesh(
            &format!("{label} window"),
            panel(window_origin, along * 0.5, band),
            Some(glazing.clone()),
        ));
    }
    surfaces.push(Surface::from_mesh(
        "Roof",
        panel(
            Point::new(0.0, 0.0, height),
            Vector::new(width, 0.0, 0.0),
            Vector::new(0.0, depth, 0.0),
        ),
        Some(roof),
    ));

    let mut sequence = ModelSequence::new();
    let mut model = Model::new(surfaces, &mut sequence);

    let calculator = EttvCalculator::new(EttvConfig::default());
    calculator.calculate(&mut model);
    reorder_surfaces(&mut model);

    println!("{}", deconstruct_model(&model));

    if let Some(dir) = std::env::args().nth(1) {
        let path = write_export(&PathBuf::from(dir), &model)?;
        println!("Model exported to {}", path.display());
    }

    Ok(())
}
