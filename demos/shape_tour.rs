//! # Shape Tour Example
//!
//! Projects classic three-body configurations onto the shape sphere, reads
//! off their radius, rebuilds a triangle from each sphere point and lists
//! the uniformizing branch points of the result.
//!
//! ## Usage
//! ```bash
//! RUST_LOG=debug cargo run --example shape_tour
//! ```

use anyhow::Context;
use shape_sphere::prelude::*;

/// A named starting configuration
struct Preset {
    name: &'static str,
    masses: [f64; 3],
    points: [[f64; 2]; 3],
}

fn presets() -> Vec<Preset> {
    let height = 3f64.sqrt() / 2.0;
    vec![
        Preset {
            name: "Figure-8 initial positions",
            masses: [1.0, 1.0, 1.0],
            points: [[0.9700436, -0.24308753], [-0.9700436, 0.24308753], [0.0, 0.0]],
        },
        Preset {
            name: "Lagrange equilateral",
            masses: [1.0, 1.0, 1.0],
            points: [[0.0, 0.0], [1.0, 0.0], [0.5, height]],
        },
        Preset {
            name: "Hierarchical binary",
            masses: [1.0, 1.0, 0.5],
            points: [[-1.0, 0.0], [1.0, 0.0], [12.0, 0.0]],
        },
        Preset {
            name: "Right isosceles",
            masses: [1.0, 2.0, 3.0],
            points: [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]],
        },
    ]
}

fn tour(preset: &Preset, map: &ShapeSphereMap, uniformizing: &UniformizingMap) -> anyhow::Result<()> {
    let masses = MassTriple::try_from(preset.masses)
        .with_context(|| format!("masses of {}", preset.name))?;
    let [a, b, c] = preset.points.map(|[x, y]| Vector2::new(x, y));
    let triangle = Triangle::new(a, b, c);

    let xi = map.raw_coordinates(&triangle, &masses)?;
    let point = xi.to_sphere()?;
    println!("{}", preset.name);
    println!("  Sphere point: {}", point);
    println!("  Radius: {:.4}", xi.radius());

    let rebuilt = map
        .from_sphere_default(&point, &masses)
        .with_context(|| format!("rebuilding {}", preset.name))?;
    println!("  Rebuilt triangle:");
    for line in rebuilt.to_string().lines() {
        println!("    {}", line);
    }

    for solution in uniformizing.zeta_to_z(point.zeta()) {
        println!(
            "  Branch {} {:?}: z = {:.4}",
            solution.branch.index(),
            solution.branch.color(),
            solution.point
        );
    }
    println!();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = TransformConfig::default();
    let map = ShapeSphereMap::with_config(&config);
    let uniformizing = UniformizingMap::with_config(&config);

    println!("Shape Sphere Tour");
    println!("=================");
    println!();

    for preset in presets() {
        if let Err(err) = tour(&preset, &map, &uniformizing) {
            log::warn!("{} skipped: {:#}", preset.name, err);
        }
    }
    Ok(())
}
