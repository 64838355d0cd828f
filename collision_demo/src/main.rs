//! Collision scan demo
//!
//! Scans a shape set for colliding pairs and prints one line per collision.
//!
//! ```text
//! collision_demo                 # built-in sample set
//! collision_demo shapes.toml     # shapes loaded from TOML or RON
//! ```

use shape_collision::foundation::logging;
use shape_collision::prelude::*;

fn load_shapes() -> Result<ShapeSet, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading shape set from {}", path);
            ShapeSet::load_from_file(&path)
        }
        None => {
            log::info!("No shape file given, using the sample set");
            Ok(ShapeSet::sample())
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_level(log::LevelFilter::Info);

    let shape_set = load_shapes()?;

    let mut scanner = ShapeCollisionScanner::with_shapes(shape_set.shapes);
    scanner.debug_enabled = true;

    let summary = scanner.detect_collisions();
    if summary.is_clear() {
        log::info!("No collisions among {} shapes", scanner.shape_count());
    }

    for report in summary.reports() {
        println!("{}", report);
    }

    Ok(())
}
