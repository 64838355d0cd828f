//! Serializable shape lists
//!
//! A shape set is stored as TOML or RON through the [`Config`] trait:
//!
//! ```toml
//! [[shapes]]
//! x = 0.0
//! y = 0.0
//! width = 5.0
//! height = 5.0
//!
//! [[shapes]]
//! x = 2.0
//! y = 2.0
//! width = 2.0
//! height = 2.0
//! kind = "circle"
//! ```
//!
//! `z` and `depth` default to 0 and `kind` defaults to `rectangle`.

use serde::{Serialize, Deserialize};

use crate::config::Config;
use crate::physics::Shape;

/// An ordered list of shapes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeSet {
    /// Shapes in scan order
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

impl Config for ShapeSet {}

impl ShapeSet {
    /// Wrap an existing list
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    /// Reference set: three rectangles, two circles, two cuboids
    pub fn sample() -> Self {
        Self::new(vec![
            Shape::rectangle(0.0, 0.0, 5.0, 5.0),
            Shape::rectangle(4.0, 4.0, 5.0, 5.0),
            Shape::rectangle(10.0, 10.0, 3.0, 3.0),
            Shape::circle(2.0, 2.0, 2.0, 2.0),
            Shape::circle(3.0, 3.0, 2.0, 2.0),
            Shape::cuboid(1.0, 1.0, 1.0, 4.0, 4.0, 3.0),
            Shape::cuboid(2.0, 2.0, 2.0, 4.0, 4.0, 3.0),
        ])
    }

    /// Number of shapes
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// True when the set holds no shapes
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, ConfigFormat};
    use crate::physics::ShapeKind;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("shape_collision_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_sample_contents() {
        let set = ShapeSet::sample();
        assert_eq!(set.len(), 7);
        assert_eq!(set.shapes.iter().filter(|s| s.kind == ShapeKind::Circle).count(), 2);
        assert_eq!(set.shapes.iter().filter(|s| s.is_volumetric()).count(), 2);
    }

    #[test]
    fn test_toml_defaults() {
        let text = r#"
            [[shapes]]
            x = 0
            y = 0
            width = 5
            height = 5

            [[shapes]]
            x = 2.0
            y = 2.0
            width = 2.0
            height = 2.0
            kind = "circle"

            [[shapes]]
            x = 1.0
            y = 1.0
            z = 1.0
            width = 4.0
            height = 4.0
            depth = 3.0
        "#;

        let set = ShapeSet::from_str_as(text, ConfigFormat::Toml).unwrap();
        assert_eq!(
            set.shapes,
            vec![
                Shape::rectangle(0.0, 0.0, 5.0, 5.0),
                Shape::circle(2.0, 2.0, 2.0, 2.0),
                Shape::cuboid(1.0, 1.0, 1.0, 4.0, 4.0, 3.0),
            ]
        );
    }

    #[test]
    fn test_ron_parse() {
        let text = "(shapes: [(x: 3.0, y: 3.0, width: 2.0, height: 2.0, kind: circle)])";
        let set = ShapeSet::from_str_as(text, ConfigFormat::Ron).unwrap();
        assert_eq!(set.shapes, vec![Shape::circle(3.0, 3.0, 2.0, 2.0)]);
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let text = r#"
            [[shapes]]
            x = 0.0
            y = 0.0
            width = 1.0
            height = 1.0
            kind = "triangle"
        "#;
        let err = ShapeSet::from_str_as(text, ConfigFormat::Toml).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_empty_document() {
        let set = ShapeSet::from_str_as("", ConfigFormat::Toml).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_file_round_trip() {
        let sample = ShapeSet::sample();

        for name in ["sample.toml", "sample.ron"] {
            let path = temp_path(name);
            sample.save_to_file(&path).unwrap();
            let loaded = ShapeSet::load_from_file(&path).unwrap();
            let _ = std::fs::remove_file(&path);
            assert_eq!(loaded, sample, "{name}");
        }
    }

    #[test]
    fn test_missing_file() {
        let err = ShapeSet::load_from_file(temp_path("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_save_unsupported_extension() {
        let err = ShapeSet::sample().save_to_file(temp_path("sample.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }
}
