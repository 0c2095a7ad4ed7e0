use serde::{Deserialize, Serialize};
use std::fmt;

/// Display color of a species: either a named color understood by the
/// kernel's renderer or an explicit RGB triple with components in 0..=1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Named(String),
    Rgb { r: f64, g: f64, b: f64 },
}

impl Default for Color {
    fn default() -> Self {
        Color::Named("black".to_string())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(name) => f.write_str(name),
            Color::Rgb { r, g, b } => write!(f, "rgb({r}, {g}, {b})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_black() {
        assert_eq!(Color::default(), Color::Named("black".to_string()));
    }

    #[test]
    fn untagged_forms_deserialize() {
        let named: Color = serde_json::from_str("\"red\"").unwrap();
        assert_eq!(named, Color::Named("red".to_string()));
        let rgb: Color = serde_json::from_str(r#"{"r": 0.5, "g": 0.0, "b": 1.0}"#).unwrap();
        assert_eq!(rgb, Color::Rgb { r: 0.5, g: 0.0, b: 1.0 });
    }
}
