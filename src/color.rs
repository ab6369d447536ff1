use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.6);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Department → colour
// ---------------------------------------------------------------------------

/// Assigns each department a distinct hue for list and detail badges.
#[derive(Debug, Clone)]
pub struct DepartmentColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl Default for DepartmentColors {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl DepartmentColors {
    /// `departments` must already be distinct; order decides hue order.
    pub fn new(departments: &[String]) -> Self {
        let palette = generate_palette(departments.len());
        let mapping = departments
            .iter()
            .cloned()
            .zip(palette)
            .collect();

        DepartmentColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    pub fn color_for(&self, department: &str) -> Color32 {
        self.mapping
            .get(department)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colours_are_distinct() {
        let palette = generate_palette(6);
        assert_eq!(palette.len(), 6);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn unknown_department_is_grey() {
        let colors = DepartmentColors::new(&["Math".to_string(), "CS".to_string()]);
        assert_ne!(colors.color_for("Math"), colors.color_for("CS"));
        assert_eq!(colors.color_for("History"), Color32::GRAY);
    }
}
