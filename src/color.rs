use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues,
/// starting at pure red.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 1.0, 0.5);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0).round() as u8,
                (rgb.green * 255.0).round() as u8,
                (rgb.blue * 255.0).round() as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Figure style: fixed colours and marker sizes
// ---------------------------------------------------------------------------

/// Diameter of the origin marker, in points.
pub const ORIGIN_MARKER_SIZE: f32 = 8.0;

/// Diameter of the per-vertex markers, in points.
pub const VERTEX_MARKER_SIZE: f32 = 6.0;

/// Opacity of one triangle outline; overlapping rows accumulate.
pub const EDGE_ALPHA: f32 = 0.1;

/// Stroke width of one triangle outline, in points.
pub const EDGE_WIDTH: f32 = 1.5;

#[derive(Debug, Clone)]
pub struct FigureStyle {
    pub edge: Color32,
    /// One colour per body, in column order.
    pub vertices: [Color32; 3],
    pub origin: Color32,
}

impl Default for FigureStyle {
    fn default() -> Self {
        let palette = generate_palette(3);
        FigureStyle {
            edge: Color32::from_black_alpha((EDGE_ALPHA * 255.0).round() as u8),
            vertices: [palette[0], palette[1], palette[2]],
            origin: Color32::BLACK,
        }
    }
}

impl FigureStyle {
    /// Legend entries (body label → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, c)| (body_label(i), *c))
            .collect()
    }
}

/// Display name of the body at vertex `index`.
pub fn body_label(index: usize) -> String {
    format!("body {}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_colour_palette_is_red_green_blue() {
        assert_eq!(
            generate_palette(3),
            vec![
                Color32::from_rgb(255, 0, 0),
                Color32::from_rgb(0, 255, 0),
                Color32::from_rgb(0, 0, 255),
            ]
        );
    }

    #[test]
    fn empty_palette() {
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn edge_colour_is_black_at_one_tenth_opacity() {
        let style = FigureStyle::default();
        assert_eq!(style.edge.a(), 26);
        assert_eq!((style.edge.r(), style.edge.g(), style.edge.b()), (0, 0, 0));
    }

    #[test]
    fn edge_width_matches_default_line_width() {
        assert_eq!(EDGE_WIDTH, 1.5);
    }

    #[test]
    fn origin_marker_is_size_eight() {
        assert_eq!(ORIGIN_MARKER_SIZE, 8.0);
        assert_eq!(FigureStyle::default().origin, Color32::BLACK);
    }

    #[test]
    fn legend_names_bodies_in_column_order() {
        let style = FigureStyle::default();
        let names: Vec<String> = style.legend_entries().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["body 1", "body 2", "body 3"]);
    }
}
