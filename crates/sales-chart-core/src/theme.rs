// File: crates/sales-chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    /// Axis reference lines: light, low contrast.
    pub axis: Color,
    /// Gridlines: closer to the background than `axis`.
    pub grid: Color,
    /// Accent stroke of the data polyline.
    pub line: Color,
    pub marker: Color,
    pub label: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::rgb(255, 255, 255),
            axis: Color::rgb(0xcc, 0xcc, 0xcc),
            grid: Color::rgb(0xee, 0xee, 0xee),
            line: Color::rgb(0x00, 0x7b, 0xff),
            marker: Color::rgb(0x00, 0x7b, 0xff),
            label: Color::rgb(0x66, 0x66, 0x66),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            axis: Color::rgb(90, 90, 100),
            grid: Color::rgb(40, 40, 45),
            line: Color::rgb(64, 160, 255),
            marker: Color::rgb(64, 160, 255),
            label: Color::rgb(210, 210, 220),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            background: Color::rgb(0x00, 0x00, 0x00),
            axis: Color::rgb(0xaa, 0xaa, 0xaa),
            grid: Color::rgb(0x33, 0x33, 0x33),
            line: Color::rgb(0x00, 0xff, 0xff),
            marker: Color::rgb(0xff, 0xff, 0x00),
            label: Color::rgb(0xff, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_sits_closer_to_background_than_axis() {
        for t in presets() {
            let bg = t.background.luma();
            let grid = (t.grid.luma() - bg).abs();
            let axis = (t.axis.luma() - bg).abs();
            assert!(grid < axis, "theme {}", t.name);
        }
    }

    #[test]
    fn find_is_case_insensitive_with_fallback() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("nope").name, "light");
    }
}
