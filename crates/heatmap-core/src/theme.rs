// File: crates/heatmap-core/src/theme.rs
// Summary: Light/Dark theming for the page chrome around the heat map (cells keep their bucket colors).

use crate::palette::Rgb;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgb,
    pub axis_line: Rgb,
    pub axis_label: Rgb,
    pub tick: Rgb,
    pub legend_label: Rgb,
    pub tooltip_background: Rgb,
    pub tooltip_text: Rgb,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgb::new(255, 255, 255),
            axis_line: Rgb::new(0, 0, 0),
            axis_label: Rgb::new(20, 20, 30),
            tick: Rgb::new(0, 0, 0),
            legend_label: Rgb::new(20, 20, 30),
            tooltip_background: Rgb::new(0xf4, 0xf4, 0xf4),
            tooltip_text: Rgb::new(20, 20, 30),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgb::new(18, 18, 20),
            axis_line: Rgb::new(180, 180, 190),
            axis_label: Rgb::new(235, 235, 245),
            tick: Rgb::new(150, 150, 160),
            legend_label: Rgb::new(235, 235, 245),
            tooltip_background: Rgb::new(40, 40, 45),
            tooltip_text: Rgb::new(235, 235, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
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
    fn lookup_is_case_insensitive_with_fallback() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("sepia").name, "light");
    }
}
