use ratatui::style::Color;

use crate::schedule::color_for;

const DUTY_SATURATION: f64 = 0.70;
const DUTY_LIGHTNESS: f64 = 0.40;
const DUTY_TINT_OPACITY: f64 = 0.20;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub title: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub today: Color,
    pub rotation_start: Color,
    pub weekday_header: Color,
    pub blank_cell: Color,
    pub status_bar: Color,
    pub help_title: Color,
    pub help_section: Color,
    pub command_mode: Color,
    pub error: Color,
    pub success: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            title: Color::Cyan,
            selected_bg: Color::Blue,
            selected_fg: Color::White,
            today: Color::Blue,
            rotation_start: Color::Green,
            weekday_header: Color::Yellow,
            blank_cell: Color::DarkGray,
            status_bar: Color::White,
            help_title: Color::Cyan,
            help_section: Color::Yellow,
            command_mode: Color::White,
            error: Color::Red,
            success: Color::Green,
        }
    }

    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            title: Color::Rgb(251, 184, 108),
            selected_bg: Color::Rgb(60, 56, 54),
            selected_fg: Color::Rgb(235, 219, 178),
            today: Color::Rgb(131, 165, 152),
            rotation_start: Color::Rgb(184, 187, 38),
            weekday_header: Color::Rgb(254, 128, 25),
            blank_cell: Color::Rgb(146, 131, 116),
            status_bar: Color::Rgb(235, 219, 178),
            help_title: Color::Rgb(251, 184, 108),
            help_section: Color::Rgb(254, 128, 25),
            command_mode: Color::Rgb(235, 219, 178),
            error: Color::Rgb(251, 73, 52),
            success: Color::Rgb(184, 187, 38),
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            title: Color::Rgb(136, 192, 208),
            selected_bg: Color::Rgb(59, 66, 82),
            selected_fg: Color::Rgb(236, 239, 244),
            today: Color::Rgb(129, 161, 193),
            rotation_start: Color::Rgb(163, 190, 140),
            weekday_header: Color::Rgb(235, 203, 139),
            blank_cell: Color::Rgb(76, 86, 106),
            status_bar: Color::Rgb(216, 222, 233),
            help_title: Color::Rgb(136, 192, 208),
            help_section: Color::Rgb(235, 203, 139),
            command_mode: Color::Rgb(216, 222, 233),
            error: Color::Rgb(191, 97, 106),
            success: Color::Rgb(163, 190, 140),
        }
    }

    pub fn get_by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "gruvbox" => Self::gruvbox(),
            "nord" => Self::nord(),
            _ => Self::default_theme(),
        }
    }

    pub fn available_themes() -> Vec<&'static str> {
        vec!["default", "gruvbox", "nord"]
    }

    /// Foreground color for a participant, stable across sessions.
    pub fn person_color(name: &str) -> Color {
        let (r, g, b) = hsl_to_rgb(color_for(name) as f64, DUTY_SATURATION, DUTY_LIGHTNESS);
        Color::Rgb(r, g, b)
    }

    /// Faint background for a participant, the person color at low opacity over black.
    pub fn person_tint(name: &str) -> Color {
        let (r, g, b) = hsl_to_rgb(color_for(name) as f64, DUTY_SATURATION, DUTY_LIGHTNESS);
        let fade = |c: u8| (c as f64 * DUTY_TINT_OPACITY).round() as u8;
        Color::Rgb(fade(r), fade(g), fade(b))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = (hue % 360.0) / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    let to_byte = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (to_byte(r), to_byte(g), to_byte(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_theme_falls_back_to_default() {
        assert_eq!(Theme::get_by_name("solarized").name, "default");
    }

    #[test]
    fn theme_lookup_is_case_insensitive() {
        assert_eq!(Theme::get_by_name("Nord").name, "nord");
    }

    #[test]
    fn every_listed_theme_resolves_to_itself() {
        for name in Theme::available_themes() {
            assert_eq!(Theme::get_by_name(name).name, name);
        }
    }

    #[test]
    fn hsl_primary_hues() {
        assert_eq!(hsl_to_rgb(0.0, 0.7, 0.4), (173, 31, 31));
        assert_eq!(hsl_to_rgb(120.0, 0.7, 0.4), (31, 173, 31));
        assert_eq!(hsl_to_rgb(240.0, 0.7, 0.4), (31, 31, 173));
    }

    #[test]
    fn person_color_is_stable() {
        assert_eq!(Theme::person_color("Marco"), Theme::person_color("Marco"));
    }

    #[test]
    fn person_tint_is_darker_than_color() {
        let (Color::Rgb(r, g, b), Color::Rgb(tr, tg, tb)) =
            (Theme::person_color("Sandy"), Theme::person_tint("Sandy"))
        else {
            panic!("expected rgb colors");
        };
        assert!(tr <= r && tg <= g && tb <= b);
    }
}
