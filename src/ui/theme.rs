use crate::models::RiskLevel;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    // Base colors
    pub const FG: Color = Color::White;
    pub const DIM: Color = Color::DarkGray;
    pub const ACCENT: Color = Color::Green;
    pub const HIGHLIGHT: Color = Color::Cyan;

    // Status colors
    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;

    // Weather colors
    pub const TEMP_COOL: Color = Color::Cyan;
    pub const TEMP_MILD: Color = Color::Green;
    pub const TEMP_WARM: Color = Color::Yellow;
    pub const TEMP_HOT: Color = Color::Red;
    pub const WIND_CALM: Color = Color::Green;
    pub const WIND_BREEZY: Color = Color::Yellow;
    pub const WIND_STRONG: Color = Color::Red;

    // Styles
    pub fn title() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn normal() -> Style {
        Style::default().fg(Self::FG)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn highlight() -> Style {
        Style::default()
            .fg(Self::HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    pub fn warning() -> Style {
        Style::default().fg(Self::WARNING)
    }

    /// Thresholds in °C, tuned for Nigerian lowland and savanna climates
    pub fn temp_color(temp_c: f64) -> Color {
        if temp_c < 18.0 {
            Self::TEMP_COOL
        } else if temp_c < 26.0 {
            Self::TEMP_MILD
        } else if temp_c < 32.0 {
            Self::TEMP_WARM
        } else {
            Self::TEMP_HOT
        }
    }

    pub fn risk_style(percent: f64) -> Style {
        Style::default().fg(RiskLevel::from_percent(percent).color())
    }

    pub fn nav_key() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_label() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::DIM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_color_bands() {
        assert_eq!(Theme::temp_color(15.0), Theme::TEMP_COOL);
        assert_eq!(Theme::temp_color(22.0), Theme::TEMP_MILD);
        assert_eq!(Theme::temp_color(28.0), Theme::TEMP_WARM);
        assert_eq!(Theme::temp_color(38.0), Theme::TEMP_HOT);
    }

    #[test]
    fn risk_style_follows_level() {
        assert_eq!(Theme::risk_style(10.0).fg, Some(Color::Green));
        assert_eq!(Theme::risk_style(45.0).fg, Some(Color::Yellow));
        assert_eq!(Theme::risk_style(75.0).fg, Some(Color::Red));
    }
}
