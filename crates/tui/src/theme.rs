//! Theme system for customizable colors

use booknest_config::ThemeChoice;
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeType {
    /// Default dark theme
    Dark,
    /// Light theme
    Light,
    /// High contrast theme
    HighContrast,
}

impl Default for ThemeType {
    fn default() -> Self {
        Self::Dark
    }
}

impl ThemeType {
    /// Returns all available themes
    pub fn all() -> Vec<ThemeType> {
        vec![ThemeType::Dark, ThemeType::Light, ThemeType::HighContrast]
    }

    /// Returns the theme name
    pub fn name(&self) -> &str {
        match self {
            ThemeType::Dark => "Dark",
            ThemeType::Light => "Light",
            ThemeType::HighContrast => "High Contrast",
        }
    }

    /// Returns the next theme in cycle order
    pub fn next(&self) -> ThemeType {
        match self {
            ThemeType::Dark => ThemeType::Light,
            ThemeType::Light => ThemeType::HighContrast,
            ThemeType::HighContrast => ThemeType::Dark,
        }
    }
}

impl From<ThemeChoice> for ThemeType {
    fn from(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Dark => ThemeType::Dark,
            ThemeChoice::Light => ThemeType::Light,
            ThemeChoice::HighContrast => ThemeType::HighContrast,
        }
    }
}

/// Color theme
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme type
    pub theme_type: ThemeType,
    /// Primary text color
    pub text: Color,
    /// Secondary text color
    pub text_secondary: Color,
    /// Background color
    pub background: Color,
    /// Highlight/selection color
    pub highlight: Color,
    /// Accent color
    pub accent: Color,
    /// Success color (green)
    pub success: Color,
    /// Warning color (yellow)
    pub warning: Color,
    /// Error color (red)
    pub error: Color,
    /// Border color
    pub border: Color,
    /// Finished-status indicator
    pub finished: Color,
    /// Reading-status indicator
    pub reading: Color,
}

impl Theme {
    /// Creates a new theme
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::HighContrast => Self::high_contrast(),
        }
    }

    /// Dark theme (default)
    fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            text: Color::White,
            text_secondary: Color::Gray,
            background: Color::Black,
            highlight: Color::Yellow,
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            border: Color::Gray,
            finished: Color::Green,
            reading: Color::Cyan,
        }
    }

    /// Light theme
    fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            text: Color::Black,
            text_secondary: Color::DarkGray,
            background: Color::White,
            highlight: Color::Blue,
            accent: Color::Magenta,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            border: Color::DarkGray,
            finished: Color::Green,
            reading: Color::Blue,
        }
    }

    /// High contrast theme
    fn high_contrast() -> Self {
        Self {
            theme_type: ThemeType::HighContrast,
            text: Color::White,
            text_secondary: Color::LightYellow,
            background: Color::Black,
            highlight: Color::LightYellow,
            accent: Color::LightCyan,
            success: Color::LightGreen,
            warning: Color::LightYellow,
            error: Color::LightRed,
            border: Color::White,
            finished: Color::LightGreen,
            reading: Color::LightCyan,
        }
    }

    /// Returns base text style
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Returns secondary text style
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Returns highlighted style
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Returns accent style
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Returns success style
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Returns error style
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Returns border color
    pub fn border_color(&self) -> Color {
        self.border
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::new(ThemeType::Dark);
        assert_eq!(theme.theme_type, ThemeType::Dark);
    }

    #[test]
    fn test_all_themes() {
        for theme_type in ThemeType::all() {
            let theme = Theme::new(theme_type);
            assert_eq!(theme.theme_type, theme_type);
        }
    }

    #[test]
    fn test_theme_cycle_covers_all() {
        let mut seen = vec![ThemeType::Dark];
        let mut current = ThemeType::Dark;
        loop {
            current = current.next();
            if current == ThemeType::Dark {
                break;
            }
            seen.push(current);
        }
        assert_eq!(seen.len(), ThemeType::all().len());
    }

    #[test]
    fn test_theme_from_config_choice() {
        assert_eq!(ThemeType::from(ThemeChoice::Light), ThemeType::Light);
        assert_eq!(
            ThemeType::from(ThemeChoice::HighContrast),
            ThemeType::HighContrast
        );
    }

    #[test]
    fn test_theme_names() {
        assert_eq!(ThemeType::Dark.name(), "Dark");
        assert_eq!(ThemeType::HighContrast.name(), "High Contrast");
    }
}
