//! Colors and text styles for the booking wizard.

use ratatui::style::{Color, Modifier, Style};

/// Everything the wizard needs to color its widgets.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    pub fg: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    /// Steps before the active one
    pub done: Color,
    /// Steps after the active one
    pub pending: Color,

    pub border: Color,
    pub selection: Color,

    pub bold: Style,
    pub dim: Style,
}

/// Default theme: light text on the terminal background, blue accent.
pub fn booking_default() -> Theme {
    let fg = Color::Rgb(230, 230, 230);

    Theme {
        name: "booking".into(),

        fg,
        accent: Color::Rgb(64, 156, 255),
        success: Color::Rgb(80, 200, 120),
        warning: Color::Rgb(255, 190, 40),
        error: Color::Rgb(240, 80, 80),

        done: Color::Rgb(80, 200, 120),
        pending: Color::Rgb(120, 120, 120),

        border: Color::Rgb(70, 70, 70),
        selection: Color::Rgb(30, 60, 110),

        bold: Style::default().fg(fg).add_modifier(Modifier::BOLD),
        dim: Style::default().fg(fg).add_modifier(Modifier::DIM),
    }
}

impl Default for Theme {
    fn default() -> Self {
        booking_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_named() {
        assert_eq!(Theme::default().name, "booking");
    }

    #[test]
    fn bold_style_uses_foreground() {
        let theme = booking_default();
        assert_eq!(theme.bold.fg, Some(theme.fg));
        assert!(theme.bold.add_modifier.contains(Modifier::BOLD));
    }
}
