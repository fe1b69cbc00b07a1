//! Semantic color palette for terminal output.

use owo_colors::{OwoColorize, Style};

/// Green bold.
pub fn success_style() -> Style {
    Style::new().green().bold()
}

/// Red bold.
pub fn error_style() -> Style {
    Style::new().red().bold()
}

/// Yellow.
pub fn warning_style() -> Style {
    Style::new().yellow()
}

/// Dimmed, for secondary text.
pub fn muted_style() -> Style {
    Style::new().dimmed()
}

/// Bold.
pub fn header_style() -> Style {
    Style::new().bold()
}

/// Trait extension to apply semantic styles.
///
/// Every method falls back to plain text when colors are disabled.
pub trait SemanticStyle: Sized {
    fn success(&self) -> String;
    fn error(&self) -> String;
    fn warning(&self) -> String;
    fn muted(&self) -> String;
    fn header(&self) -> String;
}

fn styled<T: std::fmt::Display>(value: &T, style: Style) -> String {
    if super::no_color() {
        value.to_string()
    } else {
        value.style(style).to_string()
    }
}

impl<T: std::fmt::Display> SemanticStyle for T {
    fn success(&self) -> String {
        styled(self, success_style())
    }

    fn error(&self) -> String {
        styled(self, error_style())
    }

    fn warning(&self) -> String {
        styled(self, warning_style())
    }

    fn muted(&self) -> String {
        styled(self, muted_style())
    }

    fn header(&self) -> String {
        styled(self, header_style())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_when_colors_disabled() {
        super::super::set_no_color(true);
        assert_eq!("ok".success(), "ok");
        assert_eq!("bad".error(), "bad");
        assert_eq!(42.muted(), "42");
    }
}
