//! Styling strategy for the route table.
//!
//! Styling is a pure text-decoration layer with two interchangeable
//! implementations: [`AnsiStyler`] wraps cell text in 24-bit ANSI escape
//! codes from a [`Theme`], [`PlainStyler`] passes text through untouched.
//! The renderer is handed one [`Styler`] at the start of the pass and never
//! branches on color support itself.

#![allow(clippy::unreadable_literal)]

use std::fmt;
use std::str::FromStr;

const ANSI_RESET: &str = "\x1b[0m";
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_ITALIC: &str = "\x1b[3m";

/// A color in RGB format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Color {
    /// Create a color from a hex value (0xRRGGBB).
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Convert to ANSI 24-bit foreground escape code.
    #[must_use]
    pub fn to_ansi_fg(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }
}

/// Color palette for the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Header cell color (bold is applied on top).
    pub header: Color,
    /// Method token color (informational).
    pub method: Color,
    /// Path literal color (success).
    pub path: Color,
    /// Path parameter segment color (highlight).
    pub path_param: Color,
}

impl Theme {
    /// Default palette for dark terminal backgrounds.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            header: Color::from_hex(0xFFFFFF),     // White
            method: Color::from_hex(0x00BCD4),     // Cyan
            path: Color::from_hex(0x4CAF50),       // Green
            path_param: Color::from_hex(0xFFC107), // Amber
        }
    }

    /// Palette with darker, saturated colors for light backgrounds.
    #[must_use]
    pub fn light() -> Self {
        Self {
            header: Color::from_hex(0x212121),     // Near black
            method: Color::from_hex(0x00838F),     // Dark cyan
            path: Color::from_hex(0x2E7D32),       // Dark green
            path_param: Color::from_hex(0xE65100), // Dark orange
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dark" | "default" => Ok(Self::dark()),
            "light" => Ok(Self::light()),
            _ => Err(ThemeParseError(s.to_string())),
        }
    }
}

/// Error parsing a theme name.
#[derive(Debug, Clone)]
pub struct ThemeParseError(String);

impl fmt::Display for ThemeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme '{}', available: dark, light", self.0)
    }
}

impl std::error::Error for ThemeParseError {}

/// Text-decoration strategy applied to table cells.
pub trait Styler {
    /// Paint a header cell.
    fn header(&self, text: &str) -> String;
    /// Paint one method token.
    fn method(&self, text: &str) -> String;
    /// Paint a literal path fragment.
    fn path(&self, text: &str) -> String;
    /// Paint a path parameter segment.
    fn path_param(&self, text: &str) -> String;
    /// Paint a description cell.
    fn description(&self, text: &str) -> String;
}

/// No-op styling: every paint method returns its input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn method(&self, text: &str) -> String {
        text.to_string()
    }

    fn path(&self, text: &str) -> String {
        text.to_string()
    }

    fn path_param(&self, text: &str) -> String {
        text.to_string()
    }

    fn description(&self, text: &str) -> String {
        text.to_string()
    }
}

/// ANSI styling from a [`Theme`].
#[derive(Debug, Clone)]
pub struct AnsiStyler {
    theme: Theme,
}

impl AnsiStyler {
    /// Create a styler over a theme.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl Styler for AnsiStyler {
    fn header(&self, text: &str) -> String {
        format!(
            "{ANSI_BOLD}{}{text}{ANSI_RESET}",
            self.theme.header.to_ansi_fg()
        )
    }

    fn method(&self, text: &str) -> String {
        format!("{}{text}{ANSI_RESET}", self.theme.method.to_ansi_fg())
    }

    fn path(&self, text: &str) -> String {
        format!(
            "{ANSI_BOLD}{}{text}{ANSI_RESET}",
            self.theme.path.to_ansi_fg()
        )
    }

    fn path_param(&self, text: &str) -> String {
        format!(
            "{ANSI_BOLD}{}{text}{ANSI_RESET}",
            self.theme.path_param.to_ansi_fg()
        )
    }

    fn description(&self, text: &str) -> String {
        format!("{ANSI_ITALIC}{text}{ANSI_RESET}")
    }
}
