//! Color definitions for termquill themes.
//!
//! This module defines the [`ThemeColors`] struct which contains all color
//! values used in the termquill terminal UI. Colors are organized into two
//! categories: UI elements and semantic colors for transcript and messages.

use ratatui::style::Color;

/// Defines all colors used in a termquill theme.
///
/// # Examples
///
/// ```
/// use termquill::theme::colors::ThemeColors;
/// use ratatui::style::Color;
///
/// let green = ThemeColors::green();
/// assert_eq!(green.background, Color::Rgb(0, 0, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    // UI colors
    /// Main background color.
    pub background: Color,
    /// Main foreground/text color.
    pub foreground: Color,
    /// Dimmed text, used for the editor's empty-line markers and header.
    pub dim: Color,
    /// Color of the block cursor.
    pub cursor: Color,
    /// Background color for the status line.
    pub status_line_bg: Color,
    /// Foreground/text color for the status line.
    pub status_line_fg: Color,

    // Semantic colors
    /// Error output and error messages.
    pub error: Color,
    /// Warning messages.
    pub warning: Color,
    /// Informational messages.
    pub info: Color,
    /// Hints and completion listings.
    pub hint: Color,
    /// Echo of submitted commands.
    pub echo: Color,
    /// Section headings.
    pub header: Color,
}

impl ThemeColors {
    /// Green phosphor on black, the default.
    pub fn green() -> Self {
        Self {
            background: Color::Rgb(0, 0, 0),
            foreground: Color::Rgb(0, 255, 65),
            dim: Color::Rgb(0, 170, 43),
            cursor: Color::Rgb(0, 255, 65),
            status_line_bg: Color::Rgb(0, 170, 43),
            status_line_fg: Color::Rgb(0, 0, 0),

            error: Color::Rgb(255, 51, 51),
            warning: Color::Rgb(255, 204, 0),
            info: Color::Rgb(0, 204, 56),
            hint: Color::Rgb(0, 204, 56),
            echo: Color::Rgb(0, 170, 43),
            header: Color::Rgb(0, 255, 65),
        }
    }

    /// Amber phosphor on black.
    pub fn amber() -> Self {
        Self {
            background: Color::Rgb(0, 0, 0),
            foreground: Color::Rgb(255, 176, 0),
            dim: Color::Rgb(204, 136, 0),
            cursor: Color::Rgb(255, 176, 0),
            status_line_bg: Color::Rgb(204, 136, 0),
            status_line_fg: Color::Rgb(0, 0, 0),

            error: Color::Rgb(255, 51, 51),
            warning: Color::Rgb(255, 204, 0),
            info: Color::Rgb(255, 204, 0),
            hint: Color::Rgb(255, 204, 0),
            echo: Color::Rgb(204, 136, 0),
            header: Color::Rgb(255, 176, 0),
        }
    }

    /// White phosphor on near-black.
    pub fn white() -> Self {
        Self {
            background: Color::Rgb(10, 10, 10),
            foreground: Color::Rgb(240, 240, 240),
            dim: Color::Rgb(176, 176, 176),
            cursor: Color::Rgb(240, 240, 240),
            status_line_bg: Color::Rgb(176, 176, 176),
            status_line_fg: Color::Rgb(10, 10, 10),

            error: Color::Rgb(255, 85, 85),
            warning: Color::Rgb(255, 204, 0),
            info: Color::Rgb(208, 208, 208),
            hint: Color::Rgb(208, 208, 208),
            echo: Color::Rgb(176, 176, 176),
            header: Color::Rgb(240, 240, 240),
        }
    }

    /// Returns the default dark color scheme.
    ///
    /// Uses ANSI colors, so the actual RGB values displayed depend on the
    /// terminal's own palette.
    ///
    /// # Examples
    ///
    /// ```
    /// use termquill::theme::colors::ThemeColors;
    /// use ratatui::style::Color;
    ///
    /// let colors = ThemeColors::default_dark();
    /// assert_eq!(colors.background, Color::Reset);
    /// assert_eq!(colors.status_line_bg, Color::White);
    /// ```
    pub fn default_dark() -> Self {
        Self {
            background: Color::Reset, // Use terminal's default background
            foreground: Color::Gray,
            dim: Color::DarkGray,
            cursor: Color::LightBlue,
            status_line_bg: Color::White,
            status_line_fg: Color::Black,

            error: Color::Red,
            warning: Color::Yellow,
            info: Color::LightBlue,
            hint: Color::DarkGray,
            echo: Color::LightBlue,
            header: Color::White,
        }
    }

    /// Returns the Gruvbox Dark color scheme.
    pub fn gruvbox_dark() -> Self {
        Self {
            background: Color::Rgb(40, 40, 40),     // bg0
            foreground: Color::Rgb(235, 219, 178),  // fg1
            dim: Color::Rgb(146, 131, 116),         // gray
            cursor: Color::Rgb(131, 165, 152),      // bright blue
            status_line_bg: Color::Rgb(80, 73, 69), // bg2
            status_line_fg: Color::Rgb(235, 219, 178),

            error: Color::Rgb(251, 73, 52),    // bright red
            warning: Color::Rgb(250, 189, 47), // bright yellow
            info: Color::Rgb(131, 165, 152),   // bright blue
            hint: Color::Rgb(146, 131, 116),
            echo: Color::Rgb(184, 187, 38),    // bright green
            header: Color::Rgb(254, 128, 25),  // bright orange
        }
    }

    /// Returns the Nord color scheme.
    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),        // polar night darkest
            foreground: Color::Rgb(216, 222, 233),     // snow storm lightest
            dim: Color::Rgb(76, 86, 106),              // polar night gray
            cursor: Color::Rgb(136, 192, 208),         // frost cyan
            status_line_bg: Color::Rgb(59, 66, 82),    // polar night
            status_line_fg: Color::Rgb(216, 222, 233), // snow storm

            error: Color::Rgb(191, 97, 106),    // aurora red
            warning: Color::Rgb(235, 203, 139), // aurora yellow
            info: Color::Rgb(136, 192, 208),
            hint: Color::Rgb(129, 161, 193),    // frost blue
            echo: Color::Rgb(163, 190, 140),    // aurora green
            header: Color::Rgb(136, 192, 208),
        }
    }

    /// Returns the Dracula color scheme.
    ///
    /// A dark theme with vibrant purples and pinks.
    pub fn dracula() -> Self {
        Self {
            background: Color::Rgb(40, 42, 54),
            foreground: Color::Rgb(248, 248, 242),
            dim: Color::Rgb(98, 114, 164),          // comment
            cursor: Color::Rgb(189, 147, 249),      // purple
            status_line_bg: Color::Rgb(68, 71, 90), // current line
            status_line_fg: Color::Rgb(248, 248, 242),

            error: Color::Rgb(255, 85, 85),
            warning: Color::Rgb(255, 184, 108), // orange
            info: Color::Rgb(139, 233, 253),    // cyan
            hint: Color::Rgb(98, 114, 164),
            echo: Color::Rgb(80, 250, 123),     // green
            header: Color::Rgb(255, 121, 198),  // pink
        }
    }
}
