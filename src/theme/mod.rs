//! Theme system for termquill.
//!
//! This module provides the theme infrastructure, including:
//! - Color definitions ([`colors`] module)
//! - Theme data structure ([`Theme`])
//! - Built-in theme access ([`get_builtin_theme`])
//!
//! # Built-in Themes
//!
//! - `"green"`: Green phosphor on black (default)
//! - `"amber"`: Amber phosphor on black
//! - `"white"`: White phosphor on near-black
//! - `"default-dark"`: ANSI colors following the terminal's palette
//! - `"gruvbox-dark"`: Retro groove color scheme with warm, earthy tones
//! - `"nord"`: Arctic, north-bluish color palette
//! - `"dracula"`: Dark theme with vibrant purples and pinks
//!
//! # Examples
//!
//! ```
//! use termquill::theme::get_builtin_theme;
//!
//! let theme = get_builtin_theme("amber").unwrap();
//! assert_eq!(theme.display_name, "Amber");
//! ```

pub mod colors;

use colors::ThemeColors;

/// Theme used when none is configured.
pub const DEFAULT_THEME: &str = "green";

/// A color theme for the termquill terminal UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// The name of the theme (e.g., "green"), as typed in `theme set`.
    pub name: String,
    /// Human readable name shown by `theme list`.
    pub display_name: String,
    /// The color definitions for this theme.
    pub colors: ThemeColors,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(DEFAULT_THEME, "Green Phosphor", ThemeColors::green())
    }
}

impl Theme {
    fn new(name: &str, display_name: &str, colors: ThemeColors) -> Self {
        Self {
            name: name.to_string(),
            display_name: display_name.to_string(),
            colors,
        }
    }
}

/// Returns a built-in theme by name.
///
/// Names are matched exactly; see the module docs for the list.
///
/// # Examples
///
/// ```
/// use termquill::theme::get_builtin_theme;
///
/// assert!(get_builtin_theme("green").is_some());
/// assert!(get_builtin_theme("nonexistent").is_none());
/// ```
pub fn get_builtin_theme(name: &str) -> Option<Theme> {
    let theme = match name {
        "green" => Theme::default(),
        "amber" => Theme::new(name, "Amber", ThemeColors::amber()),
        "white" => Theme::new(name, "White Phosphor", ThemeColors::white()),
        "default-dark" => Theme::new(name, "Default Dark", ThemeColors::default_dark()),
        "gruvbox-dark" => Theme::new(name, "Gruvbox Dark", ThemeColors::gruvbox_dark()),
        "nord" => Theme::new(name, "Nord", ThemeColors::nord()),
        "dracula" => Theme::new(name, "Dracula", ThemeColors::dracula()),
        _ => return None,
    };
    Some(theme)
}

/// Returns the names of all built-in themes, phosphor themes first.
///
/// # Examples
///
/// ```
/// use termquill::theme::list_builtin_themes;
///
/// let themes = list_builtin_themes();
/// assert_eq!(themes[0], "green");
/// assert!(themes.contains(&"nord"));
/// ```
pub fn list_builtin_themes() -> Vec<&'static str> {
    vec![
        "green",
        "amber",
        "white",
        "default-dark",
        "gruvbox-dark",
        "nord",
        "dracula",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_theme_resolves() {
        for name in list_builtin_themes() {
            let theme = get_builtin_theme(name).unwrap();
            assert_eq!(theme.name, name);
            assert!(!theme.display_name.is_empty());
        }
    }

    #[test]
    fn test_default_theme_is_green() {
        assert_eq!(Theme::default().name, DEFAULT_THEME);
        assert_eq!(Theme::default().colors, ThemeColors::green());
    }
}
