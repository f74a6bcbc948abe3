use std::fmt;
use std::str::FromStr;

/// A token that is not in the accepted set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{value}` is not one of: {}", .expected.join(", "))]
pub struct UnknownToken {
    pub value: String,
    pub expected: &'static [&'static str],
}

impl UnknownToken {
    pub(crate) fn new(value: &str, expected: &'static [&'static str]) -> Self {
        Self {
            value: value.to_owned(),
            expected,
        }
    }
}

/// Palette color names recognized by the theme engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeColor {
    Red,
    Orange,
    Amber,
    Yellow,
    Lime,
    Green,
    Emerald,
    Teal,
    Cyan,
    Sky,
    Blue,
    Indigo,
    Violet,
    Purple,
    Fuchsia,
    Pink,
    Rose,
    Slate,
    Gray,
    Zinc,
    Neutral,
    Stone,
}

const THEME_COLORS: &[&str] = &[
    "red", "orange", "amber", "yellow", "lime", "green", "emerald", "teal", "cyan", "sky", "blue",
    "indigo", "violet", "purple", "fuchsia", "pink", "rose", "slate", "gray", "zinc", "neutral",
    "stone",
];

impl ThemeColor {
    pub const ALL: [ThemeColor; 22] = [
        Self::Red,
        Self::Orange,
        Self::Amber,
        Self::Yellow,
        Self::Lime,
        Self::Green,
        Self::Emerald,
        Self::Teal,
        Self::Cyan,
        Self::Sky,
        Self::Blue,
        Self::Indigo,
        Self::Violet,
        Self::Purple,
        Self::Fuchsia,
        Self::Pink,
        Self::Rose,
        Self::Slate,
        Self::Gray,
        Self::Zinc,
        Self::Neutral,
        Self::Stone,
    ];

    pub fn variants() -> &'static [&'static str] {
        THEME_COLORS
    }

    pub fn as_str(self) -> &'static str {
        // `ALL` and `THEME_COLORS` share an order
        THEME_COLORS[self as usize]
    }
}

impl FromStr for ThemeColor {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        THEME_COLORS
            .iter()
            .position(|c| *c == s)
            .map(|i| Self::ALL[i])
            .ok_or_else(|| UnknownToken::new(s, THEME_COLORS))
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The gray scales the theme engine accepts for neutral surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NeutralColor {
    Slate,
    Gray,
    Zinc,
    Neutral,
    Stone,
}

const NEUTRAL_COLORS: &[&str] = &["slate", "gray", "zinc", "neutral", "stone"];

impl NeutralColor {
    pub const ALL: [NeutralColor; 5] = [
        Self::Slate,
        Self::Gray,
        Self::Zinc,
        Self::Neutral,
        Self::Stone,
    ];

    pub fn variants() -> &'static [&'static str] {
        NEUTRAL_COLORS
    }

    pub fn as_str(self) -> &'static str {
        NEUTRAL_COLORS[self as usize]
    }
}

impl FromStr for NeutralColor {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NEUTRAL_COLORS
            .iter()
            .position(|c| *c == s)
            .map(|i| Self::ALL[i])
            .ok_or_else(|| UnknownToken::new(s, NEUTRAL_COLORS))
    }
}

impl fmt::Display for NeutralColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<NeutralColor> for ThemeColor {
    fn from(other: NeutralColor) -> Self {
        match other {
            NeutralColor::Slate => Self::Slate,
            NeutralColor::Gray => Self::Gray,
            NeutralColor::Zinc => Self::Zinc,
            NeutralColor::Neutral => Self::Neutral,
            NeutralColor::Stone => Self::Stone,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn theme_color_names_line_up() {
        for (color, name) in ThemeColor::ALL.iter().zip(ThemeColor::variants()) {
            assert_eq!(color.as_str(), *name);
            assert_eq!(name.parse::<ThemeColor>().unwrap(), *color);
        }
    }

    #[test]
    fn neutral_color_names_line_up() {
        for (color, name) in NeutralColor::ALL.iter().zip(NeutralColor::variants()) {
            assert_eq!(color.as_str(), *name);
            assert_eq!(name.parse::<NeutralColor>().unwrap(), *color);
        }
    }

    #[test]
    fn neutral_colors_are_theme_colors() {
        for color in NeutralColor::ALL {
            assert_eq!(ThemeColor::from(color).as_str(), color.as_str());
        }
    }

    #[test]
    fn unknown_color_lists_choices() {
        let err = "blurple".parse::<ThemeColor>().unwrap_err();
        assert_eq!(err.value, "blurple");
        assert!(err.to_string().starts_with("`blurple` is not one of: red, orange"));
    }

    #[test]
    fn accent_color_is_not_neutral() {
        assert!("blue".parse::<NeutralColor>().is_err());
    }

    #[test]
    fn color_names_are_case_sensitive() {
        assert!("Blue".parse::<ThemeColor>().is_err());
    }
}
