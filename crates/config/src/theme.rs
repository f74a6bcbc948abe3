use liquid_core::model::KString;

/// Color tokens handed to the theme engine.
///
/// These stay plain strings here so a typo surfaces as a validation error
/// naming the field rather than as a parse failure.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Theme {
    pub primary: KString,
    pub neutral: KString,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "blue".into(),
            neutral: "neutral".into(),
        }
    }
}
