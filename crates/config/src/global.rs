use liquid_core::model::KString;

const AVATAR: &str = "https://avatars.githubusercontent.com/u/65247407?v=4";

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Global {
    pub picture: Picture,
    pub meeting_link: String,
    pub email: String,
    pub available: bool,
}

impl Default for Global {
    fn default() -> Self {
        Self {
            picture: Default::default(),
            meeting_link: "https://cal.com/".to_owned(),
            email: "lipesalomao99@gmail.com".to_owned(),
            available: true,
        }
    }
}

/// Avatar shown in the hero, one variant per color mode.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Picture {
    pub dark: String,
    pub light: String,
    pub alt: KString,
}

impl Default for Picture {
    fn default() -> Self {
        Self {
            dark: AVATAR.to_owned(),
            light: AVATAR.to_owned(),
            alt: "My profile picture".into(),
        }
    }
}
