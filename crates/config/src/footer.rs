use liquid_core::model::KString;

pub const DEFAULT_CREDITS: &str = "Copyright © {{ year }}";

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Footer {
    /// Liquid template; `year` is bound when the site config is built.
    pub credits: String,
    pub color_mode: bool,
    pub links: Vec<FooterLink>,
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            credits: DEFAULT_CREDITS.to_owned(),
            color_mode: false,
            links: vec![
                FooterLink {
                    icon: "i-skill-icons:linkedin".into(),
                    to: "https://www.linkedin.com/in/felipe-lippi-61b159199/".to_owned(),
                    target: "_blank".into(),
                    aria_label: "Felipe Leite on LinkedIn".into(),
                },
                FooterLink {
                    icon: "i-simple-icons-github".into(),
                    to: "https://github.com/Lippi99".to_owned(),
                    target: "_blank".into(),
                    aria_label: "Felipe Leite on GitHub".into(),
                },
            ],
        }
    }
}

/// A social link; fields left out are reported when the site config is validated.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct FooterLink {
    pub icon: KString,
    pub to: String,
    pub target: KString,
    pub aria_label: KString,
}

impl Default for FooterLink {
    fn default() -> Self {
        Self {
            icon: Default::default(),
            to: Default::default(),
            target: "_blank".into(),
            aria_label: Default::default(),
        }
    }
}
