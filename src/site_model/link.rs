use std::fmt;
use std::str::FromStr;

use super::UnknownToken;

/// Browsing context a footer link opens in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize)]
pub enum LinkTarget {
    #[default]
    #[serde(rename = "_blank")]
    Blank,
    #[serde(rename = "_self")]
    SelfFrame,
    #[serde(rename = "_parent")]
    Parent,
    #[serde(rename = "_top")]
    Top,
}

const LINK_TARGETS: &[&str] = &["_blank", "_self", "_parent", "_top"];

impl LinkTarget {
    pub fn variants() -> &'static [&'static str] {
        LINK_TARGETS
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blank => "_blank",
            Self::SelfFrame => "_self",
            Self::Parent => "_parent",
            Self::Top => "_top",
        }
    }
}

impl FromStr for LinkTarget {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "_blank" => Ok(Self::Blank),
            "_self" => Ok(Self::SelfFrame),
            "_parent" => Ok(Self::Parent),
            "_top" => Ok(Self::Top),
            _ => Err(UnknownToken::new(s, LINK_TARGETS)),
        }
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A footer entry, rendered in list order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SocialLink {
    pub icon: String,
    /// Absolute URL, exactly as configured.
    pub to: String,
    pub target: LinkTarget,
    pub aria_label: String,
}
