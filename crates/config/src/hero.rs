/// Utility-class overrides for the page hero's slots.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Hero {
    pub container: String,
    pub title: String,
    pub description: String,
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            container: "py-18 sm:py-24 lg:py-32".to_owned(),
            title: "mx-auto max-w-xl text-pretty text-3xl sm:text-4xl lg:text-5xl".to_owned(),
            description: "mt-2 text-md mx-auto max-w-2xl text-pretty sm:text-md text-muted"
                .to_owned(),
        }
    }
}
