use std::fmt;

use super::validate::{self, Collector, ValidationError, ValidationErrors};
use super::{LinkTarget, NeutralColor, SocialLink, ThemeColor};

/// The validated, immutable configuration of the portfolio site.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SiteConfig {
    pub global: GlobalInfo,
    pub theme: ThemeTokens,
    pub hero: HeroStyle,
    pub footer: FooterInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GlobalInfo {
    pub picture_dark: String,
    pub picture_light: String,
    pub picture_alt: String,
    pub meeting_link: String,
    pub email: String,
    pub available: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ThemeTokens {
    pub primary: ThemeColor,
    pub neutral: NeutralColor,
}

/// Utility classes for the hero slots, passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct HeroStyle {
    pub container: String,
    pub title: String,
    pub description: String,
}

impl HeroStyle {
    pub fn container_tokens(&self) -> impl Iterator<Item = &str> {
        self.container.split_whitespace()
    }

    pub fn title_tokens(&self) -> impl Iterator<Item = &str> {
        self.title.split_whitespace()
    }

    pub fn description_tokens(&self) -> impl Iterator<Item = &str> {
        self.description.split_whitespace()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FooterInfo {
    /// Rendered once, when the site config was built.
    pub credits: String,
    pub color_mode: bool,
    pub links: Vec<SocialLink>,
}

impl SiteConfig {
    /// Validate `config`, rendering the credits for the current year.
    pub fn from_config(config: folio_config::Config) -> Result<Self, ValidationErrors> {
        Self::from_config_at(config, super::current_year())
    }

    pub fn from_config_at(
        config: folio_config::Config,
        year: i32,
    ) -> Result<Self, ValidationErrors> {
        let folio_config::Config {
            global,
            theme,
            hero,
            footer,
            ..
        } = config;
        let mut errors = Collector::default();

        let picture_dark = errors.check(validate::url("global.picture.dark", &global.picture.dark));
        let picture_light =
            errors.check(validate::url("global.picture.light", &global.picture.light));
        let picture_alt =
            errors.check(validate::required("global.picture.alt", &global.picture.alt));
        let meeting_link =
            errors.check(validate::url("global.meeting_link", &global.meeting_link));
        let email = errors.check(validate::email("global.email", &global.email));

        let primary = errors.check(validate::color::<ThemeColor>("theme.primary", &theme.primary));
        let neutral =
            errors.check(validate::color::<NeutralColor>("theme.neutral", &theme.neutral));

        let credits = errors.check(
            super::render_credits(&footer.credits, year).map_err(|e| {
                ValidationError::InvalidTemplate {
                    field: "footer.credits".to_owned(),
                    reason: e.to_string(),
                }
            }),
        );
        let links: Vec<_> = footer
            .links
            .iter()
            .enumerate()
            .map(|(i, link)| social_link(&mut errors, i, link))
            .collect();
        let links: Option<Vec<_>> = links.into_iter().collect();

        let (
            Some(picture_dark),
            Some(picture_light),
            Some(picture_alt),
            Some(meeting_link),
            Some(email),
            Some(primary),
            Some(neutral),
            Some(credits),
            Some(links),
        ) = (
            picture_dark,
            picture_light,
            picture_alt,
            meeting_link,
            email,
            primary,
            neutral,
            credits,
            links,
        )
        else {
            let errors = errors.finish();
            log::debug!("Site config has {} problem(s)", errors.len());
            return Err(errors);
        };

        let site = SiteConfig {
            global: GlobalInfo {
                picture_dark,
                picture_light,
                picture_alt,
                meeting_link,
                email,
                available: global.available,
            },
            theme: ThemeTokens { primary, neutral },
            hero: HeroStyle {
                container: hero.container,
                title: hero.title,
                description: hero.description,
            },
            footer: FooterInfo {
                credits,
                color_mode: footer.color_mode,
                links,
            },
        };
        Ok(site)
    }
}

fn social_link(
    errors: &mut Collector,
    index: usize,
    link: &folio_config::FooterLink,
) -> Option<SocialLink> {
    let field = |name: &str| format!("footer.links[{index}].{name}");
    let icon = errors.check(validate::required(&field("icon"), &link.icon));
    let to = errors.check(validate::url(&field("to"), &link.to));
    let target = errors.check(link.target.parse::<LinkTarget>().map_err(|source| {
        ValidationError::UnknownLinkTarget {
            field: field("target"),
            source,
        }
    }));
    let aria_label = errors.check(validate::required(&field("aria_label"), &link.aria_label));
    Some(SocialLink {
        icon: icon?,
        to: to?,
        target: target?,
        aria_label: aria_label?,
    })
}

impl fmt::Display for SiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}
