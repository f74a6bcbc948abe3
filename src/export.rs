use std::fs;
use std::path;

use anyhow::Context as _;

use crate::error::*;
use crate::site_model::SiteConfig;

pub const APP_CONFIG_FILE: &str = "app.config.json";

/// Lay out `site` the way the front-end framework's app config expects it.
pub fn app_config(site: &SiteConfig) -> serde_json::Value {
    let links: Vec<_> = site
        .footer
        .links
        .iter()
        .map(|link| {
            serde_json::json!({
                "icon": link.icon,
                "to": link.to,
                "target": link.target.as_str(),
                "aria-label": link.aria_label,
            })
        })
        .collect();

    serde_json::json!({
        "global": {
            "picture": {
                "dark": site.global.picture_dark,
                "light": site.global.picture_light,
                "alt": site.global.picture_alt,
            },
            "meetingLink": site.global.meeting_link,
            "email": site.global.email,
            "available": site.global.available,
        },
        "ui": {
            "colors": {
                "primary": site.theme.primary.as_str(),
                "neutral": site.theme.neutral.as_str(),
            },
        },
        "uiPro": {
            "pageHero": {
                "slots": {
                    "container": site.hero.container,
                    "title": site.hero.title,
                    "description": site.hero.description,
                },
            },
        },
        "footer": {
            "credits": site.footer.credits,
            "colorMode": site.footer.color_mode,
            "links": links,
        },
    })
}

/// Write the app config into `dest`, returning the file written.
pub fn write_app_config(site: &SiteConfig, dest: &path::Path) -> Result<path::PathBuf> {
    fs::create_dir_all(dest)
        .with_context(|| format!("Could not create destination {}", dest.display()))?;
    let file = dest.join(APP_CONFIG_FILE);
    let mut content = serde_json::to_string_pretty(&app_config(site))?;
    content.push('\n');
    fs::write(&file, content).with_context(|| format!("Could not write {}", file.display()))?;
    log::trace!("Wrote {}", file.display());
    Ok(file)
}

#[cfg(test)]
mod test {
    use super::*;

    fn literal() -> SiteConfig {
        SiteConfig::from_config_at(folio_config::Config::default(), 2024).unwrap()
    }

    #[test]
    fn app_config_keys() {
        let actual = app_config(&literal());
        assert_eq!(actual["global"]["meetingLink"], "https://cal.com/");
        assert_eq!(actual["global"]["available"], true);
        assert_eq!(actual["ui"]["colors"]["primary"], "blue");
        assert_eq!(actual["ui"]["colors"]["neutral"], "neutral");
        assert_eq!(
            actual["uiPro"]["pageHero"]["slots"]["container"],
            "py-18 sm:py-24 lg:py-32"
        );
        assert_eq!(actual["footer"]["credits"], "Copyright © 2024");
        assert_eq!(actual["footer"]["colorMode"], false);
    }

    #[test]
    fn app_config_urls_are_verbatim() {
        let mut config = folio_config::Config::default();
        config.global.meeting_link = "https://Cal.com".to_owned();
        config.footer.links[1].to = "https://github.com/Lippi99/my repo".to_owned();
        let site = SiteConfig::from_config_at(config, 2024).unwrap();
        let actual = app_config(&site);
        assert_eq!(actual["global"]["meetingLink"], "https://Cal.com");
        assert_eq!(
            actual["footer"]["links"][1]["to"],
            "https://github.com/Lippi99/my repo"
        );
    }

    #[test]
    fn app_config_links_in_order() {
        let actual = app_config(&literal());
        let links = actual["footer"]["links"].as_array().unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0]["icon"], "i-skill-icons:linkedin");
        assert_eq!(links[0]["aria-label"], "Felipe Leite on LinkedIn");
        assert_eq!(links[0]["target"], "_blank");
        assert_eq!(links[1]["to"], "https://github.com/Lippi99");
    }

    #[test]
    fn write_creates_destination() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("nested/_site");
        let file = write_app_config(&literal(), &dest).unwrap();
        assert_eq!(file, dest.join(APP_CONFIG_FILE));

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&file).unwrap()).unwrap();
        assert_eq!(written, app_config(&literal()));
    }
}
