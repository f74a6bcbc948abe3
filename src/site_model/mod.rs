mod color;
mod credits;
mod link;
mod site;
mod validate;

pub use self::color::NeutralColor;
pub use self::color::ThemeColor;
pub use self::color::UnknownToken;
pub use self::credits::current_year;
pub use self::credits::render_credits;
pub use self::link::LinkTarget;
pub use self::link::SocialLink;
pub use self::site::FooterInfo;
pub use self::site::GlobalInfo;
pub use self::site::HeroStyle;
pub use self::site::SiteConfig;
pub use self::site::ThemeTokens;
pub use self::validate::ValidationError;
pub use self::validate::ValidationErrors;
