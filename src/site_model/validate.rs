use std::fmt;

use itertools::Itertools;

use super::UnknownToken;

static EMAIL: once_cell::sync::Lazy<regex::Regex> =
    once_cell::sync::Lazy::new(|| regex::Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// A single problem found in a site config, named by its field path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("`{field}` must be an absolute URL, got `{value}` ({reason})")]
    InvalidUrl {
        field: String,
        value: String,
        reason: String,
    },
    #[error("`{field}` is not a recognized color: {source}")]
    UnknownColor {
        field: String,
        #[source]
        source: UnknownToken,
    },
    #[error("`{field}` is not a recognized link target: {source}")]
    UnknownLinkTarget {
        field: String,
        #[source]
        source: UnknownToken,
    },
    #[error("`{field}` is not an email address, got `{value}`")]
    InvalidEmail { field: String, value: String },
    #[error("`{field}` is required")]
    MissingField { field: String },
    #[error("`{field}` failed to render: {reason}")]
    InvalidTemplate { field: String, reason: String },
}

impl ValidationError {
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidUrl { field, .. }
            | Self::UnknownColor { field, .. }
            | Self::UnknownLinkTarget { field, .. }
            | Self::InvalidEmail { field, .. }
            | Self::MissingField { field }
            | Self::InvalidTemplate { field, .. } => field,
        }
    }
}

/// Every problem found while building a site config, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<ValidationError> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid site config:\n{}",
            self.0.iter().map(|e| format!("  {e}")).join("\n")
        )
    }
}

impl std::error::Error for ValidationErrors {}

/// Gathers problems across a whole config so they can be reported at once.
#[derive(Debug, Default)]
pub(crate) struct Collector {
    errors: Vec<ValidationError>,
}

impl Collector {
    pub(crate) fn check<T>(&mut self, result: Result<T, ValidationError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                log::trace!("{err}");
                self.errors.push(err);
                None
            }
        }
    }

    pub(crate) fn finish(self) -> ValidationErrors {
        ValidationErrors(self.errors)
    }
}

/// Check `value` is an absolute URL, keeping the text as written.
pub(crate) fn url(field: &str, value: &str) -> Result<String, ValidationError> {
    url::Url::parse(value).map_err(|e| ValidationError::InvalidUrl {
        field: field.to_owned(),
        value: value.to_owned(),
        reason: e.to_string(),
    })?;
    Ok(value.to_owned())
}

pub(crate) fn email(field: &str, value: &str) -> Result<String, ValidationError> {
    if EMAIL.is_match(value) {
        Ok(value.to_owned())
    } else {
        Err(ValidationError::InvalidEmail {
            field: field.to_owned(),
            value: value.to_owned(),
        })
    }
}

pub(crate) fn required(field: &str, value: &str) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField {
            field: field.to_owned(),
        })
    } else {
        Ok(value.to_owned())
    }
}

pub(crate) fn color<C>(field: &str, value: &str) -> Result<C, ValidationError>
where
    C: std::str::FromStr<Err = UnknownToken>,
{
    value
        .parse()
        .map_err(|source| ValidationError::UnknownColor {
            field: field.to_owned(),
            source,
        })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn url_accepts_absolute() {
        let actual = url("global.meeting_link", "https://cal.com/").unwrap();
        assert_eq!(actual, "https://cal.com/");
    }

    #[test]
    fn url_keeps_text_as_written() {
        let actual = url("global.meeting_link", "https://Cal.com").unwrap();
        assert_eq!(actual, "https://Cal.com");
    }

    #[test]
    fn url_rejects_relative() {
        let err = url("global.meeting_link", "not-a-url").unwrap_err();
        assert_eq!(err.field(), "global.meeting_link");
        assert!(matches!(err, ValidationError::InvalidUrl { .. }));
    }

    #[test]
    fn url_accepts_mailto() {
        let actual = url("footer.links[0].to", "mailto:me@example.com").unwrap();
        assert_eq!(actual, "mailto:me@example.com");
    }

    #[test]
    fn email_shape() {
        assert!(email("global.email", "lipesalomao99@gmail.com").is_ok());
        assert!(email("global.email", "lipesalomao99").is_err());
        assert!(email("global.email", "a b@example.com").is_err());
        assert!(email("global.email", "me@localhost").is_err());
    }

    #[test]
    fn required_rejects_blank() {
        assert!(required("global.picture.alt", "   ").is_err());
        assert_eq!(required("global.picture.alt", "Me").unwrap(), "Me");
    }

    #[test]
    fn collector_keeps_order() {
        let mut collector = Collector::default();
        assert_eq!(collector.check(required("a", "")), None);
        assert_eq!(collector.check(required("b", "ok")), Some("ok".to_owned()));
        assert_eq!(collector.check(required("c", "")), None);
        let errors = collector.finish();
        let fields: Vec<_> = errors.iter().map(|e| e.field()).collect();
        assert_eq!(fields, ["a", "c"]);
        assert_eq!(
            errors.to_string(),
            "Invalid site config:\n  `a` is required\n  `c` is required"
        );
    }
}
