//! Error types for loading the page content.

use thiserror::Error;

/// Everything that can go wrong turning `content/site.json` into a
/// [`crate::content::SiteContent`].
#[derive(Error, Debug)]
pub enum ContentError {
    /// The document is not valid JSON or does not match the content model.
    #[error("failed to parse site content: {0}")]
    Parse(#[from] serde_json::Error),

    /// A list the page iterates over is empty.
    #[error("site content has no entries in '{section}'")]
    MissingSection {
        /// Name of the empty list.
        section: &'static str,
    },

    /// A required text field is empty or whitespace.
    #[error("blank '{field}' in '{section}'")]
    BlankField {
        section: &'static str,
        field: &'static str,
    },

    /// An office card would render without a phone number.
    #[error("office '{office}' lists no phone numbers")]
    NoPhoneNumbers { office: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ContentError::from(json_err);
        assert!(err.to_string().starts_with("failed to parse site content"));
    }

    #[test]
    fn test_missing_section_display() {
        let err = ContentError::MissingSection { section: "services" };
        assert_eq!(err.to_string(), "site content has no entries in 'services'");
    }

    #[test]
    fn test_blank_field_display() {
        let err = ContentError::BlankField {
            section: "benefits",
            field: "title",
        };
        assert_eq!(err.to_string(), "blank 'title' in 'benefits'");
    }

    #[test]
    fn test_no_phone_numbers_display() {
        let err = ContentError::NoPhoneNumbers {
            office: "USA Office".to_string(),
        };
        assert!(err.to_string().contains("USA Office"));
    }
}
