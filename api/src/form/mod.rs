//! Per-entity rule sets turning raw submitted fields into either a
//! normalized draft or a list of field errors. Each field runs through a
//! fixed order: trim, length bound, markup escaping, date parsing for date
//! fields, alphanumeric check for name fields. All field errors are
//! aggregated; nothing short-circuits on the first failure.

use chrono::NaiveDate;
use serde::Serialize;

pub mod author;
pub mod book;
pub mod book_copy;
pub mod genre;

/// One failed rule, addressed to the form field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Result of running a form through its rule set. When `errors` is
/// non-empty the draft still carries every sanitized-so-far value so the
/// form can be re-presented pre-filled instead of blank.
#[derive(Debug)]
pub struct FormOutcome<D> {
    pub draft: D,
    pub errors: Vec<FieldError>,
}

impl<D> FormOutcome<D> {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Trim surrounding whitespace, then escape markup-significant characters.
pub(crate) fn sanitize(raw: &str) -> String {
    escape_markup(raw.trim())
}

fn escape_markup(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(ch),
        }
    }
    out
}

/// ISO-8601 calendar date. An empty value means "not supplied" and parses
/// to `None` without an error.
pub(crate) fn parse_optional_date(
    field: &str,
    value: &str,
    message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<NaiveDate> {
    if value.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(FieldError::new(field, message));
            None
        }
    }
}

/// Letters and digits only; garde rule for name fields.
pub(crate) fn alphanumeric(value: &str, _context: &()) -> garde::Result {
    if value.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(garde::Error::new("has non-alphanumeric characters"))
    }
}

/// Fold a garde report into the flat per-field error list.
pub(crate) fn collect_report<D>(draft: &D, errors: &mut Vec<FieldError>)
where
    D: garde::Validate<Context = ()>,
{
    if let Err(report) = draft.validate() {
        for (path, error) in report.iter() {
            errors.push(FieldError {
                field: path.to_string(),
                message: error.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_trims_and_escapes() {
        assert_eq!(sanitize("  plain  "), "plain");
        assert_eq!(
            sanitize("<b>\"war & peace\"</b>"),
            "&lt;b&gt;&quot;war &amp; peace&quot;&lt;&#x2F;b&gt;"
        );
        assert_eq!(sanitize("it's"), "it&#x27;s");
    }

    #[test]
    fn empty_date_is_not_supplied() {
        let mut errors = Vec::new();
        let parsed = parse_optional_date("due_back", "", "Invalid date", &mut errors);
        assert_eq!(parsed, None);
        assert!(errors.is_empty());
    }

    #[test]
    fn malformed_date_is_a_field_error() {
        let mut errors = Vec::new();
        let parsed = parse_optional_date("date_of_birth", "1910-13-99", "Invalid date", &mut errors);
        assert_eq!(parsed, None);
        assert_eq!(errors, vec![FieldError::new("date_of_birth", "Invalid date")]);
    }

    #[test]
    fn iso_date_parses() {
        let mut errors = Vec::new();
        let parsed = parse_optional_date("date_of_birth", "1828-09-09", "Invalid date", &mut errors);
        assert_eq!(parsed, NaiveDate::from_ymd_opt(1828, 9, 9));
        assert!(errors.is_empty());
    }
}
