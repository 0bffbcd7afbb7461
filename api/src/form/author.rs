use chrono::NaiveDate;
use garde::Validate;
use kernel::model::{
    author::{
        event::{CreateAuthor, UpdateAuthor},
        Author,
    },
    id::AuthorId,
};
use serde::{Deserialize, Serialize};

use super::{alphanumeric, collect_report, parse_optional_date, sanitize, FormOutcome};

/// Raw author form fields as submitted. Missing fields deserialize to empty
/// strings so every field passes through the rule set.
#[derive(Debug, Default, Deserialize)]
pub struct AuthorFormData {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub date_of_death: String,
}

#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct AuthorDraft {
    #[garde(length(chars, min = 1, max = 100), custom(alphanumeric))]
    pub first_name: String,
    #[garde(length(chars, min = 1, max = 100), custom(alphanumeric))]
    pub family_name: String,
    #[garde(skip)]
    pub date_of_birth: Option<NaiveDate>,
    #[garde(skip)]
    pub date_of_death: Option<NaiveDate>,
}

pub fn validate_author(data: AuthorFormData) -> FormOutcome<AuthorDraft> {
    let mut errors = Vec::new();
    let draft = AuthorDraft {
        first_name: sanitize(&data.first_name),
        family_name: sanitize(&data.family_name),
        date_of_birth: parse_optional_date(
            "date_of_birth",
            data.date_of_birth.trim(),
            "Invalid date of birth",
            &mut errors,
        ),
        date_of_death: parse_optional_date(
            "date_of_death",
            data.date_of_death.trim(),
            "Invalid date of death",
            &mut errors,
        ),
    };
    collect_report(&draft, &mut errors);
    FormOutcome { draft, errors }
}

impl From<AuthorDraft> for CreateAuthor {
    fn from(draft: AuthorDraft) -> Self {
        Self {
            first_name: draft.first_name,
            family_name: draft.family_name,
            date_of_birth: draft.date_of_birth,
            date_of_death: draft.date_of_death,
        }
    }
}

impl AuthorDraft {
    pub fn into_update(self, author_id: AuthorId) -> UpdateAuthor {
        UpdateAuthor {
            author_id,
            first_name: self.first_name,
            family_name: self.family_name,
            date_of_birth: self.date_of_birth,
            date_of_death: self.date_of_death,
        }
    }
}

// Prefills the update form from the stored record.
impl From<Author> for AuthorDraft {
    fn from(author: Author) -> Self {
        Self {
            first_name: author.first_name,
            family_name: author.family_name,
            date_of_birth: author.date_of_birth,
            date_of_death: author.date_of_death,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_fields_validate_clean() {
        let outcome = validate_author(AuthorFormData {
            first_name: "  Leo ".into(),
            family_name: "Tolstoy".into(),
            date_of_birth: "1828-09-09".into(),
            date_of_death: "1910-11-20".into(),
        });
        assert!(outcome.is_valid());
        assert_eq!(outcome.draft.first_name, "Leo");
        assert_eq!(outcome.draft.family_name, "Tolstoy");
        assert_eq!(
            outcome.draft.date_of_birth,
            NaiveDate::from_ymd_opt(1828, 9, 9)
        );
        assert_eq!(
            outcome.draft.date_of_death,
            NaiveDate::from_ymd_opt(1910, 11, 20)
        );
    }

    #[test]
    fn missing_required_field_is_named_and_draft_stays_complete() {
        let outcome = validate_author(AuthorFormData {
            first_name: "Leo".into(),
            family_name: "   ".into(),
            ..Default::default()
        });
        assert!(!outcome.is_valid());
        assert!(outcome.errors.iter().any(|e| e.field == "family_name"));
        // The draft still carries the sanitized values for re-rendering.
        assert_eq!(outcome.draft.first_name, "Leo");
        assert_eq!(outcome.draft.family_name, "");
    }

    #[test]
    fn markup_in_a_name_fails_the_alphanumeric_rule() {
        let outcome = validate_author(AuthorFormData {
            first_name: "<Leo>".into(),
            family_name: "Tolstoy".into(),
            ..Default::default()
        });
        assert!(!outcome.is_valid());
        assert!(outcome.errors.iter().any(|e| e.field == "first_name"));
        // Sanitization already happened when the rule failed.
        assert_eq!(outcome.draft.first_name, "&lt;Leo&gt;");
    }

    #[test]
    fn dates_are_optional_independently() {
        let outcome = validate_author(AuthorFormData {
            first_name: "Leo".into(),
            family_name: "Tolstoy".into(),
            date_of_birth: String::new(),
            date_of_death: "1910-11-20".into(),
        });
        assert!(outcome.is_valid());
        assert_eq!(outcome.draft.date_of_birth, None);
        assert!(outcome.draft.date_of_death.is_some());
    }

    #[test]
    fn malformed_date_names_the_field() {
        let outcome = validate_author(AuthorFormData {
            first_name: "Leo".into(),
            family_name: "Tolstoy".into(),
            date_of_birth: "September 9".into(),
            ..Default::default()
        });
        assert!(!outcome.is_valid());
        assert!(outcome.errors.iter().any(|e| e.field == "date_of_birth"));
    }
}
