//! Pure projections from stored entities to their human-facing forms.
//! Nothing here touches the store, and none of these values are persisted.

use std::fmt::Display;

use chrono::{DateTime, NaiveDate, Utc};
use kernel::model::{author::Author, book::BookAuthor};

/// "family_name, first_name".
pub fn display_name(author: &Author) -> String {
    name_label(&author.family_name, &author.first_name)
}

pub fn book_author_name(author: &BookAuthor) -> String {
    name_label(&author.family_name, &author.first_name)
}

fn name_label(family_name: &str, first_name: &str) -> String {
    format!("{family_name}, {first_name}")
}

/// Birth and death dates as one range; a missing date renders as empty
/// rather than a placeholder token.
pub fn lifespan(author: &Author) -> String {
    let born = author.date_of_birth.map(date_med).unwrap_or_default();
    let died = author.date_of_death.map(date_med).unwrap_or_default();
    format!("{born} - {died}")
}

pub fn detail_url(kind: &str, id: impl Display) -> String {
    format!("/catalog/{kind}/{id}")
}

/// Medium date, e.g. "Oct 6, 1835".
pub fn date_med(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Medium date with time, e.g. "Oct 6, 1835, 3:04 PM".
pub fn datetime_med(at: DateTime<Utc>) -> String {
    at.format("%b %-d, %Y, %-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use kernel::model::id::AuthorId;

    fn tolstoy() -> Author {
        Author {
            id: AuthorId::new(),
            first_name: "Leo".into(),
            family_name: "Tolstoy".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1828, 9, 9),
            date_of_death: NaiveDate::from_ymd_opt(1910, 11, 20),
        }
    }

    #[test]
    fn display_name_is_family_name_first() {
        assert_eq!(display_name(&tolstoy()), "Tolstoy, Leo");
    }

    #[test]
    fn lifespan_formats_both_dates() {
        assert_eq!(lifespan(&tolstoy()), "Sep 9, 1828 - Nov 20, 1910");
    }

    #[test]
    fn missing_dates_render_as_empty() {
        let mut author = tolstoy();
        author.date_of_death = None;
        assert_eq!(lifespan(&author), "Sep 9, 1828 - ");
        author.date_of_birth = None;
        assert_eq!(lifespan(&author), " - ");
    }

    #[test]
    fn detail_url_embeds_kind_and_id() {
        let id = AuthorId::new();
        assert_eq!(detail_url("author", id), format!("/catalog/author/{id}"));
    }

    #[test]
    fn datetime_med_uses_twelve_hour_clock() {
        let at = Utc.with_ymd_and_hms(2026, 10, 6, 15, 4, 0).unwrap();
        assert_eq!(datetime_med(at), "Oct 6, 2026, 3:04 PM");
    }
}
