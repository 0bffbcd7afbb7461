use garde::Validate;
use kernel::model::{
    book::{
        event::{CreateBook, UpdateBook},
        Book,
    },
    id::{AuthorId, BookId, GenreId},
};
use serde::{Deserialize, Serialize};
use shared::error::AppError;

use super::{collect_report, sanitize, FieldError, FormOutcome};

/// Raw book form fields. `genre` may arrive zero, one, or many times; the
/// form deserializer folds every case into a sequence, so an omitted field
/// is an empty vec and a single selection a one-element vec.
#[derive(Debug, Default, Deserialize)]
pub struct BookFormData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub genre: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct BookDraft {
    #[garde(length(chars, min = 1))]
    pub title: String,
    // The selected author's id, kept as submitted so the form re-renders
    // with the selection intact.
    #[garde(length(chars, min = 1))]
    pub author: String,
    #[garde(length(chars, min = 1))]
    pub summary: String,
    #[garde(length(chars, min = 1))]
    pub isbn: String,
    #[garde(skip)]
    pub genre: Vec<String>,
}

pub fn validate_book(data: BookFormData) -> FormOutcome<BookDraft> {
    let mut errors = Vec::new();
    let draft = BookDraft {
        title: sanitize(&data.title),
        author: sanitize(&data.author),
        summary: sanitize(&data.summary),
        isbn: sanitize(&data.isbn),
        genre: data.genre.iter().map(|g| sanitize(g)).collect(),
    };
    collect_report(&draft, &mut errors);
    if !draft.author.is_empty() && draft.author.parse::<AuthorId>().is_err() {
        errors.push(FieldError::new("author", "Author selection is not valid"));
    }
    if draft.genre.iter().any(|g| g.parse::<GenreId>().is_err()) {
        errors.push(FieldError::new("genre", "Genre selection is not valid"));
    }
    FormOutcome { draft, errors }
}

impl TryFrom<BookDraft> for CreateBook {
    type Error = AppError;

    fn try_from(draft: BookDraft) -> Result<Self, Self::Error> {
        let (author_id, genre_ids) = parse_references(&draft)?;
        Ok(Self {
            title: draft.title,
            author_id,
            summary: draft.summary,
            isbn: draft.isbn,
            genre_ids,
        })
    }
}

impl BookDraft {
    pub fn into_update(self, book_id: BookId) -> Result<UpdateBook, AppError> {
        let (author_id, genre_ids) = parse_references(&self)?;
        Ok(UpdateBook {
            book_id,
            title: self.title,
            author_id,
            summary: self.summary,
            isbn: self.isbn,
            genre_ids,
        })
    }
}

fn parse_references(draft: &BookDraft) -> Result<(AuthorId, Vec<GenreId>), AppError> {
    let author_id = draft
        .author
        .parse()
        .map_err(|_| AppError::ConversionEntityError("malformed author reference".into()))?;
    let genre_ids = draft
        .genre
        .iter()
        .map(|g| g.parse())
        .collect::<Result<Vec<GenreId>, _>>()
        .map_err(|_| AppError::ConversionEntityError("malformed genre reference".into()))?;
    Ok((author_id, genre_ids))
}

impl From<Book> for BookDraft {
    fn from(book: Book) -> Self {
        Self {
            title: book.title,
            author: book.author.id.to_string(),
            summary: book.summary,
            isbn: book.isbn,
            genre: book.genres.iter().map(|g| g.id.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn well_formed() -> BookFormData {
        BookFormData {
            title: "War and Peace".into(),
            author: AuthorId::new().to_string(),
            summary: "A novel.".into(),
            isbn: "9781400079988".into(),
            genre: vec![GenreId::new().to_string()],
        }
    }

    #[test]
    fn well_formed_fields_validate_clean() {
        let outcome = validate_book(well_formed());
        assert!(outcome.is_valid());
        assert_eq!(outcome.draft.title, "War and Peace");
        assert_eq!(outcome.draft.genre.len(), 1);
    }

    #[test]
    fn every_missing_field_is_reported_at_once() {
        let outcome = validate_book(BookFormData::default());
        assert!(!outcome.is_valid());
        for field in ["title", "author", "summary", "isbn"] {
            assert!(
                outcome.errors.iter().any(|e| e.field == field),
                "no error names {field}"
            );
        }
        // Structurally complete draft, nothing missing.
        assert_eq!(outcome.draft.genre, Vec::<String>::new());
    }

    #[test]
    fn malformed_author_reference_is_a_field_error() {
        let outcome = validate_book(BookFormData {
            author: "not-an-id".into(),
            ..well_formed()
        });
        assert!(!outcome.is_valid());
        assert!(outcome.errors.iter().any(|e| e.field == "author"));
    }

    #[test]
    fn omitted_genre_field_normalizes_to_an_empty_sequence() {
        let data: BookFormData =
            serde_html_form::from_str("title=T&author=a&summary=s&isbn=i").unwrap();
        assert_eq!(data.genre, Vec::<String>::new());
    }

    #[test]
    fn single_genre_value_normalizes_to_a_one_element_sequence() {
        let data: BookFormData = serde_html_form::from_str("title=T&genre=g1").unwrap();
        assert_eq!(data.genre, vec!["g1"]);
    }

    #[test]
    fn many_genre_values_preserve_order_and_count() {
        let data: BookFormData =
            serde_html_form::from_str("genre=g1&genre=g2&genre=g3").unwrap();
        assert_eq!(data.genre, vec!["g1", "g2", "g3"]);
    }
}
