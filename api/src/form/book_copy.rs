use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use garde::Validate;
use kernel::model::{
    book_copy::{
        event::{CreateBookCopy, UpdateBookCopy},
        BookCopy, CopyStatus,
    },
    id::{BookCopyId, BookId},
};
use serde::{Deserialize, Serialize};
use shared::error::AppError;

use super::{collect_report, parse_optional_date, sanitize, FieldError, FormOutcome};

#[derive(Debug, Default, Deserialize)]
pub struct BookCopyFormData {
    #[serde(default)]
    pub book: String,
    #[serde(default)]
    pub imprint: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub due_back: String,
}

#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct BookCopyDraft {
    #[garde(length(chars, min = 1))]
    pub book: String,
    #[garde(length(chars, min = 1))]
    pub imprint: String,
    #[garde(skip)]
    pub status: CopyStatus,
    #[garde(skip)]
    pub due_back: Option<NaiveDate>,
}

pub fn validate_book_copy(data: BookCopyFormData) -> FormOutcome<BookCopyDraft> {
    let mut errors = Vec::new();
    // An empty status falls back to the Maintenance default; an unknown
    // value is a field error, never a silent substitution.
    let raw_status = data.status.trim();
    let status = if raw_status.is_empty() {
        CopyStatus::default()
    } else {
        raw_status.parse::<CopyStatus>().unwrap_or_else(|_| {
            errors.push(FieldError::new("status", "Copy status is not valid"));
            CopyStatus::default()
        })
    };
    let draft = BookCopyDraft {
        book: sanitize(&data.book),
        imprint: sanitize(&data.imprint),
        status,
        due_back: parse_optional_date(
            "due_back",
            data.due_back.trim(),
            "Invalid due-back date",
            &mut errors,
        ),
    };
    collect_report(&draft, &mut errors);
    if !draft.book.is_empty() && draft.book.parse::<BookId>().is_err() {
        errors.push(FieldError::new("book", "Book selection is not valid"));
    }
    FormOutcome { draft, errors }
}

impl TryFrom<BookCopyDraft> for CreateBookCopy {
    type Error = AppError;

    fn try_from(draft: BookCopyDraft) -> Result<Self, Self::Error> {
        let book_id = parse_book_reference(&draft)?;
        Ok(Self {
            book_id,
            imprint: draft.imprint,
            status: draft.status,
            // An unsupplied due-back date defaults to the creation time.
            due_back: due_back_or_now(draft.due_back),
        })
    }
}

impl BookCopyDraft {
    pub fn into_update(self, book_copy_id: BookCopyId) -> Result<UpdateBookCopy, AppError> {
        let book_id = parse_book_reference(&self)?;
        Ok(UpdateBookCopy {
            book_copy_id,
            book_id,
            imprint: self.imprint,
            status: self.status,
            due_back: due_back_or_now(self.due_back),
        })
    }
}

fn parse_book_reference(draft: &BookCopyDraft) -> Result<BookId, AppError> {
    draft
        .book
        .parse()
        .map_err(|_| AppError::ConversionEntityError("malformed book reference".into()))
}

fn due_back_or_now(date: Option<NaiveDate>) -> DateTime<Utc> {
    date.map(|d| d.and_time(NaiveTime::MIN).and_utc())
        .unwrap_or_else(Utc::now)
}

impl From<BookCopy> for BookCopyDraft {
    fn from(copy: BookCopy) -> Self {
        Self {
            book: copy.book.id.to_string(),
            imprint: copy.imprint,
            status: copy.status,
            due_back: Some(copy.due_back.date_naive()),
        }
    }
}
