use chrono::{DateTime, Utc};
use kernel::model::{
    book_copy::{BookCopy, CopyBook},
    id::{BookCopyId, BookId},
};
use serde::{Deserialize, Serialize};

use crate::{
    form::{book_copy::BookCopyDraft, FieldError},
    presentation,
};

#[derive(Debug, Serialize)]
pub struct BookCopyView {
    pub id: BookCopyId,
    pub book: CopyBookView,
    pub imprint: String,
    pub status: String,
    pub due_back: DateTime<Utc>,
    pub due_back_formatted: String,
    pub url: String,
}

impl From<BookCopy> for BookCopyView {
    fn from(copy: BookCopy) -> Self {
        let due_back_formatted = presentation::datetime_med(copy.due_back);
        let url = presentation::detail_url("bookinstance", copy.id);
        Self {
            id: copy.id,
            book: copy.book.into(),
            imprint: copy.imprint,
            status: copy.status.to_string(),
            due_back: copy.due_back,
            due_back_formatted,
            url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CopyBookView {
    pub id: BookId,
    pub title: String,
    pub url: String,
}

impl From<CopyBook> for CopyBookView {
    fn from(book: CopyBook) -> Self {
        let url = presentation::detail_url("book", book.id);
        Self {
            id: book.id,
            title: book.title,
            url,
        }
    }
}

/// Book option for the copy form's select list.
#[derive(Debug, Serialize)]
pub struct BookOptionView {
    pub id: BookId,
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct BookCopyListView {
    pub title: String,
    pub bookinstance_list: Vec<BookCopyView>,
}

#[derive(Debug, Serialize)]
pub struct BookCopyDetailView {
    pub title: String,
    pub book_instance: BookCopyView,
}

#[derive(Debug, Serialize)]
pub struct BookCopyFormView {
    pub title: String,
    pub book_list: Vec<BookOptionView>,
    pub bookinstance: Option<BookCopyDraft>,
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Serialize)]
pub struct BookCopyDeleteView {
    pub title: String,
    pub bookinstance: BookCopyView,
}

#[derive(Debug, Deserialize)]
pub struct DeleteBookCopyFormData {
    #[serde(default)]
    pub biid: String,
}
