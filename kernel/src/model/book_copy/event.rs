use chrono::{DateTime, Utc};

use super::CopyStatus;
use crate::model::id::{BookCopyId, BookId};

#[derive(Debug)]
pub struct CreateBookCopy {
    pub book_id: BookId,
    pub imprint: String,
    pub status: CopyStatus,
    pub due_back: DateTime<Utc>,
}

#[derive(Debug)]
pub struct UpdateBookCopy {
    pub book_copy_id: BookCopyId,
    pub book_id: BookId,
    pub imprint: String,
    pub status: CopyStatus,
    pub due_back: DateTime<Utc>,
}

#[derive(Debug)]
pub struct DeleteBookCopy {
    pub book_copy_id: BookCopyId,
}
