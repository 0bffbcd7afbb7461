use chrono::{DateTime, Utc};
use kernel::model::book_copy::{BookCopy, CopyBook};
use shared::error::AppError;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
pub struct BookCopyRow {
    pub book_copy_id: Uuid,
    pub book_id: Uuid,
    pub book_title: String,
    pub imprint: String,
    pub status: String,
    pub due_back: DateTime<Utc>,
}

impl TryFrom<BookCopyRow> for BookCopy {
    type Error = AppError;

    fn try_from(row: BookCopyRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse()
            .map_err(AppError::ConversionEntityError)?;
        Ok(Self {
            id: row.book_copy_id.into(),
            book: CopyBook {
                id: row.book_id.into(),
                title: row.book_title,
            },
            imprint: row.imprint,
            status,
            due_back: row.due_back,
        })
    }
}
