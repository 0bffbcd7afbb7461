use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        book_copy::{
            event::{CreateBookCopy, DeleteBookCopy, UpdateBookCopy},
            BookCopy, CopyStatus,
        },
        id::{BookCopyId, BookId},
    },
    repository::book_copy::BookCopyRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{model::book_copy::BookCopyRow, ConnectionPool};

const COPY_SELECT: &str = "SELECT \
     c.book_copy_id, c.imprint, c.status, c.due_back, \
     b.book_id, b.title AS book_title \
     FROM book_copies c INNER JOIN books b ON b.book_id = c.book_id";

#[derive(new)]
pub struct BookCopyRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookCopyRepository for BookCopyRepositoryImpl {
    async fn create(&self, event: CreateBookCopy) -> AppResult<BookCopyId> {
        let book_copy_id = BookCopyId::new();
        sqlx::query(
            "INSERT INTO book_copies (book_copy_id, book_id, imprint, status, due_back) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(book_copy_id.raw())
        .bind(event.book_id.raw())
        .bind(&event.imprint)
        .bind(event.status.as_str())
        .bind(event.due_back)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(book_copy_id)
    }

    async fn find_all(&self) -> AppResult<Vec<BookCopy>> {
        let rows: Vec<BookCopyRow> =
            sqlx::query_as(&format!("{COPY_SELECT} ORDER BY b.title ASC"))
                .fetch_all(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;
        rows.into_iter().map(BookCopy::try_from).collect()
    }

    async fn find_by_id(&self, book_copy_id: BookCopyId) -> AppResult<Option<BookCopy>> {
        let row: Option<BookCopyRow> =
            sqlx::query_as(&format!("{COPY_SELECT} WHERE c.book_copy_id = $1"))
                .bind(book_copy_id.raw())
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;
        row.map(BookCopy::try_from).transpose()
    }

    async fn find_by_book_id(&self, book_id: BookId) -> AppResult<Vec<BookCopy>> {
        let rows: Vec<BookCopyRow> =
            sqlx::query_as(&format!("{COPY_SELECT} WHERE c.book_id = $1"))
                .bind(book_id.raw())
                .fetch_all(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;
        rows.into_iter().map(BookCopy::try_from).collect()
    }

    async fn update(&self, event: UpdateBookCopy) -> AppResult<()> {
        let res = sqlx::query(
            "UPDATE book_copies SET book_id = $2, imprint = $3, status = $4, due_back = $5 \
             WHERE book_copy_id = $1",
        )
        .bind(event.book_copy_id.raw())
        .bind(event.book_id.raw())
        .bind(&event.imprint)
        .bind(event.status.as_str())
        .bind(event.due_back)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("book copy not found".into()));
        }
        Ok(())
    }

    async fn delete(&self, event: DeleteBookCopy) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM book_copies WHERE book_copy_id = $1")
            .bind(event.book_copy_id.raw())
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("book copy not found".into()));
        }
        Ok(())
    }

    async fn count(&self) -> AppResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM book_copies")
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(count)
    }

    async fn count_available(&self) -> AppResult<i64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM book_copies WHERE status = $1")
                .bind(CopyStatus::Available.as_str())
                .fetch_one(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;
        Ok(count)
    }
}
