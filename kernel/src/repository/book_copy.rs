use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    book_copy::{
        event::{CreateBookCopy, DeleteBookCopy, UpdateBookCopy},
        BookCopy,
    },
    id::{BookCopyId, BookId},
};

#[mockall::automock]
#[async_trait]
pub trait BookCopyRepository: Send + Sync {
    async fn create(&self, event: CreateBookCopy) -> AppResult<BookCopyId>;
    async fn find_all(&self) -> AppResult<Vec<BookCopy>>;
    async fn find_by_id(&self, book_copy_id: BookCopyId) -> AppResult<Option<BookCopy>>;
    // Dependent query feeding the deletion guard for books.
    async fn find_by_book_id(&self, book_id: BookId) -> AppResult<Vec<BookCopy>>;
    async fn update(&self, event: UpdateBookCopy) -> AppResult<()>;
    async fn delete(&self, event: DeleteBookCopy) -> AppResult<()>;
    async fn count(&self) -> AppResult<i64>;
    async fn count_available(&self) -> AppResult<i64>;
}
