use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    book::{
        event::{CreateBook, DeleteBook, UpdateBook},
        Book,
    },
    id::{AuthorId, BookId, GenreId},
};

#[mockall::automock]
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn create(&self, event: CreateBook) -> AppResult<BookId>;
    async fn find_all(&self) -> AppResult<Vec<Book>>;
    async fn find_by_id(&self, book_id: BookId) -> AppResult<Option<Book>>;
    // Dependent queries feeding the deletion guard for authors and genres.
    // The genre variant is a membership test against the genre set, not an
    // equality filter.
    async fn find_by_author_id(&self, author_id: AuthorId) -> AppResult<Vec<Book>>;
    async fn find_by_genre_id(&self, genre_id: GenreId) -> AppResult<Vec<Book>>;
    async fn update(&self, event: UpdateBook) -> AppResult<()>;
    async fn delete(&self, event: DeleteBook) -> AppResult<()>;
    async fn count(&self) -> AppResult<i64>;
}
