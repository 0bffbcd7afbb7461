use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    genre::{
        event::{CreateGenre, DeleteGenre, UpdateGenre},
        Genre,
    },
    id::GenreId,
};

#[mockall::automock]
#[async_trait]
pub trait GenreRepository: Send + Sync {
    async fn create(&self, event: CreateGenre) -> AppResult<GenreId>;
    // Sorted by name, ascending.
    async fn find_all(&self) -> AppResult<Vec<Genre>>;
    async fn find_by_id(&self, genre_id: GenreId) -> AppResult<Option<Genre>>;
    // Exact-name lookup backing the create de-duplication step.
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Genre>>;
    async fn update(&self, event: UpdateGenre) -> AppResult<()>;
    async fn delete(&self, event: DeleteGenre) -> AppResult<()>;
    async fn count(&self) -> AppResult<i64>;
}
