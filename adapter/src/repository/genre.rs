use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        genre::{
            event::{CreateGenre, DeleteGenre, UpdateGenre},
            Genre,
        },
        id::GenreId,
    },
    repository::genre::GenreRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{model::genre::GenreRow, ConnectionPool};

#[derive(new)]
pub struct GenreRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl GenreRepository for GenreRepositoryImpl {
    async fn create(&self, event: CreateGenre) -> AppResult<GenreId> {
        let genre_id = GenreId::new();
        sqlx::query("INSERT INTO genres (genre_id, name) VALUES ($1, $2)")
            .bind(genre_id.raw())
            .bind(&event.name)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(genre_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Genre>> {
        let rows: Vec<GenreRow> =
            sqlx::query_as("SELECT genre_id, name FROM genres ORDER BY name ASC")
                .fetch_all(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;
        Ok(rows.into_iter().map(Genre::from).collect())
    }

    async fn find_by_id(&self, genre_id: GenreId) -> AppResult<Option<Genre>> {
        let row: Option<GenreRow> =
            sqlx::query_as("SELECT genre_id, name FROM genres WHERE genre_id = $1")
                .bind(genre_id.raw())
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;
        Ok(row.map(Genre::from))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Genre>> {
        let row: Option<GenreRow> =
            sqlx::query_as("SELECT genre_id, name FROM genres WHERE name = $1")
                .bind(name)
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;
        Ok(row.map(Genre::from))
    }

    async fn update(&self, event: UpdateGenre) -> AppResult<()> {
        let res = sqlx::query("UPDATE genres SET name = $2 WHERE genre_id = $1")
            .bind(event.genre_id.raw())
            .bind(&event.name)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("genre not found".into()));
        }
        Ok(())
    }

    async fn delete(&self, event: DeleteGenre) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM genres WHERE genre_id = $1")
            .bind(event.genre_id.raw())
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("genre not found".into()));
        }
        Ok(())
    }

    async fn count(&self) -> AppResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM genres")
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(count)
    }
}
