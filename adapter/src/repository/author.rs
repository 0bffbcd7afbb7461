use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        author::{
            event::{CreateAuthor, DeleteAuthor, UpdateAuthor},
            Author,
        },
        id::AuthorId,
    },
    repository::author::AuthorRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{model::author::AuthorRow, ConnectionPool};

#[derive(new)]
pub struct AuthorRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl AuthorRepository for AuthorRepositoryImpl {
    async fn create(&self, event: CreateAuthor) -> AppResult<AuthorId> {
        let author_id = AuthorId::new();
        sqlx::query(
            "INSERT INTO authors \
             (author_id, first_name, family_name, date_of_birth, date_of_death) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(author_id.raw())
        .bind(&event.first_name)
        .bind(&event.family_name)
        .bind(event.date_of_birth)
        .bind(event.date_of_death)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(author_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Author>> {
        let rows: Vec<AuthorRow> = sqlx::query_as(
            "SELECT author_id, first_name, family_name, date_of_birth, date_of_death \
             FROM authors ORDER BY family_name ASC",
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(rows.into_iter().map(Author::from).collect())
    }

    async fn find_by_id(&self, author_id: AuthorId) -> AppResult<Option<Author>> {
        let row: Option<AuthorRow> = sqlx::query_as(
            "SELECT author_id, first_name, family_name, date_of_birth, date_of_death \
             FROM authors WHERE author_id = $1",
        )
        .bind(author_id.raw())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(row.map(Author::from))
    }

    async fn update(&self, event: UpdateAuthor) -> AppResult<()> {
        let res = sqlx::query(
            "UPDATE authors SET \
             first_name = $2, family_name = $3, date_of_birth = $4, date_of_death = $5 \
             WHERE author_id = $1",
        )
        .bind(event.author_id.raw())
        .bind(&event.first_name)
        .bind(&event.family_name)
        .bind(event.date_of_birth)
        .bind(event.date_of_death)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("author not found".into()));
        }
        Ok(())
    }

    async fn delete(&self, event: DeleteAuthor) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM authors WHERE author_id = $1")
            .bind(event.author_id.raw())
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("author not found".into()));
        }
        Ok(())
    }

    async fn count(&self) -> AppResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM authors")
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(count)
    }
}
