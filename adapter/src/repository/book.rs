use std::collections::HashMap;

use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        book::{
            event::{CreateBook, DeleteBook, UpdateBook},
            Book,
        },
        genre::Genre,
        id::{AuthorId, BookId, GenreId},
    },
    repository::book::BookRepository,
};
use shared::error::{AppError, AppResult};
use uuid::Uuid;

use crate::database::{
    model::book::{BookGenreRow, BookRow},
    ConnectionPool,
};

const BOOK_SELECT: &str = "SELECT \
     b.book_id, b.title, b.summary, b.isbn, \
     a.author_id, a.first_name AS author_first_name, a.family_name AS author_family_name \
     FROM books b INNER JOIN authors a ON a.author_id = b.author_id";

#[derive(new)]
pub struct BookRepositoryImpl {
    db: ConnectionPool,
}

impl BookRepositoryImpl {
    // Populates the genre sets for a page of book rows with a single
    // grouped query instead of one query per row.
    async fn attach_genres(&self, rows: Vec<BookRow>) -> AppResult<Vec<Book>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let book_ids: Vec<Uuid> = rows.iter().map(|r| r.book_id).collect();
        let genre_rows: Vec<BookGenreRow> = sqlx::query_as(
            "SELECT bg.book_id, g.genre_id, g.name \
             FROM book_genres bg INNER JOIN genres g ON g.genre_id = bg.genre_id \
             WHERE bg.book_id = ANY($1) ORDER BY g.name ASC",
        )
        .bind(&book_ids)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let mut genres_by_book: HashMap<Uuid, Vec<Genre>> = HashMap::new();
        for row in genre_rows {
            genres_by_book.entry(row.book_id).or_default().push(Genre {
                id: row.genre_id.into(),
                name: row.name,
            });
        }
        Ok(rows
            .into_iter()
            .map(|row| {
                let genres = genres_by_book.remove(&row.book_id).unwrap_or_default();
                row.into_book(genres)
            })
            .collect())
    }
}

#[async_trait]
impl BookRepository for BookRepositoryImpl {
    async fn create(&self, event: CreateBook) -> AppResult<BookId> {
        let book_id = BookId::new();
        let mut tx = self.db.begin().await?;
        sqlx::query(
            "INSERT INTO books (book_id, title, author_id, summary, isbn) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(book_id.raw())
        .bind(&event.title)
        .bind(event.author_id.raw())
        .bind(&event.summary)
        .bind(&event.isbn)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        insert_genre_set(&mut tx, book_id, &event.genre_ids).await?;
        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(book_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let rows: Vec<BookRow> =
            sqlx::query_as(&format!("{BOOK_SELECT} ORDER BY b.title ASC"))
                .fetch_all(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;
        self.attach_genres(rows).await
    }

    async fn find_by_id(&self, book_id: BookId) -> AppResult<Option<Book>> {
        let row: Option<BookRow> =
            sqlx::query_as(&format!("{BOOK_SELECT} WHERE b.book_id = $1"))
                .bind(book_id.raw())
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;
        let Some(row) = row else {
            return Ok(None);
        };
        let mut books = self.attach_genres(vec![row]).await?;
        Ok(books.pop())
    }

    async fn find_by_author_id(&self, author_id: AuthorId) -> AppResult<Vec<Book>> {
        let rows: Vec<BookRow> = sqlx::query_as(&format!(
            "{BOOK_SELECT} WHERE b.author_id = $1 ORDER BY b.title ASC"
        ))
        .bind(author_id.raw())
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        self.attach_genres(rows).await
    }

    async fn find_by_genre_id(&self, genre_id: GenreId) -> AppResult<Vec<Book>> {
        // Membership in the genre set, realized through the join table.
        let rows: Vec<BookRow> = sqlx::query_as(&format!(
            "{BOOK_SELECT} INNER JOIN book_genres bg ON bg.book_id = b.book_id \
             WHERE bg.genre_id = $1 ORDER BY b.title ASC"
        ))
        .bind(genre_id.raw())
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        self.attach_genres(rows).await
    }

    async fn update(&self, event: UpdateBook) -> AppResult<()> {
        let mut tx = self.db.begin().await?;
        let res = sqlx::query(
            "UPDATE books SET title = $2, author_id = $3, summary = $4, isbn = $5 \
             WHERE book_id = $1",
        )
        .bind(event.book_id.raw())
        .bind(&event.title)
        .bind(event.author_id.raw())
        .bind(&event.summary)
        .bind(&event.isbn)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("book not found".into()));
        }
        sqlx::query("DELETE FROM book_genres WHERE book_id = $1")
            .bind(event.book_id.raw())
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        insert_genre_set(&mut tx, event.book_id, &event.genre_ids).await?;
        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(())
    }

    async fn delete(&self, event: DeleteBook) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM books WHERE book_id = $1")
            .bind(event.book_id.raw())
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("book not found".into()));
        }
        Ok(())
    }

    async fn count(&self) -> AppResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM books")
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(count)
    }
}

async fn insert_genre_set(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    book_id: BookId,
    genre_ids: &[GenreId],
) -> AppResult<()> {
    for genre_id in genre_ids {
        sqlx::query("INSERT INTO book_genres (book_id, genre_id) VALUES ($1, $2)")
            .bind(book_id.raw())
            .bind(genre_id.raw())
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
    }
    Ok(())
}
