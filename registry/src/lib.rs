use std::sync::Arc;

use adapter::{
    database::ConnectionPool,
    repository::{
        author::AuthorRepositoryImpl, book::BookRepositoryImpl,
        book_copy::BookCopyRepositoryImpl, genre::GenreRepositoryImpl,
    },
};
use kernel::repository::{
    author::AuthorRepository, book::BookRepository, book_copy::BookCopyRepository,
    genre::GenreRepository,
};

/// Dependency-injection container. Built once at startup around the shared
/// connection pool and cloned into every handler as axum state.
#[derive(Clone)]
pub struct AppRegistry {
    author_repository: Arc<dyn AuthorRepository>,
    genre_repository: Arc<dyn GenreRepository>,
    book_repository: Arc<dyn BookRepository>,
    book_copy_repository: Arc<dyn BookCopyRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        Self {
            author_repository: Arc::new(AuthorRepositoryImpl::new(pool.clone())),
            genre_repository: Arc::new(GenreRepositoryImpl::new(pool.clone())),
            book_repository: Arc::new(BookRepositoryImpl::new(pool.clone())),
            book_copy_repository: Arc::new(BookCopyRepositoryImpl::new(pool)),
        }
    }

    /// Wire the registry from already-built repositories; tests use this to
    /// swap in mocks.
    pub fn from_parts(
        author_repository: Arc<dyn AuthorRepository>,
        genre_repository: Arc<dyn GenreRepository>,
        book_repository: Arc<dyn BookRepository>,
        book_copy_repository: Arc<dyn BookCopyRepository>,
    ) -> Self {
        Self {
            author_repository,
            genre_repository,
            book_repository,
            book_copy_repository,
        }
    }

    pub fn author_repository(&self) -> Arc<dyn AuthorRepository> {
        self.author_repository.clone()
    }

    pub fn genre_repository(&self) -> Arc<dyn GenreRepository> {
        self.genre_repository.clone()
    }

    pub fn book_repository(&self) -> Arc<dyn BookRepository> {
        self.book_repository.clone()
    }

    pub fn book_copy_repository(&self) -> Arc<dyn BookCopyRepository> {
        self.book_copy_repository.clone()
    }
}
