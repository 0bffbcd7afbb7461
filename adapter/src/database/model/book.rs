use kernel::model::{
    book::{Book, BookAuthor},
    genre::Genre,
};
use uuid::Uuid;

#[derive(sqlx::FromRow)]
pub struct BookRow {
    pub book_id: Uuid,
    pub title: String,
    pub summary: String,
    pub isbn: String,
    pub author_id: Uuid,
    pub author_first_name: String,
    pub author_family_name: String,
}

impl BookRow {
    pub fn into_book(self, genres: Vec<Genre>) -> Book {
        Book {
            id: self.book_id.into(),
            title: self.title,
            author: BookAuthor {
                id: self.author_id.into(),
                first_name: self.author_first_name,
                family_name: self.author_family_name,
            },
            summary: self.summary,
            isbn: self.isbn,
            genres,
        }
    }
}

/// One genre-set membership, joined with the genre name.
#[derive(sqlx::FromRow)]
pub struct BookGenreRow {
    pub book_id: Uuid,
    pub genre_id: Uuid,
    pub name: String,
}
