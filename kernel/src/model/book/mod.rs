use super::{
    genre::Genre,
    id::{AuthorId, BookId},
};

pub mod event;

// The store returns books with the author reference and the genre set
// already populated; lists would otherwise pay one query per row.
#[derive(Debug, Clone)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: BookAuthor,
    pub summary: String,
    pub isbn: String,
    pub genres: Vec<Genre>,
}

/// Author fields a book rendering needs.
#[derive(Debug, Clone)]
pub struct BookAuthor {
    pub id: AuthorId,
    pub first_name: String,
    pub family_name: String,
}
