use crate::model::id::{AuthorId, BookId, GenreId};

#[derive(Debug)]
pub struct CreateBook {
    pub title: String,
    pub author_id: AuthorId,
    pub summary: String,
    pub isbn: String,
    pub genre_ids: Vec<GenreId>,
}

// Updates replace the stored fields and the whole genre set.
#[derive(Debug)]
pub struct UpdateBook {
    pub book_id: BookId,
    pub title: String,
    pub author_id: AuthorId,
    pub summary: String,
    pub isbn: String,
    pub genre_ids: Vec<GenreId>,
}

#[derive(Debug)]
pub struct DeleteBook {
    pub book_id: BookId,
}
