use kernel::model::{
    book::{Book, BookAuthor},
    genre::Genre,
    id::{AuthorId, BookId, GenreId},
};
use serde::{Deserialize, Serialize};

use crate::{
    form::{book::BookDraft, FieldError},
    model::{author::AuthorView, book_copy::BookCopyView},
    presentation,
};

#[derive(Debug, Serialize)]
pub struct BookView {
    pub id: BookId,
    pub title: String,
    pub author: BookAuthorView,
    pub summary: String,
    pub isbn: String,
    pub genres: Vec<BookGenreView>,
    pub url: String,
}

impl From<Book> for BookView {
    fn from(book: Book) -> Self {
        let url = presentation::detail_url("book", book.id);
        Self {
            id: book.id,
            title: book.title,
            author: book.author.into(),
            summary: book.summary,
            isbn: book.isbn,
            genres: book.genres.into_iter().map(BookGenreView::from).collect(),
            url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookAuthorView {
    pub id: AuthorId,
    pub name: String,
    pub url: String,
}

impl From<BookAuthor> for BookAuthorView {
    fn from(author: BookAuthor) -> Self {
        let name = presentation::book_author_name(&author);
        let url = presentation::detail_url("author", author.id);
        Self {
            id: author.id,
            name,
            url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookGenreView {
    pub id: GenreId,
    pub name: String,
    pub url: String,
}

impl From<Genre> for BookGenreView {
    fn from(genre: Genre) -> Self {
        let url = presentation::detail_url("genre", genre.id);
        Self {
            id: genre.id,
            name: genre.name,
            url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookListView {
    pub title: String,
    pub book_list: Vec<BookView>,
}

#[derive(Debug, Serialize)]
pub struct BookDetailView {
    pub title: String,
    pub book: BookView,
    pub book_instances: Vec<BookCopyView>,
}

/// Genre option for the book form, with the selection state the re-rendered
/// form needs to keep checkboxes ticked.
#[derive(Debug, Serialize)]
pub struct GenreOptionView {
    pub id: GenreId,
    pub name: String,
    pub checked: bool,
}

impl GenreOptionView {
    pub fn from_genres(genres: Vec<Genre>, selected: &[String]) -> Vec<Self> {
        genres
            .into_iter()
            .map(|genre| {
                let checked = selected.iter().any(|s| s == &genre.id.to_string());
                Self {
                    id: genre.id,
                    name: genre.name,
                    checked,
                }
            })
            .collect()
    }
}

#[derive(Debug, Serialize)]
pub struct BookFormView {
    pub title: String,
    pub authors: Vec<AuthorView>,
    pub genres: Vec<GenreOptionView>,
    pub book: Option<BookDraft>,
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Serialize)]
pub struct BookDeleteView {
    pub title: String,
    pub book: BookView,
    pub bookinstances: Vec<BookCopyView>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteBookFormData {
    #[serde(default)]
    pub bookid: String,
}

/// Collection counts for the catalog home page.
#[derive(Debug, Serialize)]
pub struct IndexView {
    pub title: String,
    pub book_count: i64,
    pub book_instance_count: i64,
    pub book_instance_available_count: i64,
    pub author_count: i64,
    pub genre_count: i64,
}
