use kernel::model::{genre::Genre, id::GenreId};
use serde::{Deserialize, Serialize};

use crate::{
    form::{genre::GenreDraft, FieldError},
    model::book::BookView,
    presentation,
};

#[derive(Debug, Serialize)]
pub struct GenreView {
    pub id: GenreId,
    pub name: String,
    pub url: String,
}

impl From<Genre> for GenreView {
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
pub struct GenreListView {
    pub title: String,
    pub genre_list: Vec<GenreView>,
}

#[derive(Debug, Serialize)]
pub struct GenreDetailView {
    pub title: String,
    pub genre: GenreView,
    pub genre_books: Vec<BookView>,
}

#[derive(Debug, Serialize)]
pub struct GenreFormView {
    pub title: String,
    pub genre: GenreDraft,
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Serialize)]
pub struct GenreDeleteView {
    pub title: String,
    pub genre: GenreView,
    pub books: Vec<BookView>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteGenreFormData {
    #[serde(default)]
    pub genreid: String,
}
