use crate::model::id::GenreId;

#[derive(Debug)]
pub struct CreateGenre {
    pub name: String,
}

#[derive(Debug)]
pub struct UpdateGenre {
    pub genre_id: GenreId,
    pub name: String,
}

#[derive(Debug)]
pub struct DeleteGenre {
    pub genre_id: GenreId,
}
