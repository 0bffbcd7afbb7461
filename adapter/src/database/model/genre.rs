use kernel::model::genre::Genre;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
pub struct GenreRow {
    pub genre_id: Uuid,
    pub name: String,
}

impl From<GenreRow> for Genre {
    fn from(row: GenreRow) -> Self {
        Self {
            id: row.genre_id.into(),
            name: row.name,
        }
    }
}
