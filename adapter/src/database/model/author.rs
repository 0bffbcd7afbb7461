use chrono::NaiveDate;
use kernel::model::author::Author;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
pub struct AuthorRow {
    pub author_id: Uuid,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl From<AuthorRow> for Author {
    fn from(row: AuthorRow) -> Self {
        Self {
            id: row.author_id.into(),
            first_name: row.first_name,
            family_name: row.family_name,
            date_of_birth: row.date_of_birth,
            date_of_death: row.date_of_death,
        }
    }
}
