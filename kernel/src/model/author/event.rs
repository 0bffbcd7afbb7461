use chrono::NaiveDate;

use crate::model::id::AuthorId;

#[derive(Debug)]
pub struct CreateAuthor {
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

// Updates replace all four stored fields.
#[derive(Debug)]
pub struct UpdateAuthor {
    pub author_id: AuthorId,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

#[derive(Debug)]
pub struct DeleteAuthor {
    pub author_id: AuthorId,
}
