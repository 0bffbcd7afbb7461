use chrono::NaiveDate;

use super::id::AuthorId;

pub mod event;

/// No ordering is enforced between the two dates; the source data has
/// authors with a death date and no birth date.
#[derive(Debug, Clone)]
pub struct Author {
    pub id: AuthorId,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}
