use chrono::NaiveDate;
use kernel::model::{author::Author, id::AuthorId};
use serde::{Deserialize, Serialize};

use crate::{
    form::{author::AuthorDraft, FieldError},
    model::book::BookView,
    presentation,
};

#[derive(Debug, Serialize)]
pub struct AuthorView {
    pub id: AuthorId,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
    pub name: String,
    pub lifespan: String,
    pub url: String,
}

impl From<Author> for AuthorView {
    fn from(author: Author) -> Self {
        let name = presentation::display_name(&author);
        let lifespan = presentation::lifespan(&author);
        let url = presentation::detail_url("author", author.id);
        Self {
            id: author.id,
            first_name: author.first_name,
            family_name: author.family_name,
            date_of_birth: author.date_of_birth,
            date_of_death: author.date_of_death,
            name,
            lifespan,
            url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthorListView {
    pub title: String,
    pub author_list: Vec<AuthorView>,
}

#[derive(Debug, Serialize)]
pub struct AuthorDetailView {
    pub title: String,
    pub author: AuthorView,
    pub author_books: Vec<BookView>,
}

#[derive(Debug, Serialize)]
pub struct AuthorFormView {
    pub title: String,
    pub author: AuthorDraft,
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Serialize)]
pub struct AuthorDeleteView {
    pub title: String,
    pub author: AuthorView,
    pub author_books: Vec<BookView>,
}

/// Delete confirmations post the target id as a form field.
#[derive(Debug, Deserialize)]
pub struct DeleteAuthorFormData {
    #[serde(default)]
    pub authorid: String,
}
