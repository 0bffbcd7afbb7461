use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use axum_extra::extract::Form;
use kernel::model::{author::event::DeleteAuthor, deletion::DeletionCheck, id::AuthorId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    form::author::{validate_author, AuthorDraft, AuthorFormData},
    model::{
        author::{
            AuthorDeleteView, AuthorDetailView, AuthorFormView, AuthorListView, AuthorView,
            DeleteAuthorFormData,
        },
        book::BookView,
    },
    presentation,
};

const AUTHOR_LIST_URL: &str = "/catalog/authors";

// Malformed ids surface as not-found, never as a crash or a 4xx of their own.
fn parse_author_id(raw: &str) -> AppResult<AuthorId> {
    raw.parse()
        .map_err(|_| AppError::EntityNotFound(format!("author {raw} not found")))
}

pub async fn show_author_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AuthorListView>> {
    let authors = registry.author_repository().find_all().await?;
    Ok(Json(AuthorListView {
        title: "Author List".into(),
        author_list: authors.into_iter().map(AuthorView::from).collect(),
    }))
}

pub async fn show_author_detail(
    State(registry): State<AppRegistry>,
    Path(author_id): Path<String>,
) -> AppResult<Json<AuthorDetailView>> {
    let author_id = parse_author_id(&author_id)?;
    let author_repo = registry.author_repository();
    let book_repo = registry.book_repository();
    let (author, author_books) = tokio::try_join!(
        author_repo.find_by_id(author_id),
        book_repo.find_by_author_id(author_id),
    )?;
    let author =
        author.ok_or_else(|| AppError::EntityNotFound("author does not exist".into()))?;
    Ok(Json(AuthorDetailView {
        title: presentation::display_name(&author),
        author: author.into(),
        author_books: author_books.into_iter().map(BookView::from).collect(),
    }))
}

pub async fn show_author_create_form() -> Json<AuthorFormView> {
    Json(AuthorFormView {
        title: "Create Author".into(),
        author: AuthorDraft::default(),
        errors: Vec::new(),
    })
}

pub async fn register_author(
    State(registry): State<AppRegistry>,
    Form(data): Form<AuthorFormData>,
) -> AppResult<Response> {
    let outcome = validate_author(data);
    if !outcome.is_valid() {
        // Form redisplay carries the error list on a success status.
        return Ok(Json(AuthorFormView {
            title: "Create Author".into(),
            author: outcome.draft,
            errors: outcome.errors,
        })
        .into_response());
    }
    let author_id = registry
        .author_repository()
        .create(outcome.draft.into())
        .await?;
    Ok(Redirect::to(&presentation::detail_url("author", author_id)).into_response())
}

pub async fn show_author_update_form(
    State(registry): State<AppRegistry>,
    Path(author_id): Path<String>,
) -> AppResult<Json<AuthorFormView>> {
    let author_id = parse_author_id(&author_id)?;
    let author = registry
        .author_repository()
        .find_by_id(author_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("author does not exist".into()))?;
    Ok(Json(AuthorFormView {
        title: "Update Author".into(),
        author: author.into(),
        errors: Vec::new(),
    }))
}

pub async fn modify_author(
    State(registry): State<AppRegistry>,
    Path(author_id): Path<String>,
    Form(data): Form<AuthorFormData>,
) -> AppResult<Response> {
    let author_id = parse_author_id(&author_id)?;
    let outcome = validate_author(data);
    if !outcome.is_valid() {
        return Ok(Json(AuthorFormView {
            title: "Update Author".into(),
            author: outcome.draft,
            errors: outcome.errors,
        })
        .into_response());
    }
    registry
        .author_repository()
        .update(outcome.draft.into_update(author_id))
        .await?;
    Ok(Redirect::to(&presentation::detail_url("author", author_id)).into_response())
}

pub async fn show_author_delete_confirmation(
    State(registry): State<AppRegistry>,
    Path(author_id): Path<String>,
) -> AppResult<Response> {
    let Ok(author_id) = author_id.parse::<AuthorId>() else {
        return Ok(Redirect::to(AUTHOR_LIST_URL).into_response());
    };
    let author_repo = registry.author_repository();
    let book_repo = registry.book_repository();
    let (author, author_books) = tokio::try_join!(
        author_repo.find_by_id(author_id),
        book_repo.find_by_author_id(author_id),
    )?;
    // A missing parent redirects back to the list and stops.
    let Some(author) = author else {
        return Ok(Redirect::to(AUTHOR_LIST_URL).into_response());
    };
    Ok(Json(AuthorDeleteView {
        title: "Delete Author".into(),
        author: author.into(),
        author_books: author_books.into_iter().map(BookView::from).collect(),
    })
    .into_response())
}

pub async fn remove_author(
    State(registry): State<AppRegistry>,
    Form(data): Form<DeleteAuthorFormData>,
) -> AppResult<Response> {
    let Ok(author_id) = data.authorid.parse::<AuthorId>() else {
        return Ok(Redirect::to(AUTHOR_LIST_URL).into_response());
    };
    let author_repo = registry.author_repository();
    let book_repo = registry.book_repository();
    let (author, author_books) = tokio::try_join!(
        author_repo.find_by_id(author_id),
        book_repo.find_by_author_id(author_id),
    )?;
    let check = DeletionCheck::new(author_books);
    if !check.allowed() {
        // Blocked deletion is a normal outcome: show the confirmation view
        // again with the blocking books.
        let Some(author) = author else {
            return Ok(Redirect::to(AUTHOR_LIST_URL).into_response());
        };
        return Ok(Json(AuthorDeleteView {
            title: "Delete Author".into(),
            author: author.into(),
            author_books: check
                .into_blockers()
                .into_iter()
                .map(BookView::from)
                .collect(),
        })
        .into_response());
    }
    if author.is_some() {
        registry
            .author_repository()
            .delete(DeleteAuthor { author_id })
            .await?;
    }
    Ok(Redirect::to(AUTHOR_LIST_URL).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::to_bytes;
    use axum::http::{header::LOCATION, StatusCode};
    use kernel::model::{
        author::Author,
        book::{Book, BookAuthor},
        id::BookId,
    };
    use kernel::repository::{
        author::MockAuthorRepository, book::MockBookRepository,
        book_copy::MockBookCopyRepository, genre::MockGenreRepository,
    };

    fn registry(
        author_repo: MockAuthorRepository,
        book_repo: MockBookRepository,
    ) -> AppRegistry {
        AppRegistry::from_parts(
            Arc::new(author_repo),
            Arc::new(MockGenreRepository::new()),
            Arc::new(book_repo),
            Arc::new(MockBookCopyRepository::new()),
        )
    }

    fn tolstoy(id: AuthorId) -> Author {
        Author {
            id,
            first_name: "Leo".into(),
            family_name: "Tolstoy".into(),
            date_of_birth: None,
            date_of_death: None,
        }
    }

    fn book_by(author: &Author) -> Book {
        Book {
            id: BookId::new(),
            title: "War and Peace".into(),
            author: BookAuthor {
                id: author.id,
                first_name: author.first_name.clone(),
                family_name: author.family_name.clone(),
            },
            summary: "A novel about the Napoleonic wars.".into(),
            isbn: "9781400079988".into(),
            genres: Vec::new(),
        }
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn create_with_errors_redisplays_the_form_with_status_ok() {
        let mut author_repo = MockAuthorRepository::new();
        author_repo.expect_create().times(0);
        let registry = registry(author_repo, MockBookRepository::new());

        let response = register_author(
            State(registry),
            Form(AuthorFormData {
                first_name: " Leo ".into(),
                ..Default::default()
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let view = body_json(response).await;
        assert!(!view["errors"].as_array().unwrap().is_empty());
        // Sanitized values come back so the form can be pre-filled.
        assert_eq!(view["author"]["first_name"], "Leo");
    }

    #[tokio::test]
    async fn successful_create_redirects_to_the_detail_url() {
        let author_id = AuthorId::new();
        let mut author_repo = MockAuthorRepository::new();
        author_repo
            .expect_create()
            .returning(move |_| Ok(author_id));
        let registry = registry(author_repo, MockBookRepository::new());

        let response = register_author(
            State(registry),
            Form(AuthorFormData {
                first_name: "Leo".into(),
                family_name: "Tolstoy".into(),
                ..Default::default()
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()[LOCATION],
            format!("/catalog/author/{author_id}")
        );
    }

    #[tokio::test]
    async fn detail_of_a_malformed_id_is_not_found() {
        let registry = registry(MockAuthorRepository::new(), MockBookRepository::new());
        let err = show_author_detail(State(registry), Path("not-an-id".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EntityNotFound(_)));
    }

    #[tokio::test]
    async fn delete_is_blocked_while_books_reference_the_author() {
        let author_id = AuthorId::new();
        let author = tolstoy(author_id);
        let blocker = book_by(&author);

        let mut author_repo = MockAuthorRepository::new();
        let found = author.clone();
        author_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(found.clone())));
        author_repo.expect_delete().times(0);

        let mut book_repo = MockBookRepository::new();
        let blockers = vec![blocker];
        book_repo
            .expect_find_by_author_id()
            .returning(move |_| Ok(blockers.clone()));

        let registry = registry(author_repo, book_repo);
        let response = remove_author(
            State(registry),
            Form(DeleteAuthorFormData {
                authorid: author_id.to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let view = body_json(response).await;
        let blocking = view["author_books"].as_array().unwrap();
        assert_eq!(blocking.len(), 1);
        assert_eq!(blocking[0]["title"], "War and Peace");
    }

    #[tokio::test]
    async fn delete_proceeds_once_no_book_references_remain() {
        let author_id = AuthorId::new();
        let author = tolstoy(author_id);

        let mut author_repo = MockAuthorRepository::new();
        let found = author.clone();
        author_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(found.clone())));
        author_repo
            .expect_delete()
            .times(1)
            .returning(|_| Ok(()));

        let mut book_repo = MockBookRepository::new();
        book_repo
            .expect_find_by_author_id()
            .returning(|_| Ok(Vec::new()));

        let registry = registry(author_repo, book_repo);
        let response = remove_author(
            State(registry),
            Form(DeleteAuthorFormData {
                authorid: author_id.to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], AUTHOR_LIST_URL);
    }

    #[tokio::test]
    async fn delete_confirmation_of_a_missing_author_redirects_and_stops() {
        let mut author_repo = MockAuthorRepository::new();
        author_repo.expect_find_by_id().returning(|_| Ok(None));
        let mut book_repo = MockBookRepository::new();
        book_repo
            .expect_find_by_author_id()
            .returning(|_| Ok(Vec::new()));

        let registry = registry(author_repo, book_repo);
        let response =
            show_author_delete_confirmation(State(registry), Path(AuthorId::new().to_string()))
                .await
                .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], AUTHOR_LIST_URL);
    }

    // The full create -> blocked delete -> unblock -> delete cycle.
    #[tokio::test]
    async fn author_deletion_unblocks_after_the_referencing_book_is_gone() {
        let author_id = AuthorId::new();
        let author = tolstoy(author_id);
        assert_eq!(presentation::display_name(&author), "Tolstoy, Leo");
        let blocker = book_by(&author);

        let mut author_repo = MockAuthorRepository::new();
        let found = author.clone();
        author_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(found.clone())));
        author_repo
            .expect_delete()
            .times(1)
            .returning(|_| Ok(()));

        let mut book_repo = MockBookRepository::new();
        let blockers = vec![blocker];
        book_repo
            .expect_find_by_author_id()
            .times(1)
            .returning(move |_| Ok(blockers.clone()));
        book_repo
            .expect_find_by_author_id()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let registry = registry(author_repo, book_repo);

        let blocked = remove_author(
            State(registry.clone()),
            Form(DeleteAuthorFormData {
                authorid: author_id.to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(blocked.status(), StatusCode::OK);

        let allowed = remove_author(
            State(registry),
            Form(DeleteAuthorFormData {
                authorid: author_id.to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(allowed.status(), StatusCode::SEE_OTHER);
        assert_eq!(allowed.headers()[LOCATION], AUTHOR_LIST_URL);
    }
}
