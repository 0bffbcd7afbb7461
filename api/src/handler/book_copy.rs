use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use axum_extra::extract::Form;
use kernel::model::{book_copy::event::DeleteBookCopy, id::BookCopyId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    form::book_copy::{validate_book_copy, BookCopyDraft, BookCopyFormData},
    model::book_copy::{
        BookCopyDeleteView, BookCopyDetailView, BookCopyFormView, BookCopyListView, BookCopyView,
        BookOptionView, DeleteBookCopyFormData,
    },
    presentation,
};

const COPY_LIST_URL: &str = "/catalog/bookinstances";

fn parse_copy_id(raw: &str) -> AppResult<BookCopyId> {
    raw.parse()
        .map_err(|_| AppError::EntityNotFound(format!("book copy {raw} not found")))
}

pub async fn show_book_copy_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookCopyListView>> {
    let copies = registry.book_copy_repository().find_all().await?;
    Ok(Json(BookCopyListView {
        title: "Book Instance List".into(),
        bookinstance_list: copies.into_iter().map(BookCopyView::from).collect(),
    }))
}

pub async fn show_book_copy_detail(
    State(registry): State<AppRegistry>,
    Path(copy_id): Path<String>,
) -> AppResult<Json<BookCopyDetailView>> {
    let copy_id = parse_copy_id(&copy_id)?;
    let copy = registry
        .book_copy_repository()
        .find_by_id(copy_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("book copy does not exist".into()))?;
    Ok(Json(BookCopyDetailView {
        title: format!("Copy: {}", copy.book.title),
        book_instance: copy.into(),
    }))
}

async fn load_book_options(registry: &AppRegistry) -> AppResult<Vec<BookOptionView>> {
    let books = registry.book_repository().find_all().await?;
    Ok(books
        .into_iter()
        .map(|b| BookOptionView {
            id: b.id,
            title: b.title,
        })
        .collect())
}

pub async fn show_book_copy_create_form(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookCopyFormView>> {
    let book_list = load_book_options(&registry).await?;
    Ok(Json(BookCopyFormView {
        title: "Create BookInstance".into(),
        book_list,
        bookinstance: None,
        errors: Vec::new(),
    }))
}

pub async fn register_book_copy(
    State(registry): State<AppRegistry>,
    Form(data): Form<BookCopyFormData>,
) -> AppResult<Response> {
    let outcome = validate_book_copy(data);
    if !outcome.is_valid() {
        let book_list = load_book_options(&registry).await?;
        return Ok(Json(BookCopyFormView {
            title: "Create BookInstance".into(),
            book_list,
            bookinstance: Some(outcome.draft),
            errors: outcome.errors,
        })
        .into_response());
    }
    let copy_id = registry
        .book_copy_repository()
        .create(outcome.draft.try_into()?)
        .await?;
    Ok(Redirect::to(&presentation::detail_url("bookinstance", copy_id)).into_response())
}

pub async fn show_book_copy_update_form(
    State(registry): State<AppRegistry>,
    Path(copy_id): Path<String>,
) -> AppResult<Json<BookCopyFormView>> {
    let copy_id = parse_copy_id(&copy_id)?;
    let copy = registry
        .book_copy_repository()
        .find_by_id(copy_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("book copy does not exist".into()))?;
    let book_list = load_book_options(&registry).await?;
    Ok(Json(BookCopyFormView {
        title: "Update BookInstance".into(),
        book_list,
        bookinstance: Some(BookCopyDraft::from(copy)),
        errors: Vec::new(),
    }))
}

pub async fn modify_book_copy(
    State(registry): State<AppRegistry>,
    Path(copy_id): Path<String>,
    Form(data): Form<BookCopyFormData>,
) -> AppResult<Response> {
    let copy_id = parse_copy_id(&copy_id)?;
    let outcome = validate_book_copy(data);
    if !outcome.is_valid() {
        let book_list = load_book_options(&registry).await?;
        return Ok(Json(BookCopyFormView {
            title: "Update BookInstance".into(),
            book_list,
            bookinstance: Some(outcome.draft),
            errors: outcome.errors,
        })
        .into_response());
    }
    registry
        .book_copy_repository()
        .update(outcome.draft.into_update(copy_id)?)
        .await?;
    Ok(Redirect::to(&presentation::detail_url("bookinstance", copy_id)).into_response())
}

pub async fn show_book_copy_delete_confirmation(
    State(registry): State<AppRegistry>,
    Path(copy_id): Path<String>,
) -> AppResult<Response> {
    let Ok(copy_id) = copy_id.parse::<BookCopyId>() else {
        return Ok(Redirect::to(COPY_LIST_URL).into_response());
    };
    let Some(copy) = registry.book_copy_repository().find_by_id(copy_id).await? else {
        return Ok(Redirect::to(COPY_LIST_URL).into_response());
    };
    Ok(Json(BookCopyDeleteView {
        title: "Delete BookInstance".into(),
        bookinstance: copy.into(),
    })
    .into_response())
}

// Nothing references a copy, so deletion is never guarded.
pub async fn remove_book_copy(
    State(registry): State<AppRegistry>,
    Form(data): Form<DeleteBookCopyFormData>,
) -> AppResult<Response> {
    let Ok(copy_id) = data.biid.parse::<BookCopyId>() else {
        return Ok(Redirect::to(COPY_LIST_URL).into_response());
    };
    let repo = registry.book_copy_repository();
    if repo.find_by_id(copy_id).await?.is_some() {
        repo.delete(DeleteBookCopy {
            book_copy_id: copy_id,
        })
        .await?;
    }
    Ok(Redirect::to(COPY_LIST_URL).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::http::{header::LOCATION, StatusCode};
    use chrono::Utc;
    use kernel::model::{
        book_copy::{BookCopy, CopyBook, CopyStatus},
        id::BookId,
    };
    use kernel::repository::{
        author::MockAuthorRepository, book::MockBookRepository,
        book_copy::MockBookCopyRepository, genre::MockGenreRepository,
    };

    fn registry(
        copy_repo: MockBookCopyRepository,
        book_repo: MockBookRepository,
    ) -> AppRegistry {
        AppRegistry::from_parts(
            Arc::new(MockAuthorRepository::new()),
            Arc::new(MockGenreRepository::new()),
            Arc::new(book_repo),
            Arc::new(copy_repo),
        )
    }

    fn sample_copy(id: BookCopyId) -> BookCopy {
        BookCopy {
            id,
            book: CopyBook {
                id: BookId::new(),
                title: "War and Peace".into(),
            },
            imprint: "Penguin Classics, 2007".into(),
            status: CopyStatus::Available,
            due_back: Utc::now(),
        }
    }

    #[tokio::test]
    async fn deleting_a_copy_is_unguarded_and_redirects() {
        let copy_id = BookCopyId::new();
        let copy = sample_copy(copy_id);

        let mut copy_repo = MockBookCopyRepository::new();
        copy_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(copy.clone())));
        copy_repo.expect_delete().times(1).returning(|_| Ok(()));

        let registry = registry(copy_repo, MockBookRepository::new());
        let response = remove_book_copy(
            State(registry),
            Form(DeleteBookCopyFormData {
                biid: copy_id.to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], COPY_LIST_URL);
    }

    #[tokio::test]
    async fn a_malformed_delete_id_redirects_without_touching_storage() {
        let mut copy_repo = MockBookCopyRepository::new();
        copy_repo.expect_find_by_id().times(0);
        copy_repo.expect_delete().times(0);

        let registry = registry(copy_repo, MockBookRepository::new());
        let response = remove_book_copy(
            State(registry),
            Form(DeleteBookCopyFormData {
                biid: "not-a-uuid".into(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], COPY_LIST_URL);
    }

    #[tokio::test]
    async fn a_missing_copy_detail_is_not_found() {
        let mut copy_repo = MockBookCopyRepository::new();
        copy_repo.expect_find_by_id().returning(|_| Ok(None));

        let registry = registry(copy_repo, MockBookRepository::new());
        let result = show_book_copy_detail(
            State(registry),
            Path(BookCopyId::new().to_string()),
        )
        .await;

        assert!(matches!(result, Err(AppError::EntityNotFound(_))));
    }
}
