use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use axum_extra::extract::Form;
use kernel::model::{book::event::DeleteBook, deletion::DeletionCheck, id::BookId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    form::book::{validate_book, BookDraft, BookFormData},
    model::{
        author::AuthorView,
        book::{
            BookDeleteView, BookDetailView, BookFormView, BookListView, BookView,
            DeleteBookFormData, GenreOptionView, IndexView,
        },
        book_copy::BookCopyView,
    },
    presentation,
};

const BOOK_LIST_URL: &str = "/catalog/books";

fn parse_book_id(raw: &str) -> AppResult<BookId> {
    raw.parse()
        .map_err(|_| AppError::EntityNotFound(format!("book {raw} not found")))
}

pub async fn show_catalog_index(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<IndexView>> {
    let book_repo = registry.book_repository();
    let book_copy_repo = registry.book_copy_repository();
    let author_repo = registry.author_repository();
    let genre_repo = registry.genre_repository();
    let (
        book_count,
        book_instance_count,
        book_instance_available_count,
        author_count,
        genre_count,
    ) = tokio::try_join!(
        book_repo.count(),
        book_copy_repo.count(),
        book_copy_repo.count_available(),
        author_repo.count(),
        genre_repo.count(),
    )?;
    Ok(Json(IndexView {
        title: "Local Library Home".into(),
        book_count,
        book_instance_count,
        book_instance_available_count,
        author_count,
        genre_count,
    }))
}

pub async fn show_book_list(State(registry): State<AppRegistry>) -> AppResult<Json<BookListView>> {
    let books = registry.book_repository().find_all().await?;
    Ok(Json(BookListView {
        title: "Book List".into(),
        book_list: books.into_iter().map(BookView::from).collect(),
    }))
}

pub async fn show_book_detail(
    State(registry): State<AppRegistry>,
    Path(book_id): Path<String>,
) -> AppResult<Json<BookDetailView>> {
    let book_id = parse_book_id(&book_id)?;
    let book_repo = registry.book_repository();
    let book_copy_repo = registry.book_copy_repository();
    let (book, book_instances) = tokio::try_join!(
        book_repo.find_by_id(book_id),
        book_copy_repo.find_by_book_id(book_id),
    )?;
    let book = book.ok_or_else(|| AppError::EntityNotFound("book does not exist".into()))?;
    Ok(Json(BookDetailView {
        title: book.title.clone(),
        book: book.into(),
        book_instances: book_instances.into_iter().map(BookCopyView::from).collect(),
    }))
}

// The form needs every author and genre for its select and checkbox lists.
async fn load_form_choices(
    registry: &AppRegistry,
    selected_genres: &[String],
) -> AppResult<(Vec<AuthorView>, Vec<GenreOptionView>)> {
    let author_repo = registry.author_repository();
    let genre_repo = registry.genre_repository();
    let (authors, genres) = tokio::try_join!(
        author_repo.find_all(),
        genre_repo.find_all(),
    )?;
    Ok((
        authors.into_iter().map(AuthorView::from).collect(),
        GenreOptionView::from_genres(genres, selected_genres),
    ))
}

pub async fn show_book_create_form(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookFormView>> {
    let (authors, genres) = load_form_choices(&registry, &[]).await?;
    Ok(Json(BookFormView {
        title: "Create Book".into(),
        authors,
        genres,
        book: None,
        errors: Vec::new(),
    }))
}

pub async fn register_book(
    State(registry): State<AppRegistry>,
    Form(data): Form<BookFormData>,
) -> AppResult<Response> {
    let outcome = validate_book(data);
    if !outcome.is_valid() {
        let (authors, genres) = load_form_choices(&registry, &outcome.draft.genre).await?;
        return Ok(Json(BookFormView {
            title: "Create Book".into(),
            authors,
            genres,
            book: Some(outcome.draft),
            errors: outcome.errors,
        })
        .into_response());
    }
    let book_id = registry
        .book_repository()
        .create(outcome.draft.try_into()?)
        .await?;
    Ok(Redirect::to(&presentation::detail_url("book", book_id)).into_response())
}

pub async fn show_book_update_form(
    State(registry): State<AppRegistry>,
    Path(book_id): Path<String>,
) -> AppResult<Json<BookFormView>> {
    let book_id = parse_book_id(&book_id)?;
    let book = registry
        .book_repository()
        .find_by_id(book_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("book does not exist".into()))?;
    let draft = BookDraft::from(book);
    let (authors, genres) = load_form_choices(&registry, &draft.genre).await?;
    Ok(Json(BookFormView {
        title: "Update Book".into(),
        authors,
        genres,
        book: Some(draft),
        errors: Vec::new(),
    }))
}

pub async fn modify_book(
    State(registry): State<AppRegistry>,
    Path(book_id): Path<String>,
    Form(data): Form<BookFormData>,
) -> AppResult<Response> {
    let book_id = parse_book_id(&book_id)?;
    let outcome = validate_book(data);
    if !outcome.is_valid() {
        let (authors, genres) = load_form_choices(&registry, &outcome.draft.genre).await?;
        return Ok(Json(BookFormView {
            title: "Update Book".into(),
            authors,
            genres,
            book: Some(outcome.draft),
            errors: outcome.errors,
        })
        .into_response());
    }
    registry
        .book_repository()
        .update(outcome.draft.into_update(book_id)?)
        .await?;
    Ok(Redirect::to(&presentation::detail_url("book", book_id)).into_response())
}

pub async fn show_book_delete_confirmation(
    State(registry): State<AppRegistry>,
    Path(book_id): Path<String>,
) -> AppResult<Response> {
    let Ok(book_id) = book_id.parse::<BookId>() else {
        return Ok(Redirect::to(BOOK_LIST_URL).into_response());
    };
    let book_repo = registry.book_repository();
    let book_copy_repo = registry.book_copy_repository();
    let (book, copies) = tokio::try_join!(
        book_repo.find_by_id(book_id),
        book_copy_repo.find_by_book_id(book_id),
    )?;
    let Some(book) = book else {
        return Ok(Redirect::to(BOOK_LIST_URL).into_response());
    };
    Ok(Json(BookDeleteView {
        title: "Delete Book".into(),
        book: book.into(),
        bookinstances: copies.into_iter().map(BookCopyView::from).collect(),
    })
    .into_response())
}

pub async fn remove_book(
    State(registry): State<AppRegistry>,
    Form(data): Form<DeleteBookFormData>,
) -> AppResult<Response> {
    let Ok(book_id) = data.bookid.parse::<BookId>() else {
        return Ok(Redirect::to(BOOK_LIST_URL).into_response());
    };
    let book_repo = registry.book_repository();
    let book_copy_repo = registry.book_copy_repository();
    let (book, copies) = tokio::try_join!(
        book_repo.find_by_id(book_id),
        book_copy_repo.find_by_book_id(book_id),
    )?;
    // Copies guard book deletion on the POST path as well as the
    // confirmation page.
    let check = DeletionCheck::new(copies);
    if !check.allowed() {
        let Some(book) = book else {
            return Ok(Redirect::to(BOOK_LIST_URL).into_response());
        };
        return Ok(Json(BookDeleteView {
            title: "Delete Book".into(),
            book: book.into(),
            bookinstances: check
                .into_blockers()
                .into_iter()
                .map(BookCopyView::from)
                .collect(),
        })
        .into_response());
    }
    if book.is_some() {
        registry
            .book_repository()
            .delete(DeleteBook { book_id })
            .await?;
    }
    Ok(Redirect::to(BOOK_LIST_URL).into_response())
}
