use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use axum_extra::extract::Form;
use kernel::model::{deletion::DeletionCheck, genre::event::DeleteGenre, id::GenreId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    form::genre::{validate_genre, GenreDraft, GenreFormData},
    model::{
        book::BookView,
        genre::{
            DeleteGenreFormData, GenreDeleteView, GenreDetailView, GenreFormView, GenreListView,
            GenreView,
        },
    },
    presentation,
};

const GENRE_LIST_URL: &str = "/catalog/genres";

fn parse_genre_id(raw: &str) -> AppResult<GenreId> {
    raw.parse()
        .map_err(|_| AppError::EntityNotFound(format!("genre {raw} not found")))
}

pub async fn show_genre_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<GenreListView>> {
    let genres = registry.genre_repository().find_all().await?;
    Ok(Json(GenreListView {
        title: "Genre List".into(),
        genre_list: genres.into_iter().map(GenreView::from).collect(),
    }))
}

pub async fn show_genre_detail(
    State(registry): State<AppRegistry>,
    Path(genre_id): Path<String>,
) -> AppResult<Json<GenreDetailView>> {
    let genre_id = parse_genre_id(&genre_id)?;
    let genre_repo = registry.genre_repository();
    let book_repo = registry.book_repository();
    let (genre, genre_books) = tokio::try_join!(
        genre_repo.find_by_id(genre_id),
        book_repo.find_by_genre_id(genre_id),
    )?;
    let genre = genre.ok_or_else(|| AppError::EntityNotFound("genre does not exist".into()))?;
    Ok(Json(GenreDetailView {
        title: genre.name.clone(),
        genre: genre.into(),
        genre_books: genre_books.into_iter().map(BookView::from).collect(),
    }))
}

pub async fn show_genre_create_form() -> Json<GenreFormView> {
    Json(GenreFormView {
        title: "Create Genre".into(),
        genre: GenreDraft::default(),
        errors: Vec::new(),
    })
}

pub async fn register_genre(
    State(registry): State<AppRegistry>,
    Form(data): Form<GenreFormData>,
) -> AppResult<Response> {
    let outcome = validate_genre(data);
    if !outcome.is_valid() {
        return Ok(Json(GenreFormView {
            title: "Create Genre".into(),
            genre: outcome.draft,
            errors: outcome.errors,
        })
        .into_response());
    }
    // Creation is idempotent by name: an existing genre wins over a new
    // insert and the request resolves to its identity.
    let repo = registry.genre_repository();
    if let Some(existing) = repo.find_by_name(&outcome.draft.name).await? {
        return Ok(Redirect::to(&presentation::detail_url("genre", existing.id)).into_response());
    }
    let genre_id = repo.create(outcome.draft.into()).await?;
    Ok(Redirect::to(&presentation::detail_url("genre", genre_id)).into_response())
}

pub async fn show_genre_update_form(
    State(registry): State<AppRegistry>,
    Path(genre_id): Path<String>,
) -> AppResult<Json<GenreFormView>> {
    let genre_id = parse_genre_id(&genre_id)?;
    let genre = registry
        .genre_repository()
        .find_by_id(genre_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("genre does not exist".into()))?;
    Ok(Json(GenreFormView {
        title: "Update Genre".into(),
        genre: genre.into(),
        errors: Vec::new(),
    }))
}

pub async fn modify_genre(
    State(registry): State<AppRegistry>,
    Path(genre_id): Path<String>,
    Form(data): Form<GenreFormData>,
) -> AppResult<Response> {
    let genre_id = parse_genre_id(&genre_id)?;
    let outcome = validate_genre(data);
    if !outcome.is_valid() {
        return Ok(Json(GenreFormView {
            title: "Update Genre".into(),
            genre: outcome.draft,
            errors: outcome.errors,
        })
        .into_response());
    }
    registry
        .genre_repository()
        .update(outcome.draft.into_update(genre_id))
        .await?;
    Ok(Redirect::to(&presentation::detail_url("genre", genre_id)).into_response())
}

pub async fn show_genre_delete_confirmation(
    State(registry): State<AppRegistry>,
    Path(genre_id): Path<String>,
) -> AppResult<Response> {
    let Ok(genre_id) = genre_id.parse::<GenreId>() else {
        return Ok(Redirect::to(GENRE_LIST_URL).into_response());
    };
    let genre_repo = registry.genre_repository();
    let book_repo = registry.book_repository();
    let (genre, books) = tokio::try_join!(
        genre_repo.find_by_id(genre_id),
        book_repo.find_by_genre_id(genre_id),
    )?;
    let Some(genre) = genre else {
        return Ok(Redirect::to(GENRE_LIST_URL).into_response());
    };
    Ok(Json(GenreDeleteView {
        title: "Delete Genre".into(),
        genre: genre.into(),
        books: books.into_iter().map(BookView::from).collect(),
    })
    .into_response())
}

pub async fn remove_genre(
    State(registry): State<AppRegistry>,
    Form(data): Form<DeleteGenreFormData>,
) -> AppResult<Response> {
    let Ok(genre_id) = data.genreid.parse::<GenreId>() else {
        return Ok(Redirect::to(GENRE_LIST_URL).into_response());
    };
    let genre_repo = registry.genre_repository();
    let book_repo = registry.book_repository();
    let (genre, books) = tokio::try_join!(
        genre_repo.find_by_id(genre_id),
        book_repo.find_by_genre_id(genre_id),
    )?;
    let check = DeletionCheck::new(books);
    if !check.allowed() {
        let Some(genre) = genre else {
            return Ok(Redirect::to(GENRE_LIST_URL).into_response());
        };
        return Ok(Json(GenreDeleteView {
            title: "Delete Genre".into(),
            genre: genre.into(),
            books: check
                .into_blockers()
                .into_iter()
                .map(BookView::from)
                .collect(),
        })
        .into_response());
    }
    if genre.is_some() {
        registry
            .genre_repository()
            .delete(DeleteGenre { genre_id })
            .await?;
    }
    Ok(Redirect::to(GENRE_LIST_URL).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::http::{header::LOCATION, StatusCode};
    use kernel::model::{
        book::{Book, BookAuthor},
        genre::Genre,
        id::{AuthorId, BookId},
    };
    use kernel::repository::{
        author::MockAuthorRepository, book::MockBookRepository,
        book_copy::MockBookCopyRepository, genre::MockGenreRepository,
    };

    fn registry(
        genre_repo: MockGenreRepository,
        book_repo: MockBookRepository,
    ) -> AppRegistry {
        AppRegistry::from_parts(
            Arc::new(MockAuthorRepository::new()),
            Arc::new(genre_repo),
            Arc::new(book_repo),
            Arc::new(MockBookCopyRepository::new()),
        )
    }

    fn book_with_genres(genres: Vec<Genre>) -> Book {
        Book {
            id: BookId::new(),
            title: "Anna Karenina".into(),
            author: BookAuthor {
                id: AuthorId::new(),
                first_name: "Leo".into(),
                family_name: "Tolstoy".into(),
            },
            summary: "A novel.".into(),
            isbn: "9780143035008".into(),
            genres,
        }
    }

    #[tokio::test]
    async fn creating_an_existing_name_resolves_to_the_existing_genre() {
        let existing = Genre {
            id: GenreId::new(),
            name: "Fiction".into(),
        };
        let existing_id = existing.id;

        let mut genre_repo = MockGenreRepository::new();
        genre_repo
            .expect_find_by_name()
            .returning(move |_| Ok(Some(existing.clone())));
        genre_repo.expect_create().times(0);

        let registry = registry(genre_repo, MockBookRepository::new());
        let response = register_genre(
            State(registry),
            Form(GenreFormData {
                name: "Fiction".into(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()[LOCATION],
            format!("/catalog/genre/{existing_id}")
        );
    }

    #[tokio::test]
    async fn creating_a_new_name_inserts_and_redirects() {
        let genre_id = GenreId::new();
        let mut genre_repo = MockGenreRepository::new();
        genre_repo.expect_find_by_name().returning(|_| Ok(None));
        genre_repo
            .expect_create()
            .times(1)
            .returning(move |_| Ok(genre_id));

        let registry = registry(genre_repo, MockBookRepository::new());
        let response = register_genre(
            State(registry),
            Form(GenreFormData {
                name: "Fiction".into(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()[LOCATION],
            format!("/catalog/genre/{genre_id}")
        );
    }

    // A book whose genre set holds both genres blocks each one individually.
    #[tokio::test]
    async fn genre_set_membership_blocks_every_member() {
        let g1 = Genre {
            id: GenreId::new(),
            name: "Fiction".into(),
        };
        let g2 = Genre {
            id: GenreId::new(),
            name: "History".into(),
        };
        let book = book_with_genres(vec![g1.clone(), g2.clone()]);

        for genre in [g1, g2] {
            let mut genre_repo = MockGenreRepository::new();
            let found = genre.clone();
            genre_repo
                .expect_find_by_id()
                .returning(move |_| Ok(Some(found.clone())));
            genre_repo.expect_delete().times(0);

            let mut book_repo = MockBookRepository::new();
            let blocker = book.clone();
            let expected = genre.id;
            book_repo
                .expect_find_by_genre_id()
                .withf(move |queried| *queried == expected)
                .returning(move |_| Ok(vec![blocker.clone()]));

            let registry = registry(genre_repo, book_repo);
            let response = remove_genre(
                State(registry),
                Form(DeleteGenreFormData {
                    genreid: genre.id.to_string(),
                }),
            )
            .await
            .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
        }
    }
}
