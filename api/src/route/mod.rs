pub mod author;
pub mod book;
pub mod book_copy;
pub mod genre;

use axum::{response::Redirect, routing::get, Router};
use registry::AppRegistry;

use crate::handler::book::show_catalog_index;

pub fn build_app_router() -> Router<AppRegistry> {
    let catalog = Router::new()
        .route("/", get(show_catalog_index))
        .merge(author::build_author_routers())
        .merge(book::build_book_routers())
        .merge(book_copy::build_book_copy_routers())
        .merge(genre::build_genre_routers());

    Router::new()
        .route("/", get(|| async { Redirect::to("/catalog/") }))
        .nest("/catalog", catalog)
}
