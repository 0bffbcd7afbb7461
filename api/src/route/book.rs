use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::book::{
    modify_book, register_book, remove_book, show_book_create_form,
    show_book_delete_confirmation, show_book_detail, show_book_list, show_book_update_form,
};

pub fn build_book_routers() -> Router<AppRegistry> {
    Router::new()
        .route(
            "/book/create",
            get(show_book_create_form).post(register_book),
        )
        .route(
            "/book/:id/update",
            get(show_book_update_form).post(modify_book),
        )
        .route(
            "/book/:id/delete",
            get(show_book_delete_confirmation).post(remove_book),
        )
        .route("/book/:id", get(show_book_detail))
        .route("/books", get(show_book_list))
}
