use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::book_copy::{
    modify_book_copy, register_book_copy, remove_book_copy, show_book_copy_create_form,
    show_book_copy_delete_confirmation, show_book_copy_detail, show_book_copy_list,
    show_book_copy_update_form,
};

pub fn build_book_copy_routers() -> Router<AppRegistry> {
    Router::new()
        .route(
            "/bookinstance/create",
            get(show_book_copy_create_form).post(register_book_copy),
        )
        .route(
            "/bookinstance/:id/update",
            get(show_book_copy_update_form).post(modify_book_copy),
        )
        .route(
            "/bookinstance/:id/delete",
            get(show_book_copy_delete_confirmation).post(remove_book_copy),
        )
        .route("/bookinstance/:id", get(show_book_copy_detail))
        .route("/bookinstances", get(show_book_copy_list))
}
