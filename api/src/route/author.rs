use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::author::{
    modify_author, register_author, remove_author, show_author_create_form,
    show_author_delete_confirmation, show_author_detail, show_author_list,
    show_author_update_form,
};

pub fn build_author_routers() -> Router<AppRegistry> {
    // Fixed paths before the ":id" capture.
    Router::new()
        .route(
            "/author/create",
            get(show_author_create_form).post(register_author),
        )
        .route(
            "/author/:id/update",
            get(show_author_update_form).post(modify_author),
        )
        .route(
            "/author/:id/delete",
            get(show_author_delete_confirmation).post(remove_author),
        )
        .route("/author/:id", get(show_author_detail))
        .route("/authors", get(show_author_list))
}
