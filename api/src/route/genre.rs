use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::genre::{
    modify_genre, register_genre, remove_genre, show_genre_create_form,
    show_genre_delete_confirmation, show_genre_detail, show_genre_list, show_genre_update_form,
};

pub fn build_genre_routers() -> Router<AppRegistry> {
    Router::new()
        .route(
            "/genre/create",
            get(show_genre_create_form).post(register_genre),
        )
        .route(
            "/genre/:id/update",
            get(show_genre_update_form).post(modify_genre),
        )
        .route(
            "/genre/:id/delete",
            get(show_genre_delete_confirmation).post(remove_genre),
        )
        .route("/genre/:id", get(show_genre_detail))
        .route("/genres", get(show_genre_list))
}
