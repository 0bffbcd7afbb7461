pub mod form;
pub mod handler;
pub mod model;
pub mod presentation;
pub mod route;
