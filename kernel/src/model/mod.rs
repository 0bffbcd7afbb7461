pub mod author;
pub mod book;
pub mod book_copy;
pub mod deletion;
pub mod genre;
pub mod id;
