pub mod comic_book;
pub mod index;
pub mod publisher;
