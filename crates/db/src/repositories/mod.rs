//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Methods that only ever run standalone take `&PgPool`; methods that also
//! run inside a transaction take any `PgExecutor`.

pub mod comic_book_genre_repo;
pub mod comic_book_repo;
pub mod genre_repo;
pub mod publisher_repo;

pub use comic_book_genre_repo::ComicBookGenreRepo;
pub use comic_book_repo::ComicBookRepo;
pub use genre_repo::GenreRepo;
pub use publisher_repo::PublisherRepo;
