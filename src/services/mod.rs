pub mod books_api;
pub mod bookshelf;
pub mod google_books;

// Re-export public types
pub use books_api::BooksApi;
pub use bookshelf::BookshelfService;
pub use google_books::GoogleBooksClient;
