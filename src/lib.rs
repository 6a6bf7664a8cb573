pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod presenter;
pub mod services;

pub use crate::config::Config;
pub use crate::error::{BookshelfError, Result};
pub use crate::models::{BookDetail, BookId, SearchResult};
pub use crate::presenter::{ShelfPresenter, ShelfState};
pub use crate::services::{BooksApi, BookshelfService, GoogleBooksClient};
