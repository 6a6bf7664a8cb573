// Re-export types from book.rs
pub use book::{normalize_thumbnail, BookDetail, BookId, RawVolume, SearchResult};
pub use volume::{ImageLinks, Volume, VolumeInfo, VolumeList, VolumeRef};

mod book;
mod volume;
