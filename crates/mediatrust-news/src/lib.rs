//! Article fetcher for the NewsAPI `everything` search endpoint.

pub mod client;
pub mod error;
pub mod types;

pub use client::{date_window, NewsClient, NewsSettings};
pub use error::NewsError;
pub use types::{ArticleRecord, NOT_AVAILABLE};
