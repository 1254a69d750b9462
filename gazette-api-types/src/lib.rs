pub mod search;

pub use search::{ArticleId, SearchResult};
