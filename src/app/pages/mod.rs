pub mod past_searches;
pub mod routes;

pub use past_searches::{PastSearches, PastSearchesView};
