mod search;
pub use search::{SearchHit, Seed, SeedError, SeedParams, SeedSearch};

mod word_index;
pub use word_index::WordIndex;
