//! TypeScript file generators.

mod index_ts;
mod query_ts;

pub use index_ts::IndexTs;
pub use query_ts::QueryTs;
