pub mod query_helpers;

pub use query_helpers::{FilterQuery, PgParam, PgParamBox, PgParamVec};
