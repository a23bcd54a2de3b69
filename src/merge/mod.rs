//! Pure merge engines shared by the reducer and exposed for custom reducers.

pub mod meta;
pub mod upsert;

pub use meta::*;
pub use upsert::*;
