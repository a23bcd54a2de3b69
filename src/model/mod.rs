//! Data shapes held by the reducer: entities, their ids, metadata and the
//! collection snapshot that ties them together.

pub mod entity;
pub mod id;
pub mod meta;
pub mod state;

pub use entity::*;
pub use id::*;
pub use meta::*;
pub use state::*;
