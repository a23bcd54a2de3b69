//! # Action-Type Catalog
//!
//! Every enabled [`Operation`] contributes five action types, one per [`Phase`]:
//!
//! ```text
//! CREATE_BOOK            CREATE_MANY_BOOKS
//! CREATE_BOOK_SUCCEED    CREATE_MANY_BOOKS_SUCCEED
//! CREATE_BOOK_FAIL       CREATE_MANY_BOOKS_FAIL
//! CREATE_BOOK_ABORT      CREATE_MANY_BOOKS_ABORT
//! CREATE_BOOK_RESET      CREATE_MANY_BOOKS_RESET
//! ```
//!
//! Singular operations use the snake-cased resource name, `*_MANY_*` variants
//! the snake-cased plural. Custom action types are added verbatim.

mod catalog;
mod naming;
mod operation;
mod supported;

pub use catalog::*;
pub use naming::*;
pub use operation::*;
pub use supported::*;
