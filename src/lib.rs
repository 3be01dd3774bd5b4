//! Foundation types shared by higher layers:
//! a 32-byte identity [`Hash`](types::Hash) and a value-equality
//! [`List`](types::List).

pub mod types;
pub mod util;
