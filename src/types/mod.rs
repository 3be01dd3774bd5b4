pub mod hash;
pub mod list;

pub use hash::{Hash, HashError, HASH_LEN};
pub use list::{List, ListError};
