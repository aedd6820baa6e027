pub mod error;
pub mod id_generator;
pub mod strong_hash;
pub mod wip;

pub use error::IdError;
pub use id_generator::{md5_hash, MD5_HEX_LEN};
pub use wip::{WIP_FILTER, WIP_TAG};
