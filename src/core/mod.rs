pub mod deploy;
pub mod dispatch;
pub mod intent;
pub mod manifest;

pub use crate::utils::error::Result;
