pub mod error;
pub mod serde_helpers;

pub use error::ErrorResponse;
