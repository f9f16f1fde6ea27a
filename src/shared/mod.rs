pub mod cancellation;
pub mod error;
pub mod result;
pub mod security;

pub use cancellation::CancellationToken;
pub use error::{ExitCode, LicenseError};
pub use result::Result;
