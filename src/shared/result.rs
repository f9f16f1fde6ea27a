/// Type alias for Result with anyhow::Error as the error type.
/// Typed failures travel inside it as `LicenseError` values or context.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
