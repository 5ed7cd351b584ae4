//! Configuration validation

use super::error::ConfigResult;

/// Trait for validatable configuration objects
///
/// ```rust,ignore
/// fn build<C: Validatable>(config: C) -> Result<Engine, ConfigError> {
///     config.validate()?;
///     // ...
/// }
/// ```
pub trait Validatable {
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;
}
