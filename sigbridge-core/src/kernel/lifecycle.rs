use super::ConfigError;

/// Checked construction from a plain config value.
///
/// Sizes are validated once here so that the structures themselves never
/// have to re-check them.
pub trait Lifecycle: Sized {
    /// Constructor config type.
    type Config;

    /// Construct a validated value from config.
    fn try_new(config: Self::Config) -> Result<Self, ConfigError>;
}
