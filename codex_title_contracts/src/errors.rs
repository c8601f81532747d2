use thiserror::Error;

#[derive(Debug, Error)]
pub enum MigrationError {
    /// No prefix is defined for the requested network, or the harness could
    /// not read its own setup (artifact file, env).
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// The deployed contract could not be found, or the node rejected or
    /// failed the mutating call.
    #[error("Remote call failed: {0}")]
    RemoteCall(String),
}

impl MigrationError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
