use thiserror::Error;

/// Rejected configuration values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be finite and greater than zero (got {value})")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must be finite (got {value})")]
    NotFinite { name: &'static str, value: f32 },
    #[error("camera near plane {near} must be closer than far plane {far}")]
    ClipPlanes { near: f32, far: f32 },
    #[error("layout needs at least one section object")]
    NoObjects,
    #[error(transparent)]
    Color(#[from] ColorParseError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color `{0}` must start with '#'")]
    MissingHash(String),
    #[error("color `{0}` must have 6 hex digits")]
    BadLength(String),
    #[error("color `{0}` contains a non-hex digit")]
    BadDigit(String),
}
