//! Validation errors reported to the user.

/// Error raised while validating command-line arguments.
///
/// Each variant carries the offending argument exactly as it was typed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalError {
    /// Month does not parse as an integer or is outside 1-12.
    #[error("{0}: mes invalido.")]
    InvalidMonth(String),

    /// Year does not parse as an integer or is outside 1-9999.
    #[error("{0}: ano invalido.")]
    InvalidYear(String),

    /// `--columns` is neither `auto` nor a positive integer.
    #[error("{0}: colunas invalido.")]
    InvalidColumns(String),

    /// More than two positional arguments.
    #[error("uso: cal [[mes] ano]")]
    Usage,
}
