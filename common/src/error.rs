use thiserror::Error;

pub type ValueType = &'static str;

/// The error type carried by error-kind literals.
pub type DynError = dyn std::error::Error + Send + Sync;

pub trait NamedError {
    fn name(&self) -> &'static str;
}

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum Error {
    #[error("invalid kind: {0}")]
    InvalidKind(ValueType),

    #[error("TypeError: {0}")]
    TypeError(TypeError),
}

impl NamedError for Error {
    fn name(&self) -> &'static str {
        match &self {
            Error::InvalidKind(_) => "InvalidKind",
            Error::TypeError(e) => e.name(),
        }
    }
}

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum TypeError {
    // error for kinds that have no conversion at all
    #[error("cannot convert `{0}` to `{1}`")]
    CannotConvert(ValueType, ValueType),

    #[error("cannot parse '{0}' as `{1}`")]
    ParseError(String, ValueType),

    #[error("'{0}' is out of range for `{1}`")]
    OutOfRange(String, ValueType),

    #[error("'{0}' has a fractional part")]
    NotIntegral(String),
}

impl NamedError for TypeError {
    fn name(&self) -> &'static str {
        match self {
            Self::CannotConvert(_, _) => "CannotConvert",
            Self::ParseError(_, _) => "ParseError",
            Self::OutOfRange(_, _) => "OutOfRange",
            Self::NotIntegral(_) => "NotIntegral",
        }
    }
}

/// Why numeric text could not be read.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum NumericError {
    #[error("invalid syntax")]
    Syntax,

    #[error("value out of range")]
    Range,
}

macro_rules! impl_from_error {
    ($($error:ident),+) => {$(
        impl From<$error> for Error {
            fn from(e: $error) -> Self {
                Error::$error(e)
            }
        }
    )+};
}

impl_from_error!(TypeError);
