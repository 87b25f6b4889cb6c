use common::{
    error::{DynError, Error, ValueType},
    Rc,
};

use crate::input::Input;

/// The kind of payload a [`Literal`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum Kind {
    Int64,
    Float64,
    String,
    Bool,
    Error,
}

impl Kind {
    #[inline]
    pub fn name(&self) -> ValueType {
        match self {
            Kind::Int64 => "int64",
            Kind::Float64 => "float64",
            Kind::String => "string",
            Kind::Bool => "bool",
            Kind::Error => "error",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone)]
pub(crate) enum Value {
    Int(i64),
    Float(f64),
    String(Rc<str>),
    Bool(bool),
    Error(Rc<DynError>),
}

/// An immutable scalar that can be read back as any other scalar type
/// where that makes sense.
///
/// Strings are stored unparsed, so text outside the 64-bit numeric range
/// survives unchanged and each accessor reads it on its own terms.
#[derive(Debug, Clone)]
pub struct Literal(pub(crate) Value);

impl Literal {
    /// Classifies `input` into a literal.
    ///
    /// Fails with [`Error::InvalidKind`] for inputs that have no literal
    /// form. [`Literal::classify`] or `Literal::from(err)` turn that failure
    /// into an error-kind literal.
    pub fn new(input: impl Into<Input>) -> Result<Self, Error> {
        let value = match input.into() {
            Input::Int(i) => Value::Int(i),
            Input::Float(f) => Value::Float(f),
            Input::String(s) => Value::String(s.into()),
            Input::Bool(b) => Value::Bool(b),
            Input::Error(e) => Value::Error(e),
            other => return Err(Error::InvalidKind(other.kind_name())),
        };

        Ok(Self(value))
    }

    /// Like [`Literal::new`], but a classification failure becomes an
    /// error-kind literal instead.
    pub fn classify(input: impl Into<Input>) -> Self {
        Self::new(input).unwrap_or_else(Self::from)
    }

    /// Like [`Literal::new`], for callers that treat an unsupported input as
    /// a bug.
    ///
    /// ### Panics
    /// With the classification failure's message.
    pub fn must_new(input: impl Into<Input>) -> Self {
        match Self::new(input) {
            Ok(literal) => literal,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn from_error<E>(e: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self(Value::Error(Rc::new(e)))
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        match &self.0 {
            Value::Int(_) => Kind::Int64,
            Value::Float(_) => Kind::Float64,
            Value::String(_) => Kind::String,
            Value::Bool(_) => Kind::Bool,
            Value::Error(_) => Kind::Error,
        }
    }

    #[inline]
    pub fn ntype(&self) -> ValueType {
        self.kind().name()
    }
}

// integral floats print without a trailing `.0`
impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Error(e) => write!(f, "{}", e),
        }
    }
}

impl From<Error> for Literal {
    fn from(e: Error) -> Self {
        Self::from_error(e)
    }
}

macro_rules! impl_from_scalar {
    ($($scalar:ty),+) => {$(
        impl From<$scalar> for Literal {
            fn from(v: $scalar) -> Self {
                Self::classify(v)
            }
        }
    )+};
}

impl_from_scalar!(i64, f64, bool, String, &str);

#[cfg(feature = "serde")]
impl serde::Serialize for Literal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match &self.0 {
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Error(e) => serializer.collect_str(e),
        }
    }
}
