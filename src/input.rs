use common::{
    error::{DynError, Error, ValueType},
    Rc,
};

/// A raw value handed to [`Literal::new`](crate::literal::Literal::new).
///
/// ### Variants
/// * `Int`: A signed integer of any width, stored as 64 bits
/// * `Float`: A 32 or 64 bit float, widened to 64 bits
/// * `String`: Text, kept verbatim
/// * `Bool`: A boolean value
/// * `Error`: Anything with a display message
/// * `Complex64`, `Complex128`: Complex numbers, which have no literal form
/// * `Unsupported`: Any other kind, named by the caller
#[derive(Debug, Clone)]
pub enum Input {
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
    Error(Rc<DynError>),

    Complex64(f32, f32),
    Complex128(f64, f64),
    Unsupported(ValueType),
}

impl Input {
    pub fn error<E>(e: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Input::Error(Rc::new(e))
    }

    #[inline]
    pub fn kind_name(&self) -> ValueType {
        match self {
            Input::Int(_) => "int64",
            Input::Float(_) => "float64",
            Input::String(_) => "string",
            Input::Bool(_) => "bool",
            Input::Error(_) => "error",
            Input::Complex64(_, _) => "complex64",
            Input::Complex128(_, _) => "complex128",
            Input::Unsupported(name) => *name,
        }
    }
}

// wider integers are narrowed
macro_rules! impl_from_int {
    ($($int:ty),+) => {$(
        impl From<$int> for Input {
            fn from(i: $int) -> Self {
                Input::Int(i as i64)
            }
        }
    )+};
}

impl_from_int!(i8, i16, i32, i64, i128, isize);

impl From<f32> for Input {
    fn from(f: f32) -> Self {
        Input::Float(f as f64)
    }
}

impl From<f64> for Input {
    fn from(f: f64) -> Self {
        Input::Float(f)
    }
}

impl From<bool> for Input {
    fn from(b: bool) -> Self {
        Input::Bool(b)
    }
}

impl From<String> for Input {
    fn from(s: String) -> Self {
        Input::String(s)
    }
}

impl From<&str> for Input {
    fn from(s: &str) -> Self {
        Input::String(s.to_owned())
    }
}

impl From<&String> for Input {
    fn from(s: &String) -> Self {
        Input::String(s.to_owned())
    }
}

impl From<Box<DynError>> for Input {
    fn from(e: Box<DynError>) -> Self {
        Input::Error(Rc::from(e))
    }
}

impl From<Error> for Input {
    fn from(e: Error) -> Self {
        Input::error(e)
    }
}
