use common::error::{DynError, Error, NumericError, TypeError, ValueType};
use parser::{parse_float, parse_int};

use crate::literal::{Literal, Value};

const INT: ValueType = "int64";
const FLOAT: ValueType = "float64";
const BOOL: ValueType = "bool";

// 2^63, the first float past i64::MAX
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

const TRUE_TEXT: [&str; 6] = ["1", "t", "T", "TRUE", "true", "True"];
const FALSE_TEXT: [&str; 6] = ["0", "f", "F", "FALSE", "false", "False"];

#[inline]
fn float_to_int(f: f64, text: impl FnOnce() -> String) -> Result<i64, Error> {
    if !(-I64_BOUND..I64_BOUND).contains(&f) {
        return Err(TypeError::OutOfRange(text(), INT).into());
    }

    if f.fract() != 0.0 {
        return Err(TypeError::NotIntegral(text()).into());
    }

    Ok(f as i64)
}

#[inline]
fn numeric_error(e: NumericError, text: &str, to: ValueType) -> Error {
    match e {
        NumericError::Syntax => TypeError::ParseError(text.to_owned(), to).into(),
        NumericError::Range => TypeError::OutOfRange(text.to_owned(), to).into(),
    }
}

impl Literal {
    /// Reads the literal as an integer.
    ///
    /// Floats must be integral and inside the `i64` range. Strings are read
    /// as strict base-10 integers first and then as floats under the same
    /// rule, except that well-formed integer text outside the `i64` range
    /// fails outright.
    pub fn try_int(&self) -> Result<i64, Error> {
        match &self.0 {
            Value::Int(i) => Ok(*i),
            Value::Float(f) => float_to_int(*f, || f.to_string()),
            Value::String(s) => match parse_int(s) {
                Ok(i) => Ok(i),
                Err(NumericError::Syntax) => match parse_float(s) {
                    Ok(f) => float_to_int(f, || s.to_string()),
                    Err(e) => Err(numeric_error(e, s, INT)),
                },
                Err(e) => Err(numeric_error(e, s, INT)),
            },
            Value::Bool(_) | Value::Error(_) => {
                Err(TypeError::CannotConvert(self.ntype(), INT).into())
            }
        }
    }

    /// Reads the literal as a float. Integers beyond 2^53 lose precision.
    pub fn try_float(&self) -> Result<f64, Error> {
        match &self.0 {
            Value::Int(i) => Ok(*i as f64),
            Value::Float(f) => Ok(*f),
            Value::String(s) => parse_float(s).map_err(|e| numeric_error(e, s, FLOAT)),
            Value::Bool(_) | Value::Error(_) => {
                Err(TypeError::CannotConvert(self.ntype(), FLOAT).into())
            }
        }
    }

    /// Reads the literal as a boolean.
    ///
    /// Only `0` and `1` convert from numbers. Strings must be one of
    /// `1 t T TRUE true True` or `0 f F FALSE false False`.
    pub fn try_bool(&self) -> Result<bool, Error> {
        match &self.0 {
            Value::Bool(b) => Ok(*b),
            Value::Int(0) => Ok(false),
            Value::Int(1) => Ok(true),
            Value::Int(i) => Err(TypeError::OutOfRange(i.to_string(), BOOL).into()),
            Value::Float(f) if *f == 0.0 => Ok(false),
            Value::Float(f) if *f == 1.0 => Ok(true),
            Value::Float(f) => Err(TypeError::OutOfRange(f.to_string(), BOOL).into()),
            Value::String(s) if TRUE_TEXT.contains(&&**s) => Ok(true),
            Value::String(s) if FALSE_TEXT.contains(&&**s) => Ok(false),
            Value::String(s) => Err(TypeError::ParseError(s.to_string(), BOOL).into()),
            Value::Error(_) => Err(TypeError::CannotConvert(self.ntype(), BOOL).into()),
        }
    }

    #[inline]
    pub fn to_int(&self) -> Option<i64> {
        self.try_int().ok()
    }

    #[inline]
    pub fn to_float(&self) -> Option<f64> {
        self.try_float().ok()
    }

    #[inline]
    pub fn to_bool(&self) -> Option<bool> {
        self.try_bool().ok()
    }

    #[inline]
    pub fn as_error(&self) -> Option<&DynError> {
        match &self.0 {
            Value::Error(e) => Some(&**e),
            _ => None,
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self.0, Value::Error(_))
    }
}
