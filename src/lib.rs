
pub mod coerce;
pub mod input;
pub mod literal;

pub mod prelude {
    pub use crate::input::Input;
    pub use crate::literal::{Kind, Literal};

    pub use common::error::{DynError, Error, NamedError, NumericError, TypeError, ValueType};
    pub use common::Rc;

    pub use parser::{parse_float, parse_int};
}
