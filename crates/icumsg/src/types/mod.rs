//! Public data types shared across the parser, compiler, and interpolator.

mod format;
mod message;
mod value;

use std::collections::HashMap;

pub use format::{DateFormat, FormatStyle, NumberFormat, NumberStyle, StyleLength};
pub use message::{CaseKind, CompiledMessage, Token};
pub use value::Value;

/// Runtime argument values, keyed by argument name. Never mutated by the
/// engine; supplied fresh per interpolation call.
pub type Values = HashMap<String, Value>;

/// Named format styles, keyed by the style name used in patterns.
pub type Formats = HashMap<String, FormatStyle>;
