pub mod compiler;
pub mod i18n;
pub mod interpolate;
pub mod parser;
pub mod types;

pub use compiler::{compile, compile_with};
pub use i18n::{I18n, Messages};
pub use interpolate::{Interpolation, interpolate, plural_category};
pub use types::{
    CaseKind, CompiledMessage, DateFormat, FormatStyle, Formats, NumberFormat, NumberStyle,
    StyleLength, Token, Value, Values,
};

/// Creates a `HashMap<String, Value>` from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, or strings directly.
///
/// # Example
///
/// ```
/// use icumsg::{Value, values};
///
/// let v = values! { "count" => 3, "name" => "Alice" };
/// assert_eq!(v.len(), 2);
/// assert_eq!(v["count"].as_number(), Some(3));
/// assert_eq!(v["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! values {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
