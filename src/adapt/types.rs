mod namespace;
mod value;

pub use namespace::Namespace;
pub use value::Value;
