pub mod adapt;
pub mod guard;
pub mod timer;

pub use adapt::{FrozenRecord, Namespace, Record, Value, adapt, adapt_json, from_json};
pub use guard::{ScopeGuard, on_scope};
pub use timer::{MeasureTime, measure_time};
