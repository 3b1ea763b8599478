//! Model module containing data structures

mod shape_kind;
mod time;
mod timing;

pub use shape_kind::ShapeKind;
pub use time::{days_in_month, decimal_year, month_index};
pub use timing::EffectTiming;
