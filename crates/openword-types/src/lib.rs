pub mod types;

pub use types::{AppEvent, Direction, PriorityPolicy, Strategy};
