mod description;
mod priority;
mod schedule;
mod task;

pub use description::Description;
pub use priority::Priority;
pub use schedule::{DueDate, DueTime};
pub use task::{FieldValue, Task, TaskField, Urgency};
