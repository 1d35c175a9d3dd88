pub mod task;

pub use task::{Task, TaskCreate, TaskRef, TaskUpdate};
