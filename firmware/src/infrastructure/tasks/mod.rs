mod chase;

pub use chase::{chase_task, self_test};
