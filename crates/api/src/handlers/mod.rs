pub mod goal;
pub mod task;
