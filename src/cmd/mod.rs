pub mod browse;
pub mod show;
pub mod stats;
pub mod validate;
