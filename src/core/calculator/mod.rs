pub mod aggregate;
pub mod distribution;
pub mod streak;
pub mod weekly;
