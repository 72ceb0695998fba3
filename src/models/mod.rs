pub mod journal;
pub mod meditation_type;
pub mod mood;
pub mod session;
pub mod stats;
