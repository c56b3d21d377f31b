pub mod monitor;
pub mod pacing;
