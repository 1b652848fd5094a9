pub mod auto;
pub mod bench;
pub mod human;

pub use auto::{AutoMode, PlaybackSpeed};
pub use bench::{BenchConfig, BenchMode};
pub use human::HumanMode;
