pub mod concurrent;

pub use concurrent::fan_out;
