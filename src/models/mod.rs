pub mod counters;
pub mod flight;
pub mod settings;
pub mod time;

pub use counters::*;
pub use flight::*;
pub use settings::*;
