pub mod activity;
pub mod macros;
pub mod time;

pub use activity::*;
pub use time::*;
