pub mod classifier;
pub mod driver;

pub use classifier::classify;
pub use driver::{NumberRange, labels, run};
