mod angle;
mod convert;
mod format;
pub mod numerical;
mod ops;
mod point;
mod random;

#[cfg(test)]
mod tests;

pub use angle::*;
pub use convert::*;
pub use format::*;
pub use numerical::EPSILON;
pub use point::*;
