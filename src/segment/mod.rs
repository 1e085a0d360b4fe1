pub mod boundary_segment;
pub mod strip;

pub use boundary_segment::*;
pub use strip::*;

#[cfg(test)]
mod tests;
