pub mod split_engine;

pub use split_engine::*;
