#![allow(clippy::needless_range_loop)]

mod chain;
mod draw;
mod mesh;
mod misc;
mod polygon;
mod segment;
mod shape;
mod split;
mod subsurface;
mod surface;

pub mod prelude {
    pub use crate::chain::*;
    pub use crate::draw::*;
    pub use crate::mesh::*;
    pub use crate::misc::*;
    pub use crate::polygon::*;
    pub use crate::segment::*;
    pub use crate::shape::*;
    pub use crate::split::*;
    pub use crate::subsurface::*;
    pub use crate::surface::*;
}
