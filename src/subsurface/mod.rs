pub mod sub_surface;
pub mod sub_surface_option;

pub use sub_surface::*;
pub use sub_surface_option::*;
