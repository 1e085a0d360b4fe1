use nalgebra::RealField;
use num_traits::ToPrimitive;

/// Trait for floating point types (f32, f64)
/// Mainly used to identify the type of the field in nalgebra
pub trait FloatingPoint: RealField + ToPrimitive + Copy {
    /// Convert a section or tessellation count into the scalar field.
    fn from_count(count: usize) -> Self {
        nalgebra::convert(count as f64)
    }

    /// Convert a literal constant into the scalar field.
    fn constant(value: f64) -> Self {
        nalgebra::convert(value)
    }
}

impl FloatingPoint for f32 {}
impl FloatingPoint for f64 {}
