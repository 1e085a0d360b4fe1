use crate::{
    draw::DrawOptions, misc::FloatingPoint, segment::StripOptions, split::SplitOptions,
};

/// Whether the region inside or outside the boundary polygon is tagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TestMode {
    #[default]
    Inside,
    Outside,
}

/// Options for a subsurface
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubSurfaceOptions<T: FloatingPoint> {
    pub split: SplitOptions<T>,
    pub strip: StripOptions<T>,
    pub draw: DrawOptions<T>,
}

impl<T: FloatingPoint> Default for SubSurfaceOptions<T> {
    fn default() -> Self {
        Self {
            split: SplitOptions::default(),
            strip: StripOptions::default(),
            draw: DrawOptions::default(),
        }
    }
}

impl<T: FloatingPoint> SubSurfaceOptions<T> {
    pub fn with_split(mut self, split: SplitOptions<T>) -> Self {
        self.split = split;
        self
    }

    pub fn with_strip(mut self, strip: StripOptions<T>) -> Self {
        self.strip = strip;
        self
    }

    pub fn with_draw(mut self, draw: DrawOptions<T>) -> Self {
        self.draw = draw;
        self
    }
}
