use nalgebra::Point3;

use super::*;
use crate::surface::ParametricSurface;

struct Sheet {
    sections: Option<(usize, usize)>,
    tessellation: (usize, usize),
}

impl ParametricSurface<f64> for Sheet {
    fn section_count_u(&self) -> usize {
        self.sections.map_or(0, |s| s.0)
    }

    fn section_count_w(&self) -> usize {
        self.sections.map_or(0, |s| s.1)
    }

    fn point_at(&self, u: f64, w: f64) -> Point3<f64> {
        Point3::new(u, w, 0.)
    }
}

impl OwnerGeometry<f64> for Sheet {
    fn surface(&self) -> Option<&dyn ParametricSurface<f64>> {
        self.sections.map(|_| self as &dyn ParametricSurface<f64>)
    }

    fn tessellation_u(&self) -> usize {
        self.tessellation.0
    }

    fn tessellation_w(&self) -> usize {
        self.tessellation.1
    }
}

#[test]
fn test_draw_point_count_truncates_average_sections() {
    let sheet = Sheet {
        sections: Some((4, 3)),
        tessellation: (9, 10),
    };
    // trunc(3.5) * (9.5 - 1) = 25.5
    assert_eq!(draw_point_count::<f64>(&sheet), 25);
}

#[test]
fn test_draw_point_count_without_surface() {
    let sheet = Sheet {
        sections: None,
        tessellation: (9, 10),
    };
    assert_eq!(draw_point_count::<f64>(&sheet), 0);
}

#[test]
fn test_draw_point_count_degenerate_tessellation() {
    let sheet = Sheet {
        sections: Some((2, 2)),
        tessellation: (0, 0),
    };
    assert_eq!(draw_point_count::<f64>(&sheet), 0);
}
