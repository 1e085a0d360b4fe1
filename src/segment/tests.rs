use approx::assert_relative_eq;
use nalgebra::{Point2, Point3, Vector2, Vector3};

use super::*;
use crate::{draw::DrawObject, surface::ParametricSurface};

struct Identity {
    sections: (usize, usize),
}

impl ParametricSurface<f64> for Identity {
    fn section_count_u(&self) -> usize {
        self.sections.0
    }

    fn section_count_w(&self) -> usize {
        self.sections.1
    }

    fn point_at(&self, u: f64, w: f64) -> Point3<f64> {
        Point3::new(u, w, 1.)
    }
}

#[test]
fn test_half_plane_greater() {
    let segment = BoundarySegment::new(Point2::new(0., 0.), Point2::new(1., 0.));
    assert!(segment.contains(&Point2::new(0.5, 1.)));
    assert!(!segment.contains(&Point2::new(0.5, -1.)));
}

#[test]
fn test_half_plane_less() {
    let segment = BoundarySegment::new(Point2::new(0., 0.), Point2::new(1., 0.))
        .with_sense(HalfPlaneSense::Less);
    assert!(!segment.contains(&Point2::new(0.5, 1.)));
    assert!(segment.contains(&Point2::new(0.5, -1.)));
}

#[test]
fn test_points_on_line_are_never_contained() {
    for sense in [HalfPlaneSense::Greater, HalfPlaneSense::Less] {
        let segment =
            BoundarySegment::new(Point2::new(0., 0.), Point2::new(1., 1.)).with_sense(sense);
        assert!(!segment.contains(&Point2::new(0.5, 0.5)));
        assert!(!segment.contains(&Point2::new(3., 3.)));
        assert!(!segment.contains(&Point2::new(0., 0.)));
    }
}

#[test]
fn test_rescale_refreshes_direction() {
    let mut segment = BoundarySegment::new(Point2::new(0.1, 0.2), Point2::new(0.5, 0.8));
    assert_relative_eq!(*segment.direction(), Vector2::new(0.4, 0.6), epsilon = 1e-12);

    segment.rescale(10, 5);
    assert_relative_eq!(*segment.scaled_start(), Point2::new(1., 1.), epsilon = 1e-12);
    assert_relative_eq!(*segment.scaled_end(), Point2::new(5., 4.), epsilon = 1e-12);
    assert_relative_eq!(*segment.direction(), Vector2::new(4., 3.), epsilon = 1e-12);
    // normalized points are untouched
    assert_relative_eq!(*segment.normalized_start(), Point2::new(0.1, 0.2));

    segment.set_normalized(Point2::new(0., 0.), Point2::new(1., 1.));
    assert_relative_eq!(*segment.scaled_end(), Point2::new(10., 5.), epsilon = 1e-12);
    assert_relative_eq!(*segment.direction(), Vector2::new(10., 5.), epsilon = 1e-12);
}

#[test]
fn test_normalized_and_scaled_half_plane_agree() {
    let mut segment = BoundarySegment::new(Point2::new(0.2, 0.1), Point2::new(0.7, 0.9));
    segment.rescale(12, 3);
    let queries = [
        Point2::new(0.1, 0.8),
        Point2::new(0.9, 0.2),
        Point2::new(0.45, 0.5),
        Point2::new(0.6, 0.3),
    ];
    for q in queries {
        let scaled = Point2::new(q.x * 12., q.y * 3.);
        assert_eq!(segment.contains(&scaled), segment.contains_normalized(&q));
    }
}

#[test]
fn test_split_keeps_both_spaces_consistent() {
    let mut segment = BoundarySegment::new(Point2::new(0., 0.), Point2::new(1., 0.5))
        .with_sense(HalfPlaneSense::Less);
    segment.rescale(10, 4);
    let tail = segment.split_at(0.25);

    assert_relative_eq!(*segment.scaled_end(), Point2::new(2.5, 0.5), epsilon = 1e-12);
    assert_relative_eq!(*segment.normalized_end(), Point2::new(0.25, 0.125), epsilon = 1e-12);
    assert_relative_eq!(*segment.direction(), Vector2::new(2.5, 0.5), epsilon = 1e-12);

    assert_eq!(tail.scaled_start(), segment.scaled_end());
    assert_eq!(tail.normalized_start(), segment.normalized_end());
    assert_relative_eq!(*tail.scaled_end(), Point2::new(10., 2.), epsilon = 1e-12);
    assert_relative_eq!(*tail.direction(), Vector2::new(7.5, 1.5), epsilon = 1e-12);
    assert_eq!(tail.sense(), HalfPlaneSense::Less);
}

#[test]
fn test_strip_of_zero_length_segment_is_empty() {
    let segment = BoundarySegment::new(Point2::new(0.3, 0.3), Point2::new(0.3, 0.3));
    let mesh = segment.synthesize_strip(&StripOptions::default());
    assert!(mesh.is_empty());
}

#[test]
fn test_strip_default_is_one_quad() {
    let mut segment = BoundarySegment::<f64>::new(Point2::new(0., 0.), Point2::new(1., 0.));
    segment.rescale(3, 1);
    let mesh = segment.synthesize_strip(&StripOptions::default());
    assert_eq!(mesh.len(), 2);
    // 3 x 2 rectangle standing on the U axis
    assert_relative_eq!(mesh.area(), 6., epsilon = 1e-12);

    let zs = mesh.vertices().iter().map(|v| v.z).collect::<Vec<_>>();
    assert!(zs.iter().all(|z| (*z + 1.).abs() < 1e-12 || (*z - 1.).abs() < 1e-12));

    for n in mesh.normals() {
        assert_relative_eq!(n.norm(), 1., epsilon = 1e-12);
        assert_relative_eq!(n.y.abs(), 1., epsilon = 1e-12);
    }
    // both triangles wind the same way
    assert_relative_eq!(mesh.normals()[0], mesh.normals()[1], epsilon = 1e-12);
    assert_relative_eq!(mesh.normals()[0], Vector3::new(0., -1., 0.), epsilon = 1e-12);
}

#[test]
fn test_strip_subdivisions() {
    let segment = BoundarySegment::new(Point2::new(0., 0.), Point2::new(0., 1.));
    let options = StripOptions::default()
        .with_cut_lines(2)
        .with_thickness_lines(1)
        .with_thickness(4.);
    let mesh = segment.synthesize_strip(&options);
    assert_eq!(mesh.len(), 3 * 2 * 2);
    assert_relative_eq!(mesh.area(), 4., epsilon = 1e-12);
}

#[test]
fn test_draw_polyline() {
    let mut segment = BoundarySegment::new(Point2::new(0., 0.), Point2::new(1., 1.));
    segment.rescale(4, 2);
    let surface = Identity { sections: (4, 2) };
    let mut object = DrawObject::default();
    segment.update_draw_object(&surface, &mut object, 4);

    assert_eq!(object.points.len(), 8);
    assert!(object.geometry_changed);
    assert_relative_eq!(object.points[0], Point3::new(0., 0., 1.));
    assert_relative_eq!(object.points[1], Point3::new(1., 0.5, 1.));
    assert_eq!(object.points[1], object.points[2]);
    assert_relative_eq!(object.points[7], Point3::new(4., 2., 1.));

    segment.update_draw_object(&surface, &mut object, 0);
    assert!(object.points.is_empty());
}
