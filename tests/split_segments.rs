use approx::assert_relative_eq;
use nalgebra::{Point2, Point3};
use std::collections::HashMap;
use subsurf::prelude::*;

/// Cylindrical skin patch: U runs around the circumference, W along the axis.
struct Skin {
    sections_u: usize,
    sections_w: usize,
}

impl ParametricSurface<f64> for Skin {
    fn section_count_u(&self) -> usize {
        self.sections_u
    }

    fn section_count_w(&self) -> usize {
        self.sections_w
    }

    fn point_at(&self, u: f64, w: f64) -> Point3<f64> {
        let angle = std::f64::consts::TAU * u / self.sections_u as f64;
        Point3::new(angle.cos(), angle.sin(), w)
    }
}

impl OwnerGeometry<f64> for Skin {
    fn surface(&self) -> Option<&dyn ParametricSurface<f64>> {
        Some(self)
    }

    fn tessellation_u(&self) -> usize {
        6
    }

    fn tessellation_w(&self) -> usize {
        4
    }
}

fn geometries() -> HashMap<GeometryId, Skin> {
    HashMap::from([(
        GeometryId::new("pod"),
        Skin {
            sections_u: 8,
            sections_w: 6,
        },
    )])
}

fn assert_connected(segments: &[BoundarySegment<f64>]) {
    let n = segments.len();
    for i in 0..n {
        assert_eq!(
            segments[i].scaled_end(),
            segments[(i + 1) % n].scaled_start(),
            "joint {} is broken",
            i
        );
    }
}

#[test]
fn test_split_rectangle_on_section_grid() {
    let rect = RectangleShape::try_new(Point2::new(0.5, 0.5), 0.5, 0.5, 0.).unwrap();
    let mut panel = SubSurface::from_shape("pod", &rect);
    panel.update(&geometries());

    // rectangle spans U in [2, 6] and W in [1.5, 4.5]
    let u_grid = (0..=8).map(|u| u as f64).collect::<Vec<_>>();
    let w_grid = (0..=6).map(|w| w as f64).collect::<Vec<_>>();
    panel.split_segments(&u_grid, &w_grid);

    let result = panel.split_result();
    // U = 3, 4, 5 cross top and bottom, W = 2, 3, 4 cross both sides
    assert_eq!(result.len(), 4 + 6 + 6);
    assert_connected(result);
    assert_eq!(*result[0].scaled_start(), Point2::new(3., 1.5));

    // every piece lies within a single grid cell
    for s in result {
        let (a, b) = (s.scaled_start(), s.scaled_end());
        assert!((a.x.floor() - b.x.floor()).abs() <= 1.);
        assert!((a.y.floor() - b.y.floor()).abs() <= 1.);
        assert!(s.direction().norm() <= 1. + 1e-12);
    }

    assert_eq!(panel.segments().len(), 4);
}

#[test]
fn test_split_is_pure_function_of_inputs() {
    let ellipse = EllipseShape::try_new(Point2::new(0.4, 0.6), 0.3, 0.5, 30., 24).unwrap();
    let mut sub = SubSurface::from_shape("pod", &ellipse);
    sub.update(&geometries());

    sub.split_segments(&[2., 3., 4.], &[3., 4.]);
    let first = sub.split_result().to_vec();
    sub.split_segments(&[2., 3., 4.], &[3., 4.]);
    assert_eq!(first, sub.split_result());
    assert_connected(&first);
    assert!(first.len() > 24);

    let perimeter = |segments: &[BoundarySegment<f64>]| {
        segments.iter().map(|s| s.direction().norm()).sum::<f64>()
    };
    assert_relative_eq!(
        perimeter(&first),
        perimeter(sub.segments().segments()),
        epsilon = 1e-9
    );
}

#[test]
fn test_tagging_mesh_triangles() {
    let rect = RectangleShape::try_new(Point2::new(0.5, 0.5), 0.5, 0.5, 0.).unwrap();
    let mut panel = SubSurface::from_shape("pod", &rect);
    panel.update(&geometries());

    // a structured grid of triangles in normalized space, two per cell
    let n = 10;
    let h = 1. / n as f64;
    let mut tagged = 0;
    for i in 0..n {
        for j in 0..n {
            let p = |di: usize, dj: usize| Point2::new((i + di) as f64 * h, (j + dj) as f64 * h);
            for tri in [[p(0, 0), p(1, 0), p(1, 1)], [p(0, 0), p(1, 1), p(0, 1)]] {
                if panel.subtag_triangle(&tri) {
                    tagged += 1;
                }
            }
        }
    }
    // centroids sit at 1/3 and 2/3 of a cell, each triangle orientation tags a 5 x 5 block
    assert_eq!(tagged, 2 * 5 * 5);

    let meshes = panel.build_meshes();
    assert_eq!(meshes.len(), 4);
    let objects = panel.draw_objects();
    assert_eq!(objects.len(), 4);
    // trunc(7) * (5 - 1) samples
    assert!(objects.iter().all(|o| o.points.len() == 56));
}
