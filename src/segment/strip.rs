use nalgebra::{Point3, Vector3};

use crate::{mesh::TriangleMesh, misc::FloatingPoint};

use super::BoundarySegment;

/// Options for synthesizing the planar strip that stands a boundary segment up
/// across a synthetic thickness axis.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StripOptions<T: FloatingPoint> {
    /// Number of interior cut lines along the segment
    pub cut_lines: usize,
    /// Number of interior lines across the thickness axis
    pub thickness_lines: usize,
    /// Total extent of the strip across the thickness axis, centered on zero
    pub thickness: T,
    /// Edges shorter than this are treated as degenerate and their triangle is skipped
    pub degenerate_tolerance: T,
}

impl<T: FloatingPoint> Default for StripOptions<T> {
    fn default() -> Self {
        Self {
            cut_lines: 0,
            thickness_lines: 0,
            thickness: T::constant(2.),
            degenerate_tolerance: T::constant(1e-6),
        }
    }
}

impl<T: FloatingPoint> StripOptions<T> {
    pub fn with_cut_lines(mut self, cut_lines: usize) -> Self {
        self.cut_lines = cut_lines;
        self
    }

    pub fn with_thickness_lines(mut self, thickness_lines: usize) -> Self {
        self.thickness_lines = thickness_lines;
        self
    }

    pub fn with_thickness(mut self, thickness: T) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn with_degenerate_tolerance(mut self, tolerance: T) -> Self {
        self.degenerate_tolerance = tolerance;
        self
    }
}

impl<T: FloatingPoint> BoundarySegment<T> {
    /// Build a triangle strip lying in the plane spanned by the segment direction and the thickness axis.
    /// Each quad cell emits up to two triangles; a triangle with a near-zero edge is skipped.
    pub fn synthesize_strip(&self, options: &StripOptions<T>) -> TriangleMesh<T> {
        let direction = self.direction();
        let dc = Vector3::new(direction.x, direction.y, T::zero())
            / T::from_count(options.cut_lines + 1);
        let dz = Vector3::new(T::zero(), T::zero(), options.thickness)
            / T::from_count(options.thickness_lines + 1);
        let start = Point3::new(
            self.scaled_start().x,
            self.scaled_start().y,
            -options.thickness / T::constant(2.),
        );

        let grid = (0..options.cut_lines + 2)
            .map(|c| {
                (0..options.thickness_lines + 2)
                    .map(|z| start + dc * T::from_count(c) + dz * T::from_count(z))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        let tol = options.degenerate_tolerance;
        let mut mesh = TriangleMesh::default();
        for c in 0..grid.len() - 1 {
            for z in 0..grid[c].len() - 1 {
                let v0 = grid[c][z];
                let v1 = grid[c + 1][z];
                let v2 = grid[c + 1][z + 1];
                let v3 = grid[c][z + 1];

                let d21 = v2 - v1;
                let d01 = v0 - v1;
                let d20 = v2 - v0;
                if d21.norm() > tol && d01.norm() > tol && d20.norm() > tol {
                    mesh.add_triangle(v0, v1, v2, d21.cross(&d01).normalize());
                }

                let d03 = v0 - v3;
                let d23 = v2 - v3;
                if d03.norm() > tol && d23.norm() > tol && d20.norm() > tol {
                    mesh.add_triangle(v0, v2, v3, d03.cross(&d23).normalize());
                }
            }
        }

        log::trace!(
            "synthesized strip with {} triangles for segment {:?} -> {:?}",
            mesh.len(),
            self.scaled_start(),
            self.scaled_end()
        );
        mesh
    }
}
