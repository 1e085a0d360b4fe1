use nalgebra::{Point3, Vector3};

use crate::misc::FloatingPoint;

/// Triangle soup in (U, W, thickness) space.
/// Every triangle owns its three vertices and carries a unit normal.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriangleMesh<T: FloatingPoint> {
    vertices: Vec<Point3<T>>,
    faces: Vec<[usize; 3]>,
    normals: Vec<Vector3<T>>,
}

impl<T: FloatingPoint> Default for TriangleMesh<T> {
    fn default() -> Self {
        Self::new(vec![], vec![], vec![])
    }
}

impl<T: FloatingPoint> TriangleMesh<T> {
    pub fn new(vertices: Vec<Point3<T>>, faces: Vec<[usize; 3]>, normals: Vec<Vector3<T>>) -> Self {
        Self {
            vertices,
            faces,
            normals,
        }
    }

    /// Append a triangle with its precomputed normal.
    pub fn add_triangle(&mut self, a: Point3<T>, b: Point3<T>, c: Point3<T>, normal: Vector3<T>) {
        let i = self.vertices.len();
        self.vertices.extend([a, b, c]);
        self.faces.push([i, i + 1, i + 2]);
        self.normals.push(normal);
    }

    pub fn vertices(&self) -> &[Point3<T>] {
        &self.vertices
    }

    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    pub fn normals(&self) -> &[Vector3<T>] {
        &self.normals
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn triangles(&self) -> Vec<[Point3<T>; 3]> {
        self.faces
            .iter()
            .map(|[a, b, c]| [self.vertices[*a], self.vertices[*b], self.vertices[*c]])
            .collect()
    }

    pub fn area(&self) -> T {
        self.triangles()
            .iter()
            .map(|[a, b, c]| {
                let ab = b - a;
                let ac = c - a;
                ab.cross(&ac).norm()
            })
            .fold(T::zero(), |a, b| a + b)
            / T::constant(2.)
    }
}

impl<T: FloatingPoint> std::ops::Add<TriangleMesh<T>> for TriangleMesh<T> {
    type Output = TriangleMesh<T>;

    fn add(self, rhs: TriangleMesh<T>) -> Self::Output {
        let v0 = self.vertices.len();
        let vertices = [self.vertices, rhs.vertices].concat();
        let faces = [
            self.faces,
            rhs.faces
                .iter()
                .map(|[a, b, c]| [*a + v0, *b + v0, *c + v0])
                .collect(),
        ]
        .concat();
        let normals = [self.normals, rhs.normals].concat();
        Self::Output::new(vertices, faces, normals)
    }
}

impl<T: FloatingPoint> std::iter::Sum for TriangleMesh<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |a, b| a + b)
    }
}
