use nalgebra::{Point2, Vector3};

use crate::{
    chain::SegmentChain,
    draw::{draw_point_count, DrawKind, DrawObject},
    mesh::TriangleMesh,
    misc::FloatingPoint,
    polygon::PolygonCache,
    segment::BoundarySegment,
    shape::{BoundaryShape, ShapeKind},
    split::{GridAxis, SplitEngine},
    surface::{GeometryId, GeometryLookup, ParametricTriangle},
};

use super::{SubSurfaceOptions, TestMode};

/// A bounded region marked on the surface of an owner geometry.
///
/// Owns the authoritative boundary chain, a lazily rebuilt containment polygon,
/// and a transient working chain used while splitting at mesh grid lines.
/// The owner is referenced by id only and resolved through a [`GeometryLookup`] when needed.
#[derive(Debug, Clone)]
pub struct SubSurface<T: FloatingPoint> {
    id: String,
    owner: GeometryId,
    kind: ShapeKind,
    test_mode: TestMode,
    tag: i32,
    chain: SegmentChain<T>,
    polygon: PolygonCache<T>,
    splitter: SplitEngine<T>,
    draw_objects: Vec<DrawObject<T>>,
    update_draw: bool,
    options: SubSurfaceOptions<T>,
}

impl<T: FloatingPoint> SubSurface<T> {
    /// Create a subsurface with an empty boundary.
    pub fn new(owner: impl Into<GeometryId>, kind: ShapeKind) -> Self {
        let options = SubSurfaceOptions::default();
        Self {
            id: String::new(),
            owner: owner.into(),
            kind,
            test_mode: TestMode::default(),
            tag: 0,
            chain: SegmentChain::default(),
            polygon: PolygonCache::new(),
            splitter: SplitEngine::new(options.split.clone()),
            draw_objects: vec![],
            update_draw: true,
            options,
        }
    }

    /// Create a subsurface whose boundary is produced by `shape`.
    pub fn from_shape(owner: impl Into<GeometryId>, shape: &impl BoundaryShape<T>) -> Self {
        let mut surface = Self::new(owner, shape.kind());
        surface.chain = shape.boundary();
        surface
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_test_mode(mut self, test_mode: TestMode) -> Self {
        self.test_mode = test_mode;
        self
    }

    pub fn with_options(mut self, options: SubSurfaceOptions<T>) -> Self {
        self.splitter = SplitEngine::new(options.split.clone());
        self.options = options;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn owner_id(&self) -> &GeometryId {
        &self.owner
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.name()
    }

    /// Whether the region is tagged through polygon containment.
    pub fn is_polygon(&self) -> bool {
        self.kind.is_polygon()
    }

    pub fn options(&self) -> &SubSurfaceOptions<T> {
        &self.options
    }

    pub fn test_mode(&self) -> TestMode {
        self.test_mode
    }

    pub fn set_test_mode(&mut self, test_mode: TestMode) {
        self.test_mode = test_mode;
    }

    /// Tag id assigned to triangles classified into this subsurface.
    pub fn tag(&self) -> i32 {
        self.tag
    }

    pub fn set_tag(&mut self, tag: i32) {
        self.tag = tag;
    }

    pub fn segments(&self) -> &SegmentChain<T> {
        &self.chain
    }

    /// Replace the authoritative boundary chain.
    /// The chain is kept as is until the next [`SubSurface::update`] rescales it.
    pub fn set_boundary(&mut self, chain: SegmentChain<T>) {
        self.chain = chain;
        self.polygon.invalidate();
    }

    /// Classify a point given in normalized (U, W) coordinates.
    ///
    /// Polygon subsurfaces test containment in the boundary polygon combined with the test mode.
    /// Line subsurfaces use the half-plane test of their segment.
    pub fn subtag(&mut self, point: &Point2<T>) -> bool {
        if !self.is_polygon() {
            return self
                .chain
                .iter()
                .next()
                .is_some_and(|segment| segment.contains_normalized(point));
        }
        let inside = self.polygon.contains(&self.chain, point);
        inside == (self.test_mode == TestMode::Inside)
    }

    /// Classify a triangle by its parametric centroid.
    pub fn subtag_triangle(&mut self, triangle: &impl ParametricTriangle<T>) -> bool {
        self.subtag(&triangle.parametric_centroid())
    }

    /// Refresh derived state after any defining parameter changed.
    ///
    /// Invalidates the containment polygon, rescales the boundary to the owner surface's
    /// section counts and rebuilds the draw objects. Rescaling is skipped when the owner
    /// or its surface cannot be resolved.
    pub fn update<L>(&mut self, lookup: &L)
    where
        L: GeometryLookup<T> + ?Sized,
    {
        self.polygon.invalidate();
        match lookup.resolve(&self.owner).and_then(|g| g.surface()) {
            Some(surface) => self
                .chain
                .rescale(surface.section_count_u(), surface.section_count_w()),
            None => log::debug!(
                "owner {} of subsurface {:?} has no surface, skipped rescale",
                self.owner,
                self.id
            ),
        }
        self.update_draw_objects(lookup);
    }

    /// One strip mesh per boundary segment, in segment order.
    pub fn build_meshes(&self) -> Vec<TriangleMesh<T>> {
        self.chain
            .iter()
            .map(|segment| segment.synthesize_strip(&self.options.strip))
            .collect()
    }

    pub fn set_update_draw(&mut self, flag: bool) {
        self.update_draw = flag;
    }

    pub fn set_line_color(&mut self, color: Vector3<T>) {
        self.options.draw.line_color = color;
    }

    /// Rebuild one line-pair draw object per boundary segment.
    /// Objects stay empty when the owner or its surface cannot be resolved.
    pub fn update_draw_objects<L>(&mut self, lookup: &L)
    where
        L: GeometryLookup<T> + ?Sized,
    {
        if !self.update_draw {
            return;
        }

        self.draw_objects = vec![DrawObject::default(); self.chain.len()];
        let Some(geometry) = lookup.resolve(&self.owner) else {
            return;
        };
        let Some(surface) = geometry.surface() else {
            return;
        };

        let num_points = draw_point_count(geometry);
        let draw = &self.options.draw;
        for (segment, object) in self.chain.iter().zip(self.draw_objects.iter_mut()) {
            segment.update_draw_object(surface, object, num_points);
            object.line_width = draw.line_width;
            object.line_color = draw.segment_color;
            object.kind = DrawKind::Lines;
        }
    }

    /// Draw objects stamped with the subsurface line color and per-segment ids.
    pub fn draw_objects(&mut self) -> &[DrawObject<T>] {
        let color = self.options.draw.line_color;
        for (i, object) in self.draw_objects.iter_mut().enumerate() {
            object.line_color = color;
            object.id = format!("{}{}", self.id, i);
        }
        &self.draw_objects
    }

    /// Copy the authoritative chain into a fresh working chain and re-arm the one-shot reorder.
    pub fn prepare_split(&mut self) {
        self.splitter.prepare(&self.chain);
    }

    /// Discard the working chain. The authoritative chain is not affected.
    pub fn clean_up_split(&mut self) {
        self.splitter.clean_up();
    }

    /// Split a fresh working chain at the given U grid values, then at the W grid values.
    pub fn split_segments(&mut self, u_values: &[T], w_values: &[T]) {
        self.clean_up_split();
        self.prepare_split();
        self.splitter.split(u_values, w_values);
    }

    /// Split the current working chain at a single constant U value.
    pub fn split_segments_u(&mut self, u: T) {
        self.splitter.split_along(GridAxis::U, u);
    }

    /// Split the current working chain at a single constant W value.
    pub fn split_segments_w(&mut self, w: T) {
        self.splitter.split_along(GridAxis::W, w);
    }

    /// Segments of the working chain produced by the last split.
    pub fn split_result(&self) -> &[BoundarySegment<T>] {
        self.splitter.segments()
    }

    /// Hand the working chain over to the caller.
    pub fn take_split_result(&mut self) -> SegmentChain<T> {
        self.splitter.take()
    }
}
