#![cfg(feature = "serde")]

use nalgebra::Point2;
use subsurf::prelude::{
    BoundaryShape, HalfPlaneSense, RectangleShape, SegmentChain, SubSurfaceOptions,
    SubSurfaceShape,
};

#[test]
fn test_options_round_trip() {
    let options = SubSurfaceOptions::<f64>::default();
    let json = serde_json::to_string_pretty(&options).unwrap();
    let restored: SubSurfaceOptions<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(options, restored);
}

#[test]
fn test_chain_serialization() {
    let mut chain = RectangleShape::<f64>::default().boundary();
    chain.rescale(8, 2);
    let json = serde_json::to_string(&chain).unwrap();
    let restored: SegmentChain<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, chain);
    assert_eq!(restored[0].sense(), HalfPlaneSense::Greater);
}

#[test]
fn test_shape_serialization() {
    let shape: SubSurfaceShape<f64> =
        RectangleShape::try_new(Point2::new(0.3, 0.7), 0.1, 0.2, 15.)
            .unwrap()
            .into();
    let json = serde_json::to_string(&shape).unwrap();
    let restored: SubSurfaceShape<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, shape);
}

#[test]
fn test_draw_colors_round_trip_exactly() {
    let draw = subsurf::prelude::DrawOptions::<f64>::default()
        .with_segment_color(nalgebra::Vector3::new(13. / 255., 58. / 255., 1. / 3.));
    let json = serde_json::to_string(&draw).unwrap();
    let restored: subsurf::prelude::DrawOptions<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.segment_color, draw.segment_color);
}
