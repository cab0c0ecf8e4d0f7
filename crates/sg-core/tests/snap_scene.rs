//! Integration tests: measure → detect → apply over scene shapes (sg-core).

use pretty_assertions::assert_eq;
use sg_core::*;

fn measure_all(shapes: &[SceneShape], viewport: &ViewportTransform) -> Vec<ObjectMetrics> {
    shapes
        .iter()
        .filter_map(|s| ObjectMetrics::measure(s, viewport))
        .collect()
}

#[test]
fn rotated_neighbour_uses_its_bounding_box() {
    // 90° turns the 60 × 20 neighbour into a 20 × 60 box: left edge at 190
    let mut neighbour = SceneShape::new(ObjectId::intern("it_n"), Point::new(200.0, 400.0), 60.0, 20.0);
    neighbour.angle = 90.0;
    let mut active = SceneShape::new(ObjectId::intern("it_a"), Point::new(168.0, 100.0), 40.0, 40.0);

    let viewport = ViewportTransform::IDENTITY;
    let metrics = measure_all(&[active.clone(), neighbour], &viewport);
    let outcome = detect_snaps(&metrics[0], &metrics[1..], None, &GuideConfig::default());

    assert!(apply_snap(&mut active, &outcome));
    assert_eq!(active.center.y, 100.0);
    assert!((active.center.x - 170.0).abs() < 1e-9);
    assert_eq!(outcome.matches.len(), 1);
    assert_eq!(outcome.matches[0].kind, MatchKind::Edge);
}

#[test]
fn zoom_and_pan_do_not_change_the_result() {
    let active = SceneShape::new(ObjectId::intern("it_b"), Point::new(97.0, 53.0), 30.0, 30.0);
    let other = SceneShape::new(ObjectId::intern("it_c"), Point::new(100.0, 250.0), 30.0, 30.0);
    let config = GuideConfig::default();

    let run = |viewport: ViewportTransform| {
        let metrics = measure_all(&[active.clone(), other.clone()], &viewport);
        detect_snaps(&metrics[0], &metrics[1..], None, &config)
    };
    let plain = run(ViewportTransform::IDENTITY);
    let zoomed = run(ViewportTransform::new(4.0, -120.0, 35.0));

    assert_eq!(plain.x, Some(100.0));
    assert_eq!(plain.y, None);
    assert_eq!(plain.x, zoomed.x);
    assert_eq!(plain.matches.len(), zoomed.matches.len());
}

#[test]
fn canvas_center_from_visible_frame() {
    let mut active = SceneShape::new(ObjectId::intern("it_d"), Point::new(202.0, 148.0), 20.0, 20.0);
    let viewport = ViewportTransform::new(2.0, 0.0, 0.0);
    let frame = CanvasFrame::visible(Size::new(800.0, 600.0), &viewport);
    assert_eq!(frame.map(|f| f.center), Some(Point::new(200.0, 150.0)));

    let metrics = measure_all(std::slice::from_ref(&active), &viewport);
    let outcome = detect_snaps(&metrics[0], &[], frame.as_ref(), &GuideConfig::default());
    apply_snap(&mut active, &outcome);

    assert_eq!(active.center, Point::new(200.0, 150.0));
    assert!(outcome.matches.iter().all(|m| m.kind == MatchKind::CanvasCenter));
}
