//! Snap detection: active object vs. candidates and the canvas center.
//!
//! One pass resolves at most one x snap and one y snap. Candidates are
//! visited in the order given; per candidate the relations are tried in
//! priority order:
//!
//! 1. center ↔ center
//! 2. edge ↔ edge (left/right for x, top/bottom for y)
//! 3. corner ↔ corner (4 × 4 pairs)
//! 4. corner ↔ center
//!
//! and after all candidates, 5. center ↔ canvas mid-lines.
//!
//! The first in-range relation on an axis claims it. Later relations and
//! later candidates are not tested on a claimed axis, even if they would
//! need a smaller offset. Nothing is written to the object here; the
//! resolver applies the outcome once the pass is over.
//!
//! Guide extents are measured from the resolved center, so each line reaches
//! the object where it lands rather than where it was dragged.

use crate::config::GuideConfig;
use crate::geometry::{CanvasFrame, in_center_window, in_range};
use crate::metrics::{CORNER_SIGNS, ObjectMetrics};
use crate::queue::{AlignmentMatch, CrossMark, GuideAxis, MatchKind};
use kurbo::Point;
use smallvec::SmallVec;

/// Result of one snap pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapOutcome {
    /// Resolved center x, if the x axis snapped.
    pub x: Option<f64>,
    /// Resolved center y, if the y axis snapped.
    pub y: Option<f64>,
    /// At most one match per axis.
    pub matches: SmallVec<[AlignmentMatch; 2]>,
    pub crosses: SmallVec<[CrossMark; 2]>,
}

impl SnapOutcome {
    pub fn is_snapped(&self) -> bool {
        self.x.is_some() || self.y.is_some()
    }
}

/// Run a snap pass for `active` against `candidates` (the active object must
/// not be among them) and, when given, the visible canvas frame.
pub fn detect_snaps(
    active: &ObjectMetrics,
    candidates: &[ObjectMetrics],
    canvas: Option<&CanvasFrame>,
    config: &GuideConfig,
) -> SnapOutcome {
    let mut pass = SnapPass {
        active,
        margin: config.margin,
        outcome: SnapOutcome::default(),
        guides: SmallVec::new(),
    };

    if config.snap_to_objects {
        for candidate in candidates {
            if pass.is_complete() {
                break;
            }
            pass.center_to_center(candidate);
            pass.edge_to_edge(candidate);
            if config.snap_to_corners {
                pass.corner_to_corner(candidate);
                pass.corner_to_center(candidate);
            }
        }
    }

    if config.snap_to_canvas_center
        && let Some(frame) = canvas
    {
        pass.canvas_center(frame);
    }

    let outcome = pass.finish();
    log::trace!(
        "snap pass over {} candidates: x={:?} y={:?} crosses={}",
        candidates.len(),
        outcome.x,
        outcome.y,
        outcome.crosses.len()
    );
    outcome
}

/// A claimed guide whose extent is settled once both axes are resolved.
#[derive(Debug, Clone, Copy)]
struct PendingGuide {
    axis: GuideAxis,
    kind: MatchKind,
    coordinate: f64,
    /// Span of the active object along the line, as offsets from its
    /// resolved center. `None` for guides that ignore the active object.
    active_span: Option<(f64, f64)>,
    /// Span of the matched element along the line.
    target_span: (f64, f64),
}

impl PendingGuide {
    fn resolve(&self, center: Point) -> AlignmentMatch {
        let along = match self.axis {
            GuideAxis::Vertical => center.y,
            GuideAxis::Horizontal => center.x,
        };
        let (mut start, mut end) = self.target_span;
        if let Some((lo, hi)) = self.active_span {
            start = start.min(along + lo);
            end = end.max(along + hi);
        }
        match self.axis {
            GuideAxis::Vertical => AlignmentMatch::vertical(self.kind, self.coordinate, start, end),
            GuideAxis::Horizontal => {
                AlignmentMatch::horizontal(self.kind, self.coordinate, start, end)
            }
        }
    }
}

struct SnapPass<'a> {
    active: &'a ObjectMetrics,
    margin: f64,
    outcome: SnapOutcome,
    guides: SmallVec<[PendingGuide; 2]>,
}

impl SnapPass<'_> {
    fn is_complete(&self) -> bool {
        self.outcome.x.is_some() && self.outcome.y.is_some()
    }

    fn aligned(&self, a: f64, b: f64) -> bool {
        in_range(a, b, self.margin)
    }

    /// Claim the x axis unless it is already taken. The guide is a vertical
    /// line at `line_x`.
    fn claim_x(
        &mut self,
        center_x: f64,
        kind: MatchKind,
        line_x: f64,
        active_span: Option<(f64, f64)>,
        target_span: (f64, f64),
    ) {
        if self.outcome.x.is_some() {
            return;
        }
        self.outcome.x = Some(center_x);
        self.guides.push(PendingGuide {
            axis: GuideAxis::Vertical,
            kind,
            coordinate: line_x,
            active_span,
            target_span,
        });
    }

    /// Claim the y axis unless it is already taken. The guide is a horizontal
    /// line at `line_y`.
    fn claim_y(
        &mut self,
        center_y: f64,
        kind: MatchKind,
        line_y: f64,
        active_span: Option<(f64, f64)>,
        target_span: (f64, f64),
    ) {
        if self.outcome.y.is_some() {
            return;
        }
        self.outcome.y = Some(center_y);
        self.guides.push(PendingGuide {
            axis: GuideAxis::Horizontal,
            kind,
            coordinate: line_y,
            active_span,
            target_span,
        });
    }

    /// Mark `at` when the resolved centers are exactly the ones that land the
    /// active point on it.
    fn cross_if_coincident(&mut self, at: Point, center_x: f64, center_y: f64) {
        let same = |resolved: Option<f64>, wanted: f64| {
            resolved.is_some_and(|v| (v - wanted).abs() < 1e-9)
        };
        if same(self.outcome.x, center_x) && same(self.outcome.y, center_y) {
            let mark = CrossMark::from(at);
            if !self.outcome.crosses.contains(&mark) {
                self.outcome.crosses.push(mark);
            }
        }
    }

    /// Settle guide extents against the resolved center.
    fn finish(self) -> SnapOutcome {
        let a = self.active;
        let mut outcome = self.outcome;
        let center = Point::new(
            outcome.x.unwrap_or(a.center.x),
            outcome.y.unwrap_or(a.center.y),
        );
        outcome.matches = self.guides.iter().map(|g| g.resolve(center)).collect();
        outcome
    }

    // ─── Relations ───────────────────────────────────────────────────────

    fn center_to_center(&mut self, c: &ObjectMetrics) {
        let a = self.active;
        if self.outcome.x.is_none() && self.aligned(a.center.x, c.center.x) {
            let target = (c.center.y, c.center.y);
            self.claim_x(c.center.x, MatchKind::Center, c.center.x, Some((0.0, 0.0)), target);
        }
        if self.outcome.y.is_none() && self.aligned(a.center.y, c.center.y) {
            let target = (c.center.x, c.center.x);
            self.claim_y(c.center.y, MatchKind::Center, c.center.y, Some((0.0, 0.0)), target);
        }
    }

    fn edge_to_edge(&mut self, c: &ObjectMetrics) {
        let a = self.active;

        // (active edge, its offset from the active center, candidate edge)
        let x_pairs = [
            (a.right(), a.half_width, c.left()),
            (a.left(), -a.half_width, c.right()),
            (a.left(), -a.half_width, c.left()),
            (a.right(), a.half_width, c.right()),
        ];
        for (edge, offset, target) in x_pairs {
            if self.outcome.x.is_some() {
                break;
            }
            if self.aligned(edge, target) {
                self.claim_x(
                    target - offset,
                    MatchKind::Edge,
                    target,
                    Some((-a.half_height, a.half_height)),
                    (c.top(), c.bottom()),
                );
            }
        }

        let y_pairs = [
            (a.top(), -a.half_height, c.bottom()),
            (a.bottom(), a.half_height, c.top()),
            (a.top(), -a.half_height, c.top()),
            (a.bottom(), a.half_height, c.bottom()),
        ];
        for (edge, offset, target) in y_pairs {
            if self.outcome.y.is_some() {
                break;
            }
            if self.aligned(edge, target) {
                self.claim_y(
                    target - offset,
                    MatchKind::Edge,
                    target,
                    Some((-a.half_width, a.half_width)),
                    (c.left(), c.right()),
                );
            }
        }
    }

    fn corner_to_corner(&mut self, c: &ObjectMetrics) {
        for (corner, (sx, sy)) in self.active.corners.into_iter().zip(CORNER_SIGNS) {
            for target in c.corners {
                self.point_to_point(corner, sx, sy, target, MatchKind::Corner);
            }
        }
    }

    fn corner_to_center(&mut self, c: &ObjectMetrics) {
        for (corner, (sx, sy)) in self.active.corners.into_iter().zip(CORNER_SIGNS) {
            self.point_to_point(corner, sx, sy, c.center, MatchKind::CornerToCenter);
        }
    }

    /// Try to align the active corner with signs `(sx, sy)` onto `target`.
    fn point_to_point(&mut self, corner: Point, sx: f64, sy: f64, target: Point, kind: MatchKind) {
        let a = self.active;
        let hit_x = self.aligned(corner.x, target.x);
        let hit_y = self.aligned(corner.y, target.y);
        if !hit_x && !hit_y {
            return;
        }

        let (dx, dy) = (sx * a.half_width, sy * a.half_height);
        let center_x = target.x - dx;
        let center_y = target.y - dy;
        if hit_x {
            self.claim_x(center_x, kind, target.x, Some((dy, dy)), (target.y, target.y));
        }
        if hit_y {
            self.claim_y(center_y, kind, target.y, Some((dx, dx)), (target.x, target.x));
        }
        if hit_x && hit_y {
            self.cross_if_coincident(target, center_x, center_y);
        }
    }

    fn canvas_center(&mut self, frame: &CanvasFrame) {
        let a = self.active;
        let bounds = frame.bounds;
        if self.outcome.x.is_none() && in_center_window(a.center.x, frame.center.x, self.margin) {
            let x = frame.center.x;
            self.claim_x(x, MatchKind::CanvasCenter, x, None, (bounds.y0, bounds.y1));
        }
        if self.outcome.y.is_none() && in_center_window(a.center.y, frame.center.y, self.margin) {
            let y = frame.center.y;
            self.claim_y(y, MatchKind::CanvasCenter, y, None, (bounds.x0, bounds.x1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Rect, Size};
    use pretty_assertions::assert_eq;

    fn metrics(cx: f64, cy: f64, hw: f64, hh: f64) -> ObjectMetrics {
        ObjectMetrics::new(Point::new(cx, cy), hw, hh)
    }

    fn objects_only() -> GuideConfig {
        GuideConfig {
            snap_to_canvas_center: false,
            ..GuideConfig::default()
        }
    }

    #[test]
    fn center_to_center_on_one_axis() {
        let active = metrics(100.0, 100.0, 20.0, 15.0);
        let candidate = metrics(100.0, 300.0, 20.0, 15.0);
        let out = detect_snaps(&active, &[candidate], None, &objects_only());

        assert_eq!(out.x, Some(100.0));
        assert_eq!(out.y, None);
        assert_eq!(
            out.matches.as_slice(),
            &[AlignmentMatch::vertical(MatchKind::Center, 100.0, 100.0, 300.0)]
        );
        assert!(out.crosses.is_empty());
    }

    #[test]
    fn center_snap_pulls_to_candidate() {
        let active = metrics(103.0, 100.0, 20.0, 15.0);
        let candidate = metrics(100.0, 300.0, 20.0, 15.0);
        let out = detect_snaps(&active, &[candidate], None, &objects_only());
        assert_eq!(out.x, Some(100.0));
        assert_eq!(out.matches[0].axis, GuideAxis::Vertical);
    }

    #[test]
    fn nothing_in_range_means_no_snap() {
        let active = metrics(100.0, 100.0, 10.0, 10.0);
        let candidate = metrics(200.0, 250.0, 10.0, 10.0);
        let out = detect_snaps(&active, &[candidate], None, &objects_only());
        assert_eq!(out, SnapOutcome::default());
        assert!(!out.is_snapped());
    }

    #[test]
    fn right_edge_meets_left_edge() {
        // active right edge 150, candidate left edge 152
        let active = metrics(130.0, 100.0, 20.0, 10.0);
        let candidate = metrics(172.0, 400.0, 20.0, 10.0);
        let out = detect_snaps(&active, &[candidate], None, &objects_only());

        assert_eq!(out.x, Some(132.0));
        assert_eq!(out.y, None);
        let guide = out.matches[0];
        assert_eq!(guide.kind, MatchKind::Edge);
        assert_eq!(guide.coordinate, 152.0);
        assert_eq!((guide.extent_start, guide.extent_end), (90.0, 410.0));
    }

    #[test]
    fn top_edge_meets_bottom_edge() {
        let active = metrics(500.0, 62.0, 10.0, 10.0);
        let candidate = metrics(100.0, 40.0, 10.0, 10.0);
        let out = detect_snaps(&active, &[candidate], None, &objects_only());
        // active top 52 vs candidate bottom 50
        assert_eq!(out.y, Some(60.0));
        assert_eq!(out.matches[0].axis, GuideAxis::Horizontal);
        assert_eq!(out.matches[0].coordinate, 50.0);
    }

    #[test]
    fn extents_follow_the_resolved_center() {
        // y snaps to the first candidate, x to the second
        let active = metrics(102.0, 302.0, 20.0, 15.0);
        let beside = metrics(300.0, 300.0, 20.0, 15.0);
        let below = metrics(100.0, 303.0, 20.0, 15.0);
        let out = detect_snaps(&active, &[beside, below], None, &objects_only());

        assert_eq!((out.x, out.y), (Some(100.0), Some(300.0)));
        assert_eq!(
            out.matches.as_slice(),
            &[
                AlignmentMatch::horizontal(MatchKind::Center, 300.0, 100.0, 300.0),
                AlignmentMatch::vertical(MatchKind::Center, 100.0, 300.0, 303.0),
            ]
        );
    }

    #[test]
    fn edge_extent_uses_the_snapped_box() {
        // x snaps left-to-right edge on the first candidate, y center on the second
        let active = metrics(101.0, 104.0, 20.0, 10.0);
        let left = metrics(60.0, 400.0, 20.0, 10.0);
        let level = metrics(700.0, 100.0, 20.0, 10.0);
        let out = detect_snaps(&active, &[left, level], None, &objects_only());

        assert_eq!((out.x, out.y), (Some(100.0), Some(100.0)));
        assert_eq!(
            out.matches.as_slice(),
            &[
                AlignmentMatch::vertical(MatchKind::Edge, 80.0, 90.0, 410.0),
                AlignmentMatch::horizontal(MatchKind::Center, 100.0, 100.0, 700.0),
            ]
        );
    }

    #[test]
    fn first_candidate_wins_over_later_ones() {
        let active = metrics(100.0, 100.0, 10.0, 10.0);
        let first = metrics(103.0, 500.0, 10.0, 10.0);
        let unrelated = metrics(700.0, 900.0, 10.0, 10.0);
        let third = metrics(101.0, 800.0, 10.0, 10.0);
        let out = detect_snaps(&active, &[first, unrelated, third], None, &objects_only());
        assert_eq!(out.x, Some(103.0));
        assert_eq!(out.matches.len(), 1);
    }

    #[test]
    fn center_relation_outranks_edge_relation() {
        // Same candidate is in range both center-to-center and left-to-left.
        let active = metrics(100.0, 100.0, 10.0, 10.0);
        let candidate = metrics(102.0, 400.0, 11.0, 10.0);
        let out = detect_snaps(&active, &[candidate], None, &objects_only());
        assert_eq!(out.x, Some(102.0));
        assert_eq!(out.matches[0].kind, MatchKind::Center);
    }

    #[test]
    fn corner_on_corner_emits_cross() {
        // active BR (121, 119) near candidate TL (122, 118)
        let active = metrics(111.0, 109.0, 10.0, 10.0);
        let candidate = metrics(142.0, 138.0, 20.0, 20.0);
        let out = detect_snaps(&active, &[candidate], None, &objects_only());

        assert_eq!(out.x, Some(112.0));
        assert_eq!(out.y, Some(108.0));
        assert_eq!(out.crosses.as_slice(), &[CrossMark { x: 122.0, y: 118.0 }]);
    }

    #[test]
    fn corner_on_center_emits_cross() {
        // active TL (201, 199) near candidate center (200, 200); candidate is
        // large enough that none of its edges are in range.
        let active = metrics(211.0, 209.0, 10.0, 10.0);
        let candidate = metrics(200.0, 200.0, 60.0, 60.0);
        let out = detect_snaps(&active, &[candidate], None, &objects_only());

        assert_eq!(out.x, Some(210.0));
        assert_eq!(out.y, Some(210.0));
        assert!(out.matches.iter().all(|m| m.kind == MatchKind::CornerToCenter));
        assert_eq!(out.crosses.as_slice(), &[CrossMark { x: 200.0, y: 200.0 }]);
    }

    #[test]
    fn corners_can_be_switched_off() {
        let active = metrics(211.0, 209.0, 10.0, 10.0);
        let candidate = metrics(200.0, 200.0, 60.0, 60.0);
        let config = GuideConfig {
            snap_to_corners: false,
            ..objects_only()
        };
        let out = detect_snaps(&active, &[candidate], None, &config);
        assert!(!out.is_snapped());
    }

    #[test]
    fn canvas_center_snaps_only_the_axis_in_window() {
        let frame = CanvasFrame::visible(
            Size::new(800.0, 600.0),
            &crate::geometry::ViewportTransform::IDENTITY,
        )
        .unwrap();
        let active = metrics(401.0, 500.0, 20.0, 20.0);
        let out = detect_snaps(&active, &[], Some(&frame), &GuideConfig::default());

        assert_eq!(out.x, Some(400.0));
        assert_eq!(out.y, None);
        assert_eq!(
            out.matches.as_slice(),
            &[AlignmentMatch::vertical(MatchKind::CanvasCenter, 400.0, 0.0, 600.0)]
        );
        assert_eq!(frame.bounds, Rect::new(0.0, 0.0, 800.0, 600.0));
    }

    #[test]
    fn canvas_center_handles_huge_margin_and_far_pan() {
        let screen = Size::new(800.0, 600.0);
        let config =
            GuideConfig::from_json(r#"{ "margin": 1e15, "snap_to_objects": false }"#).unwrap();
        let frame = CanvasFrame::visible(screen, &crate::geometry::ViewportTransform::IDENTITY)
            .unwrap();
        let out = detect_snaps(&metrics(-5e14, -5e14, 10.0, 10.0), &[], Some(&frame), &config);
        assert_eq!((out.x, out.y), (Some(400.0), Some(300.0)));

        let far = CanvasFrame::visible(
            screen,
            &crate::geometry::ViewportTransform::new(1.0, -1e17, 0.0),
        )
        .unwrap();
        let out = detect_snaps(&metrics(0.0, 300.0, 10.0, 10.0), &[], Some(&far), &GuideConfig::default());
        assert_eq!((out.x, out.y), (None, Some(300.0)));
    }

    #[test]
    fn objects_take_priority_over_canvas_center() {
        let frame = CanvasFrame::visible(
            Size::new(800.0, 600.0),
            &crate::geometry::ViewportTransform::IDENTITY,
        )
        .unwrap();
        let active = metrics(401.0, 500.0, 20.0, 20.0);
        let candidate = metrics(403.0, 100.0, 20.0, 20.0);
        let out = detect_snaps(&active, &[candidate], Some(&frame), &GuideConfig::default());
        assert_eq!(out.x, Some(403.0));
        assert_eq!(out.matches[0].kind, MatchKind::Center);
    }

    #[test]
    fn snapped_configuration_is_a_fixed_point() {
        let candidate = metrics(130.0, 300.0, 25.0, 10.0);
        let config = objects_only();
        let first = detect_snaps(&metrics(127.0, 90.0, 15.0, 10.0), &[candidate], None, &config);
        let x = first.x.unwrap();

        let again = detect_snaps(&metrics(x, 90.0, 15.0, 10.0), &[candidate], None, &config);
        assert_eq!(again.x, Some(x));
    }
}
