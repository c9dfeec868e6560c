use super::*;
use crate::shared::HandleResponse;

const THRESHOLD: f32 = 15.0;

fn curve_from(points: &[(f32, f32)], is_closed: bool) -> Curve {
    let mut curve = Curve::new(is_closed, 2.0, PackedColor::RED);
    for &(x, y) in points {
        curve.push_anchor(Anchor::new(Vec2::new(x, y), 5.0, PackedColor::RED));
    }
    curve
}

fn positions(curve: &Curve) -> Vec<Vec2> {
    curve.anchors().iter().map(Anchor::position).collect()
}

/// Zeichnet nichts, merkt sich aber alle Aufträge.
#[derive(Default)]
struct RecordingPainter {
    strokes: Vec<(CubicSegment, PackedColor, f32)>,
    circles: Vec<(Vec2, f32, PackedColor)>,
    handles: Vec<(usize, Vec2, Vec2)>,
    /// Simulierter Drag: (Anker-Index, Delta)
    drag: Option<(usize, Vec2)>,
}

impl CurvePainter for RecordingPainter {
    fn stroke_cubic(&mut self, segment: CubicSegment, color: PackedColor, thickness: f32) {
        self.strokes.push((segment, color, thickness));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: PackedColor) {
        self.circles.push((center, radius, color));
    }

    fn drag_handle(&mut self, index: usize, min: Vec2, max: Vec2) -> HandleResponse {
        self.handles.push((index, min, max));
        match self.drag {
            Some((dragged, delta)) if dragged == index => HandleResponse {
                dragging: true,
                delta,
            },
            _ => HandleResponse::default(),
        }
    }
}

// ── Topologie ──

#[test]
fn test_segment_count_open_and_closed() {
    assert_eq!(curve_from(&[], false).segment_count(), 0);
    assert_eq!(curve_from(&[(0.0, 0.0)], true).segment_count(), 0);
    assert_eq!(curve_from(&[(0.0, 0.0), (1.0, 0.0)], false).segment_count(), 1);
    assert_eq!(curve_from(&[(0.0, 0.0), (1.0, 0.0)], true).segment_count(), 2);
    let square = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    assert_eq!(curve_from(&square, false).segment_count(), 3);
    assert_eq!(curve_from(&square, true).segment_count(), 4);
}

// ── Einfügen ──

#[test]
fn test_add_point_appends_below_two_anchors() {
    let mut curve = Curve::default();
    assert_eq!(curve.add_point(Vec2::new(10.0, 10.0), THRESHOLD, 5.0, PackedColor::RED), 0);
    assert_eq!(curve.add_point(Vec2::new(500.0, 10.0), THRESHOLD, 5.0, PackedColor::RED), 1);
    assert_eq!(
        positions(&curve),
        vec![Vec2::new(10.0, 10.0), Vec2::new(500.0, 10.0)]
    );
}

#[test]
fn test_add_point_far_and_near_first_goes_to_front() {
    let mut curve = curve_from(&[(0.0, 0.0), (100.0, 100.0)], false);
    let index = curve.add_point(Vec2::new(-50.0, -50.0), THRESHOLD, 5.0, PackedColor::RED);

    assert_eq!(index, 0);
    assert_eq!(
        positions(&curve),
        vec![
            Vec2::new(-50.0, -50.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 100.0)
        ]
    );
}

#[test]
fn test_add_point_far_and_near_last_goes_to_end() {
    let mut curve = curve_from(&[(0.0, 0.0), (100.0, 100.0)], false);
    let index = curve.add_point(Vec2::new(180.0, 150.0), THRESHOLD, 5.0, PackedColor::RED);

    assert_eq!(index, 2);
    assert_eq!(*positions(&curve).last().unwrap(), Vec2::new(180.0, 150.0));
}

#[test]
fn test_add_point_near_segment_lands_on_segment() {
    let mut curve = curve_from(&[(0.0, 0.0), (100.0, 0.0)], false);
    let index = curve.add_point(Vec2::new(50.0, 2.0), THRESHOLD, 5.0, PackedColor::RED);

    assert_eq!(index, 1);
    assert_eq!(
        positions(&curve),
        vec![Vec2::new(0.0, 0.0), Vec2::new(50.0, 2.0), Vec2::new(100.0, 0.0)]
    );
}

#[test]
fn test_add_point_picks_nearest_of_several_segments() {
    let mut curve = curve_from(&[(0.0, 0.0), (100.0, 0.0), (200.0, 0.0), (300.0, 0.0)], false);
    let index = curve.add_point(Vec2::new(250.0, -3.0), THRESHOLD, 5.0, PackedColor::RED);
    assert_eq!(index, 3);
}

#[test]
fn test_add_point_exactly_at_threshold_stays_on_curve() {
    let mut curve = curve_from(&[(0.0, 0.0), (100.0, 0.0)], false);
    let sample = curve.segment(0).unwrap().eval(0.5);
    let point = sample + Vec2::new(0.0, THRESHOLD);

    let index = curve.add_point(point, THRESHOLD, 5.0, PackedColor::RED);
    assert_eq!(index, 1);
}

#[test]
fn test_add_point_just_beyond_threshold_uses_endpoint_rule() {
    let mut curve = curve_from(&[(0.0, 0.0), (100.0, 0.0)], false);
    let sample = curve.segment(0).unwrap().eval(0.5);
    // Näher am ersten Anker → vorne
    let point = sample + Vec2::new(0.0, THRESHOLD + 0.5);

    let index = curve.add_point(point, THRESHOLD, 5.0, PackedColor::RED);
    assert_eq!(index, 0);
}

#[test]
fn test_add_point_on_closing_segment_appends() {
    let mut curve = curve_from(&[(0.0, 0.0), (100.0, 0.0), (50.0, 100.0)], true);
    let point = curve.segment(2).unwrap().eval(0.5);

    let index = curve.add_point(point, THRESHOLD, 5.0, PackedColor::RED);
    assert_eq!(index, 3);
    assert_eq!(curve.len(), 4);
}

#[test]
fn test_add_point_uses_given_radius_and_color() {
    let mut curve = curve_from(&[(0.0, 0.0), (100.0, 0.0)], false);
    let color = PackedColor::from_rgba8(0, 255, 0, 255);
    let index = curve.add_point(Vec2::new(50.0, 1.0), THRESHOLD, 7.5, color);

    let anchor = curve.anchors()[index];
    assert_eq!(anchor.radius(), 7.5);
    assert_eq!(anchor.color(), color);
}

// ── Kontrollpunkte ──

#[test]
fn test_control_points_open_ends_are_clamped() {
    let curve = curve_from(&[(0.0, 0.0), (100.0, 0.0)], false);
    let (cp1, cp2) = curve.control_points(0).expect("Segment 0 erwartet");

    // p0 == p1 → cp1 fällt auf den Startanker
    assert_eq!(cp1, Vec2::new(0.0, 0.0));
    // p3 == p2 → Tangente (1, 0), Abstand |p2 - p1| / 4
    assert!((cp2 - Vec2::new(75.0, 0.0)).length() < 1e-4);
}

#[test]
fn test_control_points_inner_segment_follow_neighbours() {
    let curve = curve_from(&[(0.0, 0.0), (100.0, 0.0), (200.0, 0.0), (300.0, 0.0)], false);
    let (cp1, cp2) = curve.control_points(1).expect("Segment 1 erwartet");

    assert!((cp1 - Vec2::new(125.0, 0.0)).length() < 1e-4);
    assert!((cp2 - Vec2::new(175.0, 0.0)).length() < 1e-4);
}

#[test]
fn test_control_points_out_of_range() {
    let curve = curve_from(&[(0.0, 0.0), (100.0, 0.0)], false);
    assert!(curve.control_points(1).is_none());
    assert!(curve_from(&[(0.0, 0.0)], false).control_points(0).is_none());
}

#[test]
fn test_coincident_anchors_produce_no_nan() {
    let curve = curve_from(&[(10.0, 10.0), (10.0, 10.0), (10.0, 10.0)], true);

    for index in 0..curve.segment_count() {
        let (cp1, cp2) = curve.control_points(index).expect("Segment erwartet");
        assert!(cp1.is_finite() && cp2.is_finite());
        assert_eq!(cp1, Vec2::new(10.0, 10.0));
        assert_eq!(cp2, Vec2::new(10.0, 10.0));
    }
    assert!(curve.sampled_polyline().iter().all(|p| p.is_finite()));
    // darf nicht paniken; das Ergebnis ist bei degenerierter Geometrie nicht festgelegt
    let _ = curve.is_self_intersecting();
}

// ── Selbstschnitt ──

#[test]
fn test_short_curves_never_intersect() {
    assert!(!Curve::default().is_self_intersecting());
    assert!(!curve_from(&[(0.0, 0.0)], true).is_self_intersecting());
    assert!(!curve_from(&[(0.0, 0.0), (100.0, 100.0)], true).is_self_intersecting());
}

#[test]
fn test_closed_square_is_not_self_intersecting() {
    let curve = curve_from(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)], true);
    assert!(!curve.is_self_intersecting());
}

#[test]
fn test_closed_bowtie_is_self_intersecting() {
    let curve = curve_from(&[(0.0, 0.0), (100.0, 100.0), (100.0, 0.0), (0.0, 100.0)], true);
    assert!(curve.is_self_intersecting());
}

#[test]
fn test_open_zigzag_crossing() {
    let crossing = curve_from(&[(0.0, 0.0), (100.0, 100.0), (100.0, 0.0), (0.0, 100.0)], false);
    assert!(crossing.is_self_intersecting());

    let wave = curve_from(&[(0.0, 50.0), (100.0, 0.0), (200.0, 50.0), (300.0, 0.0)], false);
    assert!(!wave.is_self_intersecting());
}

#[test]
fn test_sampled_polyline_has_no_duplicate_joints() {
    let curve = curve_from(&[(0.0, 0.0), (100.0, 0.0), (200.0, 50.0)], false);
    let polyline = curve.sampled_polyline();

    // 2 Segmente à 21 Abtastpunkte, ein gemeinsamer Übergang
    assert_eq!(polyline.len(), 41);
    assert!(polyline.windows(2).all(|w| w[0] != w[1]));
}

// ── Bearbeiten ──

#[test]
fn test_delete_point_out_of_range_is_noop() {
    let mut curve = curve_from(&[(0.0, 0.0), (100.0, 0.0)], false);
    assert!(curve.delete_point(5).is_none());
    assert_eq!(curve.len(), 2);

    let removed = curve.delete_point(0).expect("Anker 0 erwartet");
    assert_eq!(removed.position(), Vec2::new(0.0, 0.0));
    assert_eq!(positions(&curve), vec![Vec2::new(100.0, 0.0)]);

    curve.clear();
    assert!(curve.is_empty());
}

#[test]
fn test_anchor_at_returns_first_hit() {
    let curve = curve_from(&[(0.0, 0.0), (5.0, 0.0), (100.0, 0.0)], false);
    assert_eq!(curve.anchor_at(Vec2::new(3.0, 0.0), 12.0), Some(0));
    assert_eq!(curve.anchor_at(Vec2::new(98.0, 1.0), 12.0), Some(2));
    assert_eq!(curve.anchor_at(Vec2::new(50.0, 50.0), 12.0), None);
}

#[test]
fn test_apply_settings_replaces_curve_state() {
    let mut curve = curve_from(&[(0.0, 0.0)], false);
    let settings = CurveSettings {
        is_closed: true,
        thickness: 6.5,
        color: PackedColor::from_rgba8(10, 20, 30, 40),
    };
    curve.apply_settings(settings);

    assert_eq!(curve.settings(), settings);
    assert_eq!(curve.len(), 1);
}

// ── Zeichnen ──

#[test]
fn test_draw_without_enough_anchors_strokes_nothing() {
    let frame = LocalFrame::new(Vec2::new(10.0, 10.0), Vec2::new(200.0, 200.0));
    for points in [&[][..], &[(5.0, 5.0)][..]] {
        let mut curve = curve_from(points, false);
        let mut painter = RecordingPainter::default();
        assert!(!curve.draw(&mut painter, &frame, false));
        assert!(painter.strokes.is_empty());
        assert!(painter.circles.is_empty());
    }
}

#[test]
fn test_draw_offsets_segments_by_frame_origin() {
    let frame = LocalFrame::new(Vec2::new(10.0, 20.0), Vec2::new(500.0, 500.0));
    let mut curve = curve_from(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)], false);
    let mut painter = RecordingPainter::default();

    curve.draw(&mut painter, &frame, false);

    assert_eq!(painter.strokes.len(), 2);
    assert!(painter.circles.is_empty());
    let (first, color, thickness) = painter.strokes[0];
    assert_eq!(first.start, Vec2::new(10.0, 20.0));
    assert_eq!(first.end, Vec2::new(110.0, 20.0));
    assert_eq!(color, PackedColor::RED);
    assert_eq!(thickness, 2.0);
}

#[test]
fn test_draw_editable_paints_anchors_in_curve_color() {
    let frame = LocalFrame::new(Vec2::ZERO, Vec2::new(500.0, 500.0));
    let blue = PackedColor::from_rgba8(0, 0, 255, 255);
    let mut curve = curve_from(&[(50.0, 50.0), (150.0, 50.0)], false);
    curve.set_color(blue);
    let mut painter = RecordingPainter::default();

    curve.draw(&mut painter, &frame, true);

    assert_eq!(painter.circles.len(), 2);
    assert!(painter.circles.iter().all(|&(_, _, color)| color == blue));
    assert!(curve.anchors().iter().all(|a| a.color() == blue));
    assert_eq!(
        painter.handles[0],
        (0, Vec2::new(45.0, 45.0), Vec2::new(55.0, 55.0))
    );
}

#[test]
fn test_draw_drag_moves_anchor_within_frame() {
    let frame = LocalFrame::new(Vec2::new(100.0, 100.0), Vec2::new(200.0, 100.0));
    let mut curve = curve_from(&[(50.0, 50.0), (150.0, 50.0)], false);
    let mut painter = RecordingPainter {
        drag: Some((1, Vec2::new(500.0, -500.0))),
        ..Default::default()
    };

    assert!(curve.draw(&mut painter, &frame, true));
    assert_eq!(curve.anchors()[0].position(), Vec2::new(50.0, 50.0));
    assert_eq!(curve.anchors()[1].position(), Vec2::new(200.0, 0.0));
}

#[test]
fn test_draw_not_editable_ignores_handles() {
    let frame = LocalFrame::new(Vec2::ZERO, Vec2::new(200.0, 100.0));
    let mut curve = curve_from(&[(50.0, 50.0), (150.0, 50.0)], false);
    let mut painter = RecordingPainter {
        drag: Some((0, Vec2::new(10.0, 0.0))),
        ..Default::default()
    };

    assert!(!curve.draw(&mut painter, &frame, false));
    assert!(painter.handles.is_empty());
    assert_eq!(curve.anchors()[0].position(), Vec2::new(50.0, 50.0));
}

// ── Serialisierung ──

#[test]
fn test_serialize_deserialize_roundtrip() {
    let mut curve = curve_from(&[(12.5, 40.0), (300.25, 80.0), (90.0, 200.0)], true);
    curve.set_thickness(3.5);

    let line = curve.serialize();
    let parsed = Curve::deserialize(&line).expect("Zeile muss parsebar sein");
    assert_eq!(parsed, curve);
}

#[test]
fn test_boundary_values_from_api_survive_roundtrip() {
    let mut curve = Curve::new(false, 0.0, PackedColor::RED);
    assert_eq!(curve.thickness(), CURVE_THICKNESS);

    curve.add_point(Vec2::new(10.0, 10.0), THRESHOLD, 0.0, PackedColor::RED);
    curve.add_point(Vec2::new(80.0, 30.0), THRESHOLD, -2.0, PackedColor::RED);
    curve.add_point(Vec2::new(40.0, 90.0), THRESHOLD, f32::NAN, PackedColor::RED);
    curve.set_thickness(0.0);
    curve.set_thickness(-1.0);
    curve.apply_settings(CurveSettings {
        is_closed: true,
        thickness: f32::NAN,
        color: PackedColor::WHITE,
    });

    assert_eq!(curve.thickness(), CURVE_THICKNESS);
    assert!(curve.anchors().iter().all(|a| a.radius() > 0.0));

    let parsed = Curve::deserialize(&curve.serialize()).expect("Zeile muss parsebar sein");
    assert_eq!(parsed, curve);
}

#[test]
fn test_set_thickness_accepts_small_positive_values() {
    let mut curve = Curve::default();
    curve.set_thickness(0.5);
    assert_eq!(curve.thickness(), 0.5);

    let parsed = Curve::deserialize(&curve.serialize()).expect("Zeile muss parsebar sein");
    assert_eq!(parsed.thickness(), 0.5);
}
