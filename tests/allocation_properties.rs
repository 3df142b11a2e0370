use approx::assert_abs_diff_eq;
use glam::DVec2;
use scaffold_span_planner::{
    allocate_line_resources, compute_inward_normal, plan_spans, project_segments_onto_line,
    FailureReason, ScaffoldLine, SpanAllocator,
};

const WIDTHS: [u32; 2] = [600, 355];

fn sample_lines() -> Vec<ScaffoldLine> {
    let mut lines = Vec::new();
    for (index, length) in [1800.0, 2700.0, 5250.0, 9300.0].into_iter().enumerate() {
        let directions = [
            DVec2::new(length, 0.0),
            DVec2::new(-length, 0.0),
            DVec2::new(0.0, length),
            DVec2::new(0.0, -length),
            DVec2::new(length * 0.6, length * 0.8),
            DVec2::new(-length * 0.8, length * 0.6),
        ];
        for (dir_index, delta) in directions.into_iter().enumerate() {
            let start = DVec2::new(300.0 * index as f64, -150.0 * dir_index as f64);
            lines.push(ScaffoldLine::new(
                format!("l{index}-{dir_index}"),
                start,
                start + delta,
            ));
        }
    }
    lines
}

#[test]
fn test_band_offset_has_block_width_for_all_directions() {
    let allocator = SpanAllocator::default();

    for line in sample_lines() {
        for width in WIDTHS {
            let line = line.clone().with_block_width(width);
            let allocation = allocator
                .allocate(&line)
                .unwrap_or_else(|f| panic!("Belegung von {} erwartet: {f}", line.id));
            let band = &allocation.band;

            assert_abs_diff_eq!(band.offset.length(), f64::from(width), epsilon = 1e-3);
            assert_abs_diff_eq!(
                band.outline[3].distance(band.outline[0]),
                f64::from(width),
                epsilon = 1e-3
            );
            assert_abs_diff_eq!(
                band.outline[2].distance(band.outline[1]),
                f64::from(width),
                epsilon = 1e-3
            );
            for polygon in &band.span_polygons {
                let [a, b, c, d] = polygon.points;
                assert_abs_diff_eq!(a.distance(d), f64::from(width), epsilon = 1e-3);
                assert_abs_diff_eq!(b.distance(c), f64::from(width), epsilon = 1e-3);
            }
        }
    }
}

#[test]
fn test_spans_cover_line_and_sum_to_measured_length() {
    for line in sample_lines() {
        let allocation = allocate_line_resources(&line).expect("Belegung erwartet");

        let first = allocation.spans.first().expect("Mindestens eine Spanne");
        let last = allocation.spans.last().expect("Mindestens eine Spanne");
        assert_eq!(first.start, line.start);
        assert_eq!(last.end, line.end);
        for pair in allocation.spans.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }

        let total: f64 = allocation.segments.iter().sum();
        assert_abs_diff_eq!(total, allocation.measured_length, epsilon = 1.0);
        assert_eq!(allocation.markers.len(), allocation.spans.len() - 1);
        assert_eq!(allocation.blocks.len(), allocation.spans.len());
    }
}

#[test]
fn test_inward_normal_is_unit_and_perpendicular() {
    for line in sample_lines() {
        let normal = compute_inward_normal(&line).expect("Normale erwartet");
        assert_abs_diff_eq!(normal.length(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normal.dot(line.delta()), 0.0, epsilon = 1e-6);
    }
}

#[test]
fn test_projection_of_planned_segments_ends_on_line_end() {
    for line in sample_lines() {
        let plan = plan_spans(line.measured_length().round()).expect("Plan erwartet");
        let projected =
            project_segments_onto_line(&line, &plan.segments).expect("Projektion erwartet");

        assert_eq!(projected.len(), plan.segments.len());
        assert_eq!(projected.last().map(|s| s.end), Some(line.end));
        for (segment, &length) in projected.iter().zip(&plan.segments) {
            assert_abs_diff_eq!(segment.start.distance(segment.end), length, epsilon = 1.0);
        }
    }
}

#[test]
fn test_lines_shorter_than_smallest_span_fail_per_line() {
    for length in [0.0, 1.0, 149.0] {
        let line = ScaffoldLine::new("kurz", DVec2::ZERO, DVec2::new(length, 0.0));
        let failure = allocate_line_resources(&line).expect_err("Fehlschlag erwartet");
        assert_eq!(failure.line_id, "kurz");
        assert_eq!(failure.reason, FailureReason::InsufficientLength);
    }
}
