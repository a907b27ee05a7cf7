//! End-to-end row scenarios and property sweeps over many panel lists.
//!
//! Sweeps collect every failure before asserting so one run shows the whole
//! picture instead of the first broken case.

use platelayout::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Deterministic panel rows: every combination of a few widths and heights,
/// one to four panels long.
fn rows() -> Vec<Vec<Panel>> {
    let widths = [20.0, 33.3, 75.0, 150.5, 300.0];
    // 30.2 and 64.4 round the canvas height down when they are the tallest.
    let heights = [30.0, 64.0, 99.9, 128.0, 64.4, 30.2];
    let mut out = Vec::new();
    for n in 1..=4usize {
        for seed in 0..40usize {
            let row = (0..n)
                .map(|i| {
                    let k = seed * 7 + i * 3;
                    Panel::new(
                        format!("p{i}"),
                        widths[k % widths.len()],
                        heights[(k / 2) % heights.len()],
                    )
                })
                .collect();
            out.push(row);
        }
    }
    out
}

const SOURCES: [Size; 5] = [
    Size::new(100, 100),
    Size::new(640, 480),
    Size::new(37, 1013),
    Size::new(4000, 300),
    Size::new(1, 1),
];

// ---- Scenarios ----

#[test]
fn single_default_panel_stage() {
    let layout = compute_sizes(&[Panel::new("1", 300.0, 128.0)]);
    assert_eq!(layout.total_width, 300.0);
    assert_eq!((layout.px_w, layout.px_h), (300, 128));
    assert_eq!((layout.stage_width, layout.stage_height), (348, 176));
}

#[test]
fn narrow_row_cover_without_mirror() {
    let panels = [Panel::new("1", 30.0, 30.0), Panel::new("2", 30.0, 30.0)];
    let frame = Frame::compute(&panels, Some(Size::new(100, 100)), &StageConfig::default());
    assert!(!frame.is_mirrored());
    assert_eq!(
        frame.cover,
        Some(CoverRect {
            x: 0.0,
            y: 25.0,
            w: 100.0,
            h: 50.0
        })
    );
}

#[test]
fn widening_one_panel_grows_only_it() {
    let prev = [Panel::new("1", 30.0, 30.0), Panel::new("2", 30.0, 30.0)];
    let next = [Panel::new("1", 30.0, 30.0), Panel::new("2", 60.0, 30.0)];
    assert_eq!(
        resize_changes(&prev, &next),
        vec![ResizeChange {
            id: "2".into(),
            kind: ResizeKind::Grow
        }]
    );
}

#[test]
fn removed_panel_ghost_position() {
    let prev = [Panel::new("1", 30.0, 30.0), Panel::new("2", 40.0, 20.0)];
    let ghost = compute_removed_ghost(&prev, "2", 70.0, 30.0, None, None).unwrap();
    assert_eq!((ghost.x, ghost.y, ghost.w, ghost.h), (30.0, 10.0, 36.0, 20.0));
}

// ---- Property sweeps ----

#[test]
fn layout_invariants() {
    let config = StageConfig::default();
    let mut failures = Vec::new();
    for row in rows() {
        let l = compute_sizes_with(&row, &config);
        if l.px_w < 1 || l.px_h < 1 {
            failures.push(format!("{row:?}: empty canvas {}x{}", l.px_w, l.px_h));
        }
        if l.stage_width > config.max_stage_width {
            failures.push(format!("{row:?}: stage width {} over cap", l.stage_width));
        }
        if l.stage_height != l.px_h + 2 * config.pad {
            failures.push(format!("{row:?}: stage height {}", l.stage_height));
        }
        let rects = panel_rects_with(&row, &l, &config);
        for (rect, panel) in rects.iter().zip(&row) {
            let bottom = rect.top + rect.height;
            if !close(bottom, config.pad as f64 + l.px_h as f64) {
                failures.push(format!("{}: bottom {bottom} not on the baseline", panel.id));
            }
        }
    }
    assert!(failures.is_empty(), "{} failures: {:#?}", failures.len(), failures);
}

#[test]
fn crops_concatenate_to_cover() {
    // Without a seam, the crops of a row tile the cover rectangle exactly.
    let config = StageConfig::default().gap(0.0);
    let mut failures = Vec::new();
    for row in rows() {
        for source in SOURCES {
            let frame = Frame::compute(&row, Some(source), &config);
            let cover = frame.cover.unwrap();
            let sx = cover.w / frame.layout.px_w as f64;
            let mut right_edge = cover.x;
            for placed in &frame.placed {
                let crop = placed.crop.unwrap();
                if !close(crop.x, right_edge) {
                    failures.push(format!(
                        "{source:?} {}: crop starts at {} not {right_edge}",
                        placed.rect.id, crop.x
                    ));
                }
                if !cover.contains(&crop, 1e-9) {
                    failures.push(format!("{source:?} {}: crop outside cover", placed.rect.id));
                }
                right_edge = crop.x + crop.width;
            }
            if (right_edge - (cover.x + cover.w)).abs() > 0.5 * sx + 1e-9 {
                failures.push(format!("{source:?} {row:?}: tiles end at {right_edge}"));
            }
        }
    }
    assert!(failures.is_empty(), "{} failures: {:#?}", failures.len(), failures);
}

#[test]
fn crops_stay_inside_sampled_buffer() {
    let config = StageConfig::default();
    let mut failures = Vec::new();
    for row in rows() {
        for source in SOURCES {
            let frame = Frame::compute(&row, Some(source), &config);
            let buffer = frame.source_size().unwrap();
            let expected_width = if frame.layout.total_width > 300.0 {
                source.width * 2
            } else {
                source.width
            };
            if buffer != Size::new(expected_width, source.height) {
                failures.push(format!("{source:?}: sampled buffer {buffer:?}"));
            }
            let cover = frame.cover.unwrap();
            for placed in &frame.placed {
                let c = placed.crop.unwrap();
                if !cover.contains(&c, 1e-9) {
                    failures.push(format!("{source:?} {}: {c:?} outside cover", placed.rect.id));
                }
                let inside = c.x >= -1e-9
                    && c.y >= -1e-9
                    && c.x + c.width <= buffer.width as f64 + 1e-9
                    && c.y + c.height <= buffer.height as f64 + 1e-9;
                if !inside {
                    failures.push(format!("{source:?} {}: {c:?} outside {buffer:?}", placed.rect.id));
                }
            }
        }
    }
    assert!(failures.is_empty(), "{} failures: {:#?}", failures.len(), failures);
}

#[test]
fn classification_is_idempotent() {
    let mut failures = Vec::new();
    let all = rows();
    for pair in all.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        let first = resize_changes(prev, next);
        let second = resize_changes(prev, next);
        if first != second {
            failures.push(format!("{prev:?} -> {next:?}: {first:?} then {second:?}"));
        }
        if !resize_changes(next, next).is_empty() {
            failures.push(format!("{next:?}: changes against itself"));
        }
    }
    assert!(failures.is_empty(), "{} failures: {:#?}", failures.len(), failures);
}

#[test]
fn reversed_edit_flips_the_kind() {
    // Area decides whenever it moves, so undoing an edit flips grow/shrink.
    let a = [Panel::new("x", 40.0, 50.0)];
    let b = [Panel::new("x", 80.0, 40.0)];
    let forward = resize_changes(&a, &b);
    let back = resize_changes(&b, &a);
    assert_eq!(forward[0].kind, ResizeKind::Grow);
    assert_eq!(back[0].kind, ResizeKind::Shrink);
}

#[test]
fn every_removal_has_a_ghost_inside_the_old_canvas() {
    let config = StageConfig::default();
    let mut failures = Vec::new();
    for row in rows() {
        let before = Frame::compute(&row, Some(Size::new(640, 480)), &config);
        for removed in &row {
            let rest: Vec<Panel> = row.iter().filter(|p| p.id != removed.id).cloned().collect();
            let after = Frame::compute(&rest, Some(Size::new(640, 480)), &config);
            let t = before.transition_to(&after);
            let [ghost] = t.removed.as_slice() else {
                failures.push(format!("{}: {} ghosts", removed.id, t.removed.len()));
                continue;
            };
            let placed = before.panel(&removed.id).unwrap();
            if !close(ghost.x + config.pad as f64, placed.rect.left)
                || !close(ghost.y + config.pad as f64, placed.rect.top)
                || !close(ghost.w, placed.rect.width)
                || !close(ghost.h, placed.rect.height)
            {
                failures.push(format!("{}: ghost {ghost:?} vs {placed:?}", removed.id));
            }
            if !before.cover.unwrap().contains(&ghost.crop.unwrap(), 1e-9) {
                failures.push(format!("{}: ghost crop outside cover", removed.id));
            }
        }
    }
    assert!(failures.is_empty(), "{} failures: {:#?}", failures.len(), failures);
}

#[test]
fn unloaded_image_draws_placeholders_everywhere() {
    let config = StageConfig::default();
    for source in [None, Some(Size::new(0, 0)), Some(Size::new(640, 0))] {
        let frame = Frame::compute(&rows()[5], source, &config);
        assert_eq!(frame.sampling, None);
        for placed in &frame.placed {
            let grid = placed.placeholder(&config).unwrap();
            assert_eq!(grid.width, placed.rect.width);
            assert_eq!(grid.height, placed.rect.height);
        }
    }
}

#[test]
fn validation_accepts_every_generated_row() {
    let limits = PanelLimits::default();
    for row in rows() {
        assert_eq!(limits.validate_row(&row), Ok(()), "{row:?}");
    }
}
