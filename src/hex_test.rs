#![allow(clippy::float_cmp, clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use super::*;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn image(width: u32, height: u32) -> ImageFootprint {
    ImageFootprint { origin: Point::new(0.0, 0.0), width, height }
}

fn viewport(pan_x: f64, pan_y: f64, scale: f64) -> Viewport {
    Viewport::new(Point::new(pan_x, pan_y), scale, 800, 600).unwrap()
}

/// Walk every cell of the image and keep those inside `cull`.
fn brute_force(grid: &HexGrid, image: &ImageFootprint, cull: Rect) -> Vec<HexCell> {
    let mut out = Vec::new();
    let w = f64::from(image.width);
    let h = f64::from(image.height);
    let mut col = 0_i64;
    loop {
        let x = col as f64 * grid.col_step();
        if x >= w {
            break;
        }
        let shift = if col % 2 == 1 { grid.row_step() * 0.5 } else { 0.0 };
        let mut row = 0_i64;
        loop {
            let y = row as f64 * grid.row_step() + shift;
            if y >= h {
                break;
            }
            let center = image.origin.offset(x, y);
            if cull.contains(center) {
                out.push(HexCell { center, radius: grid.radius() });
            }
            row += 1;
        }
        col += 1;
    }
    out
}

// --- HexGrid ---

#[test]
fn grid_steps_follow_radius() {
    let grid = HexGrid::new(12.0).unwrap();
    assert!(approx_eq(grid.radius(), 12.0));
    assert!(approx_eq(grid.col_step(), 18.0));
    assert!(approx_eq(grid.row_step(), 12.0 * (3.0_f64.sqrt() / 2.0) + 12.0 - 2.0));
}

#[test]
fn grid_radius_tracks_calibration() {
    let grid = HexGrid::for_calibration(2.5, 12.0).unwrap();
    assert!(approx_eq(grid.radius(), 30.0));
}

#[test]
fn grid_rejects_non_positive_radius() {
    assert!(HexGrid::new(0.0).is_none());
    assert!(HexGrid::new(-4.0).is_none());
    assert!(HexGrid::new(f64::NAN).is_none());
}

#[test]
fn grid_rejects_radius_too_small_for_seam_correction() {
    assert!(HexGrid::new(0.5).is_none());
    assert!(HexGrid::new(1.0).is_none());
    assert!(HexGrid::new(1.2).is_some());
}

#[test]
fn cell_vertices_start_at_angle_zero() {
    let cell = HexCell { center: Point::new(10.0, 10.0), radius: 4.0 };
    let v = cell.vertices();
    assert!(approx_eq(v[0].x, 14.0));
    assert!(approx_eq(v[0].y, 10.0));
}

// --- cells_in ---

#[test]
fn odd_columns_shift_half_a_row() {
    let grid = HexGrid::new(12.0).unwrap();
    let img = image(40, 100);
    let everything = Rect::new(Point::new(-1e6, -1e6), Point::new(1e6, 1e6));
    let cells = grid.cells_in(&img, everything, usize::MAX);
    let first_even = cells.iter().find(|c| approx_eq(c.center.x, 0.0)).unwrap();
    let first_odd = cells.iter().find(|c| approx_eq(c.center.x, 18.0)).unwrap();
    assert!(approx_eq(first_even.center.y, 0.0));
    assert!(approx_eq(first_odd.center.y, grid.row_step() * 0.5));
}

#[test]
fn cells_cover_whole_image_when_unculled() {
    let grid = HexGrid::new(12.0).unwrap();
    let img = image(100, 100);
    let everything = Rect::new(Point::new(-1e6, -1e6), Point::new(1e6, 1e6));
    let cells = grid.cells_in(&img, everything, usize::MAX);
    assert_eq!(cells, brute_force(&grid, &img, everything));
    for cell in &cells {
        assert!(cell.center.x < 100.0 && cell.center.y < 100.0);
        assert!(cell.center.x >= 0.0 && cell.center.y >= 0.0);
    }
}

#[test]
fn culled_cells_match_brute_force() {
    let grid = HexGrid::new(12.0).unwrap();
    let img = ImageFootprint { origin: Point::new(-250.0, 130.0), width: 3000, height: 2000 };
    let culls = [
        Rect::new(Point::new(80.0, 80.0), Point::new(320.0, 270.0)),
        Rect::new(Point::new(-400.0, -400.0), Point::new(-100.0, 200.0)),
        Rect::new(Point::new(2700.0, 2000.0), Point::new(2895.0, 2300.0)),
        Rect::new(Point::new(-17.3, 151.9), Point::new(-16.9, 152.5)),
        Rect::new(Point::new(-16.5, 160.0), Point::new(-15.5, 161.0)),
    ];
    for cull in culls {
        assert_eq!(grid.cells_in(&img, cull, usize::MAX), brute_force(&grid, &img, cull), "cull {cull:?}");
    }
}

#[test]
fn centers_on_cull_edge_are_kept() {
    for step in 0..2000 {
        let grid = HexGrid::new(3.0 + f64::from(step) * 0.37).unwrap();
        let x = 8.0 * grid.col_step();
        let y = 4.0 * grid.row_step();
        let cull = Rect::new(Point::new(x, y), Point::new(x, y));
        let img = image(
            (10.0 * grid.col_step()).ceil() as u32,
            (10.0 * grid.row_step()).ceil() as u32,
        );
        let cells = grid.cells_in(&img, cull, usize::MAX);
        assert_eq!(cells.len(), 1, "radius {}", grid.radius());
        assert_eq!(cells[0].center, Point::new(x, y));
    }
}

#[test]
fn cull_outside_image_is_empty() {
    let grid = HexGrid::new(12.0).unwrap();
    let cull = Rect::new(Point::new(5000.0, 5000.0), Point::new(6000.0, 6000.0));
    assert!(grid.cells_in(&image(1000, 800), cull, usize::MAX).is_empty());
}

#[test]
fn empty_image_has_no_cells() {
    let grid = HexGrid::new(12.0).unwrap();
    let everything = Rect::new(Point::new(-1e6, -1e6), Point::new(1e6, 1e6));
    assert!(grid.cells_in(&image(0, 800), everything, usize::MAX).is_empty());
}

#[test]
fn limit_caps_cell_count() {
    let grid = HexGrid::new(12.0).unwrap();
    let everything = Rect::new(Point::new(-1e6, -1e6), Point::new(1e6, 1e6));
    assert_eq!(grid.cells_in(&image(1000, 1000), everything, 7).len(), 7);
    assert!(grid.cells_in(&image(1000, 1000), everything, 0).is_empty());
}

// --- eligibility / visible_cells ---

#[test]
fn no_cells_at_or_below_min_scale() {
    let cfg = MapConfig::default();
    let img = image(1000, 800);
    assert!(visible_cells(Some(&img), 1.0, &viewport(100.0, 100.0, 3.0), &cfg).is_empty());
    assert!(visible_cells(Some(&img), 1.0, &viewport(100.0, 100.0, 1.0), &cfg).is_empty());
    assert!(!visible_cells(Some(&img), 1.0, &viewport(100.0, 100.0, 3.01), &cfg).is_empty());
}

#[test]
fn no_cells_without_calibration() {
    let cfg = MapConfig::default();
    let img = image(1000, 800);
    assert!(visible_cells(Some(&img), 0.0, &viewport(100.0, 100.0, 4.0), &cfg).is_empty());
}

#[test]
fn no_cells_without_image() {
    let cfg = MapConfig::default();
    assert!(visible_cells(None, 1.0, &viewport(100.0, 100.0, 4.0), &cfg).is_empty());
    assert!(!is_eligible(1.0, None, 4.0, &cfg));
}

#[test]
fn visible_cells_stay_inside_margin() {
    let cfg = MapConfig::default();
    let img = image(4000, 4000);
    let vp = viewport(1000.0, 700.0, 4.0);
    let cells = visible_cells(Some(&img), 1.0, &vp, &cfg);
    assert!(!cells.is_empty());
    let visible = vp.visible_world_rect();
    for cell in &cells {
        assert!(cell.center.x >= visible.min.x - 20.0 && cell.center.x <= visible.max.x + 20.0);
        assert!(cell.center.y >= visible.min.y - 20.0 && cell.center.y <= visible.max.y + 20.0);
    }
}

#[test]
fn visible_cells_are_far_fewer_than_image_cells() {
    let cfg = MapConfig::default();
    let img = image(8000, 8000);
    let vp = viewport(4000.0, 4000.0, 8.0);
    let visible = visible_cells(Some(&img), 1.0, &vp, &cfg);
    let grid = HexGrid::new(12.0).unwrap();
    let everything = Rect::new(Point::new(-1e6, -1e6), Point::new(1e6, 1e6));
    let all = grid.cells_in(&img, everything, usize::MAX);
    assert!(visible.len() * 100 < all.len());
}

#[test]
fn cell_radius_independent_of_zoom() {
    let cfg = MapConfig::default();
    let img = image(4000, 4000);
    let near = visible_cells(Some(&img), 1.0, &viewport(500.0, 500.0, 4.0), &cfg);
    let nearer = visible_cells(Some(&img), 1.0, &viewport(500.0, 500.0, 16.0), &cfg);
    assert!(approx_eq(near[0].radius, 12.0));
    assert!(approx_eq(nearer[0].radius, 12.0));
    assert!(nearer.len() < near.len());
}

#[test]
fn cull_rect_expands_visible_rect() {
    let r = cull_rect(&viewport(100.0, 100.0, 4.0), 20.0);
    assert_eq!(r.min, Point::new(80.0, 80.0));
    assert_eq!(r.max, Point::new(320.0, 270.0));
}
