#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn new_path_is_empty_and_open() {
    let path = PathModel::new();
    assert!(path.is_empty());
    assert!(!path.is_finished());
}

#[test]
fn append_grows_in_order() {
    let mut path = PathModel::new();
    assert!(path.append(pt(1.0, 1.0)));
    assert!(path.append(pt(2.0, 2.0)));
    assert_eq!(path.points(), &[pt(1.0, 1.0), pt(2.0, 2.0)]);
}

#[test]
fn finish_with_appends_and_closes() {
    let mut path = PathModel::new();
    path.append(pt(0.0, 0.0));
    path.finish_with(pt(5.0, 0.0));
    assert!(path.is_finished());
    assert_eq!(path.points().len(), 2);
    assert_eq!(path.points()[1], pt(5.0, 0.0));
}

#[test]
fn append_after_finish_is_noop() {
    let mut path = PathModel::new();
    path.append(pt(0.0, 0.0));
    path.finish_with(pt(5.0, 0.0));
    let before = path.clone();
    assert!(!path.append(pt(9.0, 9.0)));
    assert_eq!(path, before);
    assert!(!path.append(pt(9.0, 9.0)));
    assert_eq!(path, before);
}

#[test]
fn restart_resets_to_single_point() {
    let mut path = PathModel::new();
    path.append(pt(0.0, 0.0));
    path.append(pt(1.0, 0.0));
    path.finish_with(pt(2.0, 0.0));
    path.restart(pt(7.0, 8.0));
    assert_eq!(path.points(), &[pt(7.0, 8.0)]);
    assert!(!path.is_finished());
}

#[test]
fn restart_on_empty_path() {
    let mut path = PathModel::new();
    path.restart(pt(3.0, 3.0));
    assert_eq!(path.points(), &[pt(3.0, 3.0)]);
    assert!(!path.is_finished());
}

#[test]
fn clear_resets_everything() {
    let mut path = PathModel::new();
    path.append(pt(0.0, 0.0));
    path.finish_with(pt(1.0, 1.0));
    path.clear();
    assert!(path.is_empty());
    assert!(!path.is_finished());
    assert!(path.append(pt(2.0, 2.0)));
}

// --- distance ---

#[test]
fn distance_of_empty_and_single_point_is_zero() {
    let mut path = PathModel::new();
    assert_eq!(path.distance(1.0), Some(0.0));
    assert_eq!(path.distance(0.0), Some(0.0));
    path.append(pt(4.0, 4.0));
    assert_eq!(path.distance(1.0), Some(0.0));
}

#[test]
fn distance_with_reference_calibration() {
    let mut path = PathModel::new();
    path.append(pt(0.0, 0.0));
    path.append(pt(500.0, 0.0));
    path.append(pt(500.0, 500.0));
    let d = path.distance(1.0).unwrap();
    assert!(approx_eq(d, 1000.0));
}

#[test]
fn distance_divides_by_ratio() {
    let mut path = PathModel::new();
    path.append(pt(0.0, 0.0));
    path.append(pt(0.0, 300.0));
    let d = path.distance(2.0).unwrap();
    assert!(approx_eq(d, 150.0));
}

#[test]
fn distance_unknown_without_calibration() {
    let mut path = PathModel::new();
    path.append(pt(0.0, 0.0));
    path.append(pt(10.0, 0.0));
    assert_eq!(path.distance(0.0), None);
    assert_eq!(path.distance(-1.0), None);
    assert_eq!(path.distance(f64::NAN), None);
}

#[test]
fn pixel_length_ignores_calibration() {
    let mut path = PathModel::new();
    path.append(pt(0.0, 0.0));
    path.append(pt(3.0, 4.0));
    assert!(approx_eq(path.pixel_length(), 5.0));
}
