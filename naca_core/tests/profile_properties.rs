//! End-to-end checks of the generated airfoil boundary.

use std::path::PathBuf;

use approx::assert_abs_diff_eq;
use naca_core::{generate, load_dat, save_dat, NacaError, ProfileOptions, SampleGrid, Spacing};

#[test]
fn rejects_invalid_designators_and_counts() {
    let defaults = ProfileOptions::default();

    for (code, n) in [("0012", 0), ("99999", 10), ("-12", 10)] {
        match generate(code, n, &defaults) {
            Err(NacaError::InvalidInput { .. }) => {}
            other => panic!("{code} / {n}: expected InvalidInput, got {other:?}"),
        }
    }
}

#[test]
fn length_is_two_n_minus_one_for_every_option_combination() {
    for half_cosine in [true, false] {
        for closed in [true, false] {
            let options = ProfileOptions::new(half_cosine, closed, false);
            for n in [2, 17, 64] {
                let coords = generate("6409", n, &options).unwrap();
                assert_eq!(coords.len(), 2 * n - 1);
            }
        }
    }
}

#[test]
fn closed_trailing_edge_has_exact_zero_endpoints() {
    let coords = generate("2412", 80, &ProfileOptions::default()).unwrap();
    let points = coords.points();
    assert_eq!(points[0].y, 0.0);
    assert_eq!(points[points.len() - 1].y, 0.0);
}

#[test]
fn symmetric_section_mirrors_about_chord() {
    let n = 33;
    let coords = generate("0012", n, &ProfileOptions::default()).unwrap();
    let points = coords.points();
    let le = n - 1;

    for i in 1..n {
        let upper = points[le - i];
        let lower = points[le + i];
        assert_eq!(upper.x, lower.x);
        assert_eq!(upper.y, -lower.y);
    }
}

#[test]
fn naca_2412_endpoints() {
    let coords = generate("2412", 50, &ProfileOptions::default()).unwrap();
    let points = coords.points();

    assert_abs_diff_eq!(points[0].x, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(points[0].y, 0.0, epsilon = 1e-12);

    let mid = points[points.len() / 2];
    assert_abs_diff_eq!(mid.x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(mid.y, 0.0, epsilon = 1e-12);
}

#[test]
fn naca_2412_matches_reference_ordinates() {
    // x = 0.3 lies on the forward branch of the mean line
    let options = ProfileOptions::default().with_spacing(Spacing::Linear);
    let coords = generate("2412", 11, &options).unwrap();
    let upper = coords.upper_surface();
    let lower = coords.lower_surface();

    let station = 3;
    let u = upper[upper.len() - 1 - station];
    let l = lower[station];
    assert_abs_diff_eq!(u.x, 0.3, epsilon = 1e-12);
    assert_abs_diff_eq!(l.x, 0.3, epsilon = 1e-12);

    // camber 0.01875 plus/minus half-thickness 0.060007
    assert_abs_diff_eq!(u.y, 0.078757, epsilon = 1e-6);
    assert_abs_diff_eq!(l.y, -0.041257, epsilon = 1e-6);
}

#[test]
fn cosine_grid_clusters_at_both_edges() {
    let n = 50;
    let cosine = SampleGrid::new(n, Spacing::HalfCosine).unwrap();
    let linear = SampleGrid::new(n, Spacing::Linear).unwrap();
    let c = cosine.stations();
    let l = linear.stations();

    assert!(c.windows(2).all(|w| w[1] > w[0]));
    assert!(c[1] - c[0] < l[1] - l[0]);
    assert!(c[n - 1] - c[n - 2] < l[n - 1] - l[n - 2]);
}

#[test]
fn file_round_trip_preserves_coordinates() {
    let dir = tempfile::tempdir().unwrap();
    let coords = generate("4415", 40, &ProfileOptions::default().open_trailing_edge()).unwrap();
    let path = save_dat(&coords, dir.path()).unwrap();

    let loaded = load_dat(&path).unwrap();
    assert_eq!(loaded.name, "NACA 4415");
    assert_eq!(loaded.points.len(), coords.len());
    for (read, original) in loaded.points.iter().zip(coords.points()) {
        assert_abs_diff_eq!(read.x, original.x, epsilon = 1e-6);
        assert_abs_diff_eq!(read.y, original.y, epsilon = 1e-6);
    }
}

#[test]
fn write_to_file_option_writes_into_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    let original_dir: PathBuf = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let result = generate("2412", 10, &ProfileOptions::default().with_file_output());
    let written = dir.path().join("NACA 2412.dat");
    let loaded = load_dat(&written);

    std::env::set_current_dir(original_dir).unwrap();

    let coords = result.unwrap();
    let loaded = loaded.unwrap();
    assert_eq!(loaded.points.len(), coords.len());
    assert_eq!(loaded.designator().as_ref(), Some(coords.designator()));
}
