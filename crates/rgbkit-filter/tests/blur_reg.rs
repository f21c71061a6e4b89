//! Blur regression test
//!
//! 3x3 box blur on synthesized grids: dimensions, degenerate sizes,
//! uniform input, border pass-through and the bright-center example.

use rgbkit_core::{Grid, Rgb};
use rgbkit_filter::blur;
use rgbkit_test::{RegParams, checker_grid, gradient_grid, pattern_grid};

#[test]
fn blur_reg() {
    let mut rp = RegParams::new("blur");

    // --- Test 1: dimensions preserved, source untouched ---
    let pixs = pattern_grid(40, 30).expect("pattern grid");
    let before = pixs.duplicate();
    let blurred = blur(&pixs);
    rp.compare_values(40.0, blurred.width() as f64, 0.0);
    rp.compare_values(30.0, blurred.height() as f64, 0.0);
    rp.compare_grids(&before, &pixs);
    rp.write_grid(&blurred, "pattern").expect("write blurred");

    // --- Test 2: grids under 3 in either dimension come back unchanged ---
    for (w, h) in [(1, 1), (2, 2), (2, 30), (30, 2), (1, 7)] {
        let small = gradient_grid(w, h).expect("gradient grid");
        rp.compare_grids(&small, &blur(&small));
    }

    // --- Test 3: uniform grid is a fixed point ---
    let uniform = Grid::new_filled(9, 9, Rgb::new(12, 130, 250)).unwrap();
    rp.compare_grids(&uniform, &blur(&uniform));

    // --- Test 4: border ring is copied verbatim ---
    let (w, h) = pixs.dimensions();
    let border_changed = blurred
        .pixels()
        .filter(|&(x, y, _)| x == 0 || y == 0 || x == w - 1 || y == h - 1)
        .filter(|&(x, y, p)| p != pixs.get(x, y).unwrap())
        .count();
    rp.compare_values(0.0, border_changed as f64, 0.0);

    // --- Test 5: bright center on a 5x5 field ---
    let mut field = Grid::new_filled(5, 5, Rgb::gray(100)).unwrap();
    field.set(2, 2, Rgb::gray(250)).unwrap();
    let out = blur(&field);
    // 8 * 100 + 250 = 1050, 1050 / 9 = 116
    for (x, y) in [(1, 1), (2, 1), (3, 1), (1, 2), (2, 2), (3, 2), (1, 3), (2, 3), (3, 3)] {
        rp.check(out.get(x, y).unwrap() == Rgb::gray(116), "interior averaged");
    }
    for (x, y) in [(2, 1), (1, 2), (3, 2), (2, 3)] {
        let px = out.get(x, y).unwrap();
        rp.check(px.red > 100 && px.green > 100 && px.blue > 100, "neighbor brighter");
    }
    for (x, y) in [(0, 0), (4, 0), (0, 4), (4, 4)] {
        rp.check(out.get(x, y).unwrap() == Rgb::gray(100), "corner untouched");
    }

    // --- Test 6: checkerboard averages toward the midpoint ---
    let checker = checker_grid(8, 8, 1, Rgb::BLACK, Rgb::WHITE).expect("checker grid");
    let smooth = blur(&checker);
    // 5 of 9 or 4 of 9 white: 1275 / 9 = 141, 1020 / 9 = 113
    let off = (1..7u32)
        .flat_map(|y| (1..7u32).map(move |x| (x, y)))
        .filter(|&(x, y)| {
            let v = smooth.get(x, y).unwrap();
            v != Rgb::gray(141) && v != Rgb::gray(113)
        })
        .count();
    rp.compare_values(0.0, off as f64, 0.0);

    assert!(rp.cleanup(), "blur regression test failed");
}
