//! Pipeline regression test
//!
//! Parses operation text, runs pipelines over synthesized grids, and
//! pushes the results through a PNG file round trip.

use rgbkit::color::{negative, weighted_grayscale};
use rgbkit::filter::{blur, detect_edges};
use rgbkit::io::{ImageFormat, read_image, read_image_from_memory, write_image, write_image_format};
use rgbkit::{Grid, Operation, Pipeline, Rgb};
use rgbkit_test::{RegParams, gradient_grid, pattern_grid};

#[test]
fn pipeline_reg() {
    let mut rp = RegParams::new("pipeline");
    let dir = tempfile::tempdir().expect("tempdir");

    // --- Test 1: every listed name parses back to itself ---
    for name in Operation::NAMES {
        let op: Operation = name.parse().expect("listed name parses");
        rp.check(op.name() == name, name);
    }

    // --- Test 2: pipeline text round-trips through Display ---
    let pipeline: Pipeline = "Weighted-Grayscale, blur ,edges:12.5,solarize:64"
        .parse()
        .expect("pipeline parses");
    rp.compare_values(4.0, pipeline.operations().len() as f64, 0.0);
    let text = pipeline.to_string();
    rp.check(
        text == "weighted-grayscale,blur,edges:12.5,solarize:64",
        "canonical pipeline text",
    );
    let reparsed: Pipeline = text.parse().expect("canonical text parses");
    rp.check(reparsed == pipeline, "reparsed pipeline equal");

    // --- Test 3: bad entries are rejected ---
    rp.check("sharpen".parse::<Pipeline>().is_err(), "unknown name");
    rp.check("blur:3".parse::<Pipeline>().is_err(), "unexpected parameter");
    rp.check("solarize:abc".parse::<Pipeline>().is_err(), "bad parameter");
    rp.check("blur,,negative".parse::<Pipeline>().is_err(), "empty entry");

    // --- Test 4: pipeline equals the direct calls ---
    let pixs = pattern_grid(30, 20).expect("pattern grid");
    let mut expected = pixs.duplicate();
    weighted_grayscale(&mut expected);
    let mut expected = blur(&expected);
    detect_edges(&mut expected, 12.5);
    let mut staged: Pipeline = "weighted-grayscale,blur".parse().expect("parses");
    staged.push(Operation::DetectEdges { threshold: 12.5 });
    let actual = staged.apply(pixs.duplicate());
    rp.compare_grids(&expected, &actual);
    rp.write_grid(&actual, "edges").expect("write edges");

    // --- Test 5: double negative is the identity pipeline ---
    let identity: Pipeline = "negative,negative".parse().expect("parses");
    rp.compare_grids(&pixs, &identity.apply(pixs.duplicate()));
    let empty: Pipeline = "".parse().expect("empty parses");
    rp.compare_grids(&pixs, &empty.apply(pixs.duplicate()));

    // --- Test 6: PNG round trip is lossless ---
    let original = gradient_grid(17, 9).expect("gradient grid");
    let path = dir.path().join("nested").join("gradient.png");
    write_image(&original, &path).expect("write png");
    let loaded = read_image(&path).expect("read png");
    rp.compare_grids(&original, &loaded);

    let bytes = std::fs::read(&path).expect("read bytes");
    let from_memory = read_image_from_memory(&bytes).expect("decode png bytes");
    rp.compare_grids(&original, &from_memory);

    // --- Test 7: explicit format ignores the extension ---
    let odd = dir.path().join("negated.out");
    let mut negated = original.duplicate();
    negative(&mut negated);
    write_image_format(&negated, &odd, ImageFormat::Png).expect("write explicit png");
    let loaded = read_image_from_memory(&std::fs::read(&odd).expect("read bytes"))
        .expect("decode png bytes");
    rp.compare_grids(&negated, &loaded);

    // --- Test 8: empty grids and unknown files fail cleanly ---
    let nothing = Grid::new(0, 0).expect("empty grid");
    rp.check(
        write_image(&nothing, dir.path().join("empty.png")).is_err(),
        "empty grid not encodable",
    );
    rp.check(
        read_image(dir.path().join("missing.png")).is_err(),
        "missing file",
    );
    rp.check(
        write_image(&original, dir.path().join("no_extension")).is_err(),
        "format from missing extension",
    );
    rp.check(
        read_image_from_memory(&[1, 2, 3, 4]).is_err(),
        "garbage bytes",
    );

    // --- Test 9: solarize pipeline on a uniform field ---
    let field = Grid::new_filled(6, 6, Rgb::new(200, 50, 10)).expect("field");
    let out = "solarize,blur".parse::<Pipeline>().expect("parses").apply(field);
    rp.check(
        out.pixels().all(|(_, _, p)| p == Rgb::new(200, 205, 245)),
        "solarized field",
    );

    assert!(rp.cleanup(), "pipeline regression test failed");
}
