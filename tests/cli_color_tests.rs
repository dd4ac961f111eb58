//! End-to-end tests for `utilkit color` commands.

mod fixtures;
use fixtures::*;

#[test]
fn test_convert_hex_to_rgb() {
    let output = run(&["color", "convert", "#4A638D"]);
    let out = success(&output);
    assert!(out.contains("RGB:  rgb(74, 99, 141)"), "stdout: {out}");
}

#[test]
fn test_convert_json_shape() {
    let output = run(&["color", "convert", "rgb(74, 99, 141)", "--json"]);
    let json = success_json(&output);
    assert_eq!(json["hex"], "#4A638D");
    assert_eq!(json["rgb"], "rgb(74, 99, 141)");
    assert!(json["hsl"].as_str().unwrap().starts_with("hsl("));
    assert!(json["cmyk"].as_str().unwrap().starts_with("cmyk("));
}

#[test]
fn test_convert_unparsable_color() {
    let output = run(&["color", "convert", "not-a-color"]);
    failure(&output, 1);
}

#[test]
fn test_palette_uses_configured_size() {
    let output = run(&["color", "palette", "#336699", "--json"]);
    let json = success_json(&output);
    assert_eq!(json["colors"].as_array().unwrap().len(), 5);
    assert_eq!(json["colors"][0], "#336699");
    assert!(json["css"].as_str().unwrap().contains("--color-1: #336699;"));
}

#[test]
fn test_palette_size_out_of_range() {
    let output = run(&["color", "palette", "#336699", "--size", "40"]);
    failure(&output, 1);
}

#[test]
fn test_palette_css_export() {
    let dir = temp_config_dir();
    let target = dir.path().join("palette");
    let output = run_in(
        &[
            "color",
            "palette",
            "red",
            "--scheme",
            "complementary",
            "--size",
            "2",
            "--output",
            target.to_str().unwrap(),
        ],
        dir.path(),
    );
    success(&output);

    let css = std::fs::read_to_string(dir.path().join("palette.css")).unwrap();
    assert!(css.contains(":root"), "css: {css}");
    assert!(css.contains("#FF0000"), "css: {css}");
}

#[test]
fn test_gradient_css() {
    let output = run(&["color", "gradient", "#FF0000", "#0000FF"]);
    assert_eq!(
        success(&output).lines().next().unwrap(),
        "background: linear-gradient(90deg, #FF0000 0%, #0000FF 100%);"
    );
}

#[test]
fn test_gradient_needs_two_colors() {
    let output = run(&["color", "gradient", "#FF0000"]);
    let err = failure(&output, 1);
    assert!(err.contains("Invalid option"), "stderr: {err}");
}

#[test]
fn test_gradient_samples_json() {
    let output = run(&["color", "gradient", "black", "white", "--radial", "--samples", "3", "--json"]);
    let json = success_json(&output);
    assert!(json["css"].as_str().unwrap().starts_with("background: radial-gradient"));
    assert_eq!(json["samples"].as_array().unwrap().len(), 3);
}

#[test]
fn test_contrast_black_on_white() {
    let output = run(&["color", "contrast", "#000000", "#FFFFFF", "--json"]);
    let json = success_json(&output);
    assert_eq!(json["ratio"], 21.0);
    assert_eq!(json["aaa_normal"], true);
    assert_eq!(json["foreground"], "#000000");
}

#[test]
fn test_contrast_text_report() {
    let output = run(&["color", "contrast", "#777777", "#FFFFFF"]);
    let out = success(&output);
    assert!(out.contains("AA large text:   pass"), "stdout: {out}");
    assert!(out.contains("AAA normal text: fail"), "stdout: {out}");
}

#[test]
fn test_blindness_every_kind() {
    let output = run(&["color", "blindness", "#FF0000", "--json"]);
    let json = success_json(&output);
    assert_eq!(json["original"], "#FF0000");
    assert_eq!(json["simulated"].as_array().unwrap().len(), 8);
}

#[test]
fn test_blindness_achromatopsia_is_gray() {
    let output = run(&["color", "blindness", "#FF0000", "--kind", "achromatopsia", "--json"]);
    let json = success_json(&output);
    let hex = json["simulated"][0]["color"].as_str().unwrap();
    assert_eq!(&hex[1..3], &hex[3..5]);
    assert_eq!(&hex[3..5], &hex[5..7]);
}

#[test]
fn test_extract_two_bands() {
    let dir = temp_config_dir();
    let image = dir.path().join("bands.png");
    write_banded_png(&image, &[[255, 0, 0], [0, 0, 255]], 20, 10);

    let output = run_in(
        &["color", "extract", image.to_str().unwrap(), "--colors", "2", "--json"],
        dir.path(),
    );
    let json = success_json(&output);
    let colors = json.as_array().unwrap();
    assert_eq!(colors.len(), 2);
    let mut hexes: Vec<&str> = colors.iter().map(|c| c["color"].as_str().unwrap()).collect();
    hexes.sort_unstable();
    assert_eq!(hexes, vec!["#0000FF", "#FF0000"]);
    assert_eq!(colors[0]["percentage"], 50.0);
}

#[test]
fn test_extract_missing_image_is_io_error() {
    let dir = temp_config_dir();
    let missing = dir.path().join("missing.png");
    let output = run_in(&["color", "extract", missing.to_str().unwrap()], dir.path());
    failure(&output, 2);
}

#[test]
fn test_blindness_image_round_trip() {
    let dir = temp_config_dir();
    let input = dir.path().join("in.png");
    let out = dir.path().join("nested").join("out.png");
    write_banded_png(&input, &[[255, 0, 0]], 4, 4);

    let output = run_in(
        &[
            "color",
            "blindness",
            "--image",
            input.to_str().unwrap(),
            "--out",
            out.to_str().unwrap(),
            "--kind",
            "achromatopsia",
        ],
        dir.path(),
    );
    success(&output);

    let image = utilkit::services::image::read_png(&out).unwrap();
    assert_eq!((image.width, image.height), (4, 4));
    let px = &image.pixels[0..4];
    assert_eq!(px[0], px[1]);
    assert_eq!(px[1], px[2]);
    assert_eq!(px[3], 255);
}
