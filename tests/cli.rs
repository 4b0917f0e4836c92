mod common;

use assert_cmd::Command;
use common::{wgs84_wkt, CUSTOM_TMERC};

#[test]
fn runs() {
    let mut cmd = Command::cargo_bin("ucrs").unwrap();
    cmd.assert().success();
}

#[test]
fn outputs_tool_name() {
    let mut cmd = Command::cargo_bin("ucrs").unwrap();
    cmd.arg("-V");
    cmd.assert().success().stdout("ucrs 0.1.0\n");
}

// Describe subcommand tests

#[test]
fn describe_epsg_code() {
    let mut cmd = Command::cargo_bin("ucrs").unwrap();
    cmd.args(["describe", "4326"]);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("EPSG:4326"))
        .stdout(predicates::str::contains("geographic"));
}

#[test]
fn describe_json_output_format() {
    let mut cmd = Command::cargo_bin("ucrs").unwrap();
    cmd.args(["describe", "EPSG:3857", "--output", "json"]);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("\"epsg\": 3857"))
        .stdout(predicates::str::contains("\"kind\": \"projected\""));
}

#[test]
fn describe_proj_string() {
    let mut cmd = Command::cargo_bin("ucrs").unwrap();
    cmd.args(["describe", CUSTOM_TMERC]);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("local/custom"));
}

#[test]
fn describe_wkt_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wgs84.wkt");
    std::fs::write(&path, wgs84_wkt()).unwrap();

    let mut cmd = Command::cargo_bin("ucrs").unwrap();
    cmd.args(["describe", "--file"]).arg(&path);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("EPSG:4326"));
}

#[test]
fn describe_invalid_input_fails() {
    let mut cmd = Command::cargo_bin("ucrs").unwrap();
    cmd.args(["describe", "not a real code or WKT"]);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("malformed CRS"));
}

#[test]
fn describe_without_input_fails() {
    let mut cmd = Command::cargo_bin("ucrs").unwrap();
    cmd.arg("describe");
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("invalid CRS input"));
}

// Convert subcommand tests

#[test]
fn convert_to_proj4() {
    let mut cmd = Command::cargo_bin("ucrs").unwrap();
    cmd.args(["convert", "4326", "--to", "proj4"]);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("+proj=longlat"));
}

#[test]
fn convert_to_epsg() {
    let mut cmd = Command::cargo_bin("ucrs").unwrap();
    cmd.args(["convert", "EPSG:4326", "--to", "epsg"]);
    cmd.assert().success().stdout("EPSG:4326\n");
}

#[test]
fn convert_to_wkt() {
    let mut cmd = Command::cargo_bin("ucrs").unwrap();
    cmd.args(["convert", "4326", "--to", "wkt"]);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("GEOGCS"));
}

#[test]
fn convert_custom_to_epsg_fails() {
    let mut cmd = Command::cargo_bin("ucrs").unwrap();
    cmd.args(["convert", CUSTOM_TMERC, "--to", "epsg"]);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("no EPSG registry code"));
}

#[test]
fn convert_unsupported_target_fails() {
    let mut cmd = Command::cargo_bin("ucrs").unwrap();
    cmd.args(["convert", "4326", "--to", "geojson"]);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("unsupported conversion target"));
}
