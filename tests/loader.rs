//! Input-file parsing and output-file writing tests for the external I/O
//! layer (§6). The core itself assumes well-formed inputs (§7); these
//! tests exercise the boundary where real-world malformed files are turned
//! into a typed [`SimError`].

use std::io::Write;

use pipe5sim::config::Config;
use pipe5sim::error::SimError;
use pipe5sim::loader;
use tempfile::NamedTempFile;

fn temp_file_with(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("failed to write temp file");
    file.flush().expect("failed to flush temp file");
    file
}

#[test]
fn loads_instruction_image_big_endian() {
    let file = temp_file_with("f0 12 9a 34");
    let ic = loader::load_instructions(file.path()).expect("valid hex image");
    assert_eq!(ic.read_word_be(0), 0xF012);
    assert_eq!(ic.read_word_be(2), 0x9A34);
}

#[test]
fn instruction_image_tolerates_newlines_and_extra_whitespace() {
    let file = temp_file_with("f0\n12\n\n9a 34\t\n");
    let ic = loader::load_instructions(file.path()).expect("valid hex image");
    assert_eq!(ic.read_word_be(0), 0xF012);
}

#[test]
fn loads_data_image_byte_at_a_time() {
    let file = temp_file_with("ab cd 01");
    let dc = loader::load_data(file.path()).expect("valid hex image");
    assert_eq!(dc.read_byte(0), 0xAB);
    assert_eq!(dc.read_byte(1), 0xCD);
    assert_eq!(dc.read_byte(2), 0x01);
}

#[test]
fn rejects_malformed_hex_token() {
    let file = temp_file_with("ab zz 01");
    let err = loader::load_data(file.path()).unwrap_err();
    assert!(matches!(err, SimError::MalformedHex { token, .. } if token == "zz"));
}

#[test]
fn loads_register_image_of_exactly_sixteen_values() {
    let values = (0..16).map(|i| format!("{i:x}")).collect::<Vec<_>>().join(" ");
    let file = temp_file_with(&values);
    let regs = loader::load_register_image(file.path()).expect("16 values");
    assert_eq!(regs[0], 0);
    assert_eq!(regs[15], 15);
}

#[test]
fn rejects_register_image_with_wrong_count() {
    let file = temp_file_with("1 2 3");
    let err = loader::load_register_image(file.path()).unwrap_err();
    assert!(matches!(
        err,
        SimError::RegisterCount {
            found: 3,
            expected: 16,
            ..
        }
    ));
}

#[test]
fn missing_file_reports_io_error() {
    let err = loader::load_data(std::path::Path::new("/nonexistent/dcache.txt")).unwrap_err();
    assert!(matches!(err, SimError::Io { .. }));
}

#[test]
fn writes_data_dump_as_two_hex_digits_per_line() {
    let mut cache = pipe5sim::cache::Cache::new();
    cache.write_byte(0, 0xAB);
    cache.write_byte(1, 0x0F);

    let out = NamedTempFile::new().expect("failed to create temp file");
    loader::write_data_dump(out.path(), &cache).expect("write succeeds");

    let contents = std::fs::read_to_string(out.path()).expect("read back dump");
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("ab"));
    assert_eq!(lines.next(), Some("0f"));
}

#[test]
fn writes_ten_line_stats_report() {
    let stats = pipe5sim::stats::Stats::new();
    let out = NamedTempFile::new().expect("failed to create temp file");
    loader::write_stats_report(out.path(), &stats).expect("write succeeds");

    let contents = std::fs::read_to_string(out.path()).expect("read back report");
    assert_eq!(contents.lines().count(), 10);
    assert!(contents.starts_with("Total Instructions:"));
}

#[test]
fn loads_optional_toml_config() {
    let file = temp_file_with("trace = true\n");
    let config: Config = loader::load_config(file.path()).expect("valid TOML");
    assert!(config.trace);
}

#[test]
fn rejects_malformed_toml_config() {
    let file = temp_file_with("trace = not-a-bool\n");
    let err = loader::load_config(file.path()).unwrap_err();
    assert!(matches!(err, SimError::Config { .. }));
}
