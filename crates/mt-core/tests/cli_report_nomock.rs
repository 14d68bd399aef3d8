//! End-to-end tests for catalog browsing and report export.
//!
//! Every report test pins the timestamp with `--now` so output is
//! deterministic.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const NOW: &str = "2026-01-15 14:30:22";

fn morphtag() -> Command {
    let mut cmd = cargo_bin_cmd!("morphtag");
    cmd.env_remove("MORPHTAG_NOW")
        .env_remove("MORPHTAG_LOG")
        .env_remove("MORPHTAG_LOG_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

fn json_stdout(args: &[&str]) -> serde_json::Value {
    let output = morphtag().args(args).output().expect("run morphtag");
    assert!(output.status.success(), "command failed: {:?}", args);
    serde_json::from_slice(&output.stdout).expect("valid JSON")
}

// ============================================================================
// Browsing
// ============================================================================

mod browse {
    use super::*;

    #[test]
    fn catalog_overview_lists_categories() {
        morphtag()
            .arg("catalog")
            .assert()
            .success()
            .stdout(predicate::str::contains("🎯 NOUN Complete Analysis (NN, NNP, NNS)"))
            .stdout(predicate::str::contains("XPOS: PRP • V_PRON-HON"))
            .stdout(predicate::str::contains("Morphological Features"));
    }

    #[test]
    fn catalog_json_has_every_category() {
        let value = json_stdout(&["--format", "json", "catalog"]);
        assert_eq!(value["schema_version"], "1.0.0");
        let categories = value["categories"].as_array().expect("categories array");
        assert_eq!(categories.len(), 9);
        assert_eq!(categories[0]["key"], "NOUN_analysis");
    }

    #[test]
    fn show_accepts_bare_name() {
        morphtag()
            .args(["show", "pronoun"])
            .assert()
            .success()
            .stdout(predicate::str::contains("PRONOUN_analysis_1_0"))
            .stdout(predicate::str::contains("PRON V_PRON-HON"));
    }

    #[test]
    fn show_unknown_category_exits_not_found() {
        morphtag()
            .args(["show", "INTERJECTION"])
            .assert()
            .code(11)
            .stderr(predicate::str::contains("INTERJECTION"));
    }

    #[test]
    fn ids_for_one_category() {
        morphtag()
            .args(["ids", "VERB"])
            .assert()
            .success()
            .stdout("VERB_analysis_0_0\nVERB_analysis_0_1\nVERB_analysis_0_2\nVERB_analysis_1_0\nVERB_analysis_1_1\n");
    }

    #[test]
    fn ids_json_covers_catalog() {
        let value = json_stdout(&["--format", "json", "ids"]);
        assert_eq!(value.as_array().map(Vec::len), Some(28));
    }
}

// ============================================================================
// Report export
// ============================================================================

mod report {
    use super::*;

    #[test]
    fn empty_selection_prints_placeholder() {
        morphtag()
            .args(["--now", NOW, "report"])
            .assert()
            .success()
            .stdout("No recommendations selected.\n");
    }

    #[test]
    fn report_groups_by_first_seen_category() {
        let output = morphtag()
            .args([
                "--now",
                NOW,
                "report",
                "--select",
                "NOUN_analysis_0_0",
                "VERB_analysis_0_1",
                "NOUN_analysis_0_2",
            ])
            .output()
            .expect("run morphtag");
        assert!(output.status.success());

        let text = String::from_utf8(output.stdout).expect("utf-8");
        let noun = text.find("🎯 NOUN").expect("noun group");
        let verb = text.find("🎯 VERB").expect("verb group");
        assert!(noun < verb);
        assert!(text.contains("2. Use NNP (Proper Noun)\n"));
        assert!(text.contains("Generated: 2026-01-15 14:30:22\n"));
        assert!(text.ends_with("Total Selected: 3 recommendations\n"));
    }

    #[test]
    fn deselect_applies_after_select() {
        morphtag()
            .args([
                "--now",
                NOW,
                "report",
                "-s",
                "ADVERB_analysis_0_0",
                "ADVERB_analysis_0_4",
                "-d",
                "ADVERB_analysis_0_0",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Total Selected: 1 recommendations"))
            .stdout(predicate::str::contains("1. ").count(1));
    }

    #[test]
    fn now_from_environment() {
        morphtag()
            .env("MORPHTAG_NOW", "2020-02-02 02:02:02")
            .args(["report", "-s", "NUMBER_analysis_0_0"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Generated: 2020-02-02 02:02:02"));
    }

    #[test]
    fn identical_invocations_are_byte_identical() {
        let args = ["--now", NOW, "report", "-s", "PARTICLE_analysis_0_1", "DETERMINER_analysis_0_0"];
        let first = morphtag().args(args).output().expect("first run");
        let second = morphtag().args(args).output().expect("second run");
        assert_eq!(first.stdout, second.stdout);
    }

    #[test]
    fn json_report_carries_entries_and_text() {
        let value = json_stdout(&[
            "--format",
            "json",
            "--now",
            NOW,
            "report",
            "--select",
            "PREPOSITION_analysis_0_1",
        ]);
        assert_eq!(value["count"], 1);
        assert_eq!(value["entries"][0]["id"], "PREPOSITION_analysis_0_1");
        assert_eq!(value["entries"][0]["xpos"], "IN");
        let report = value["report"].as_str().expect("report text");
        assert!(report.contains("ADP IN Case=Ins"));
    }

    #[test]
    fn output_flag_writes_file() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("analysis.txt");

        morphtag()
            .args(["--now", NOW, "report", "-s", "CONJUNCTION_analysis_0_0", "--output"])
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        let written = std::fs::read_to_string(&path).expect("report file");
        assert!(written.starts_with("COMPLETE UD MORPHOLOGICAL ANALYSIS\n"));
        assert!(written.ends_with("Total Selected: 1 recommendations\n"));
    }
}

// ============================================================================
// Error exits
// ============================================================================

mod errors {
    use super::*;

    #[test]
    fn unknown_identifier_exits_not_found() {
        morphtag()
            .args(["report", "-s", "NOUN_analysis_4_0"])
            .assert()
            .code(11)
            .stderr(predicate::str::contains("NOUN_analysis_4_0"));
    }

    #[test]
    fn malformed_identifier_exits_args_error() {
        morphtag()
            .args(["report", "-s", "NOUN-0-0"])
            .assert()
            .code(10);
    }

    #[test]
    fn invalid_now_exits_args_error() {
        morphtag()
            .args(["--now", "tomorrow", "report"])
            .assert()
            .code(10)
            .stderr(predicate::str::contains("tomorrow"));
    }

    #[test]
    fn json_errors_are_structured() {
        let output = morphtag()
            .args(["--format", "json", "-q", "report", "-s", "VERB_analysis_9_9"])
            .output()
            .expect("run morphtag");
        assert_eq!(output.status.code(), Some(11));
        let value: serde_json::Value = serde_json::from_slice(&output.stderr).expect("JSON error");
        assert_eq!(value["code"], 22);
        assert_eq!(value["recoverable"], true);
    }

    #[test]
    fn output_to_missing_directory_exits_io_error() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("missing").join("report.txt");
        morphtag()
            .args(["--now", NOW, "report", "-s", "NOUN_analysis_0_0", "-o"])
            .arg(&path)
            .assert()
            .code(12);
    }
}
