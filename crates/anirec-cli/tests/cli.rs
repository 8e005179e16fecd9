use std::io::Write;
use assert_cmd::Command;

use predicates::prelude::*;
use predicates::str::contains;
use tempfile::NamedTempFile;
use test_fixtures::anime_csv_path;

fn anirec() -> Command {
    let mut cmd = Command::cargo_bin("anirec").expect("binary exists");
    cmd.env_remove("ANIREC_LOG")
        .env_remove("ANIREC_CONFIG")
        .env_remove("ANIREC_TOP_N")
        .env_remove("ANIREC_EXPLAIN_PROVIDER")
        .arg("--catalog")
        .arg(anime_csv_path());
    cmd
}

#[test]
fn recommend_prints_ranked_titles() {
    anirec()
        .args(["recommend", "--favorite", "Neon Genesis Evangelion", "-n", "3"])
        .assert()
        .success()
        .stdout(contains("Recommendations based on: Neon Genesis Evangelion"))
        .stdout(contains(" 1. "))
        .stdout(contains("Neon Genesis Evangelion (").not());
}

#[test]
fn recommend_unknown_title_reports_it() {
    anirec()
        .args(["recommend", "-f", "Not An Anime"])
        .assert()
        .success()
        .stdout(contains("Unknown titles: Not An Anime"))
        .stdout(contains("No recommendations available"));
}

#[test]
fn recommend_json_with_template_explanations() {
    let output = anirec()
        .args(["recommend", "-f", "Clannad", "-n", "2", "--explain", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let set: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(set["provider"], "tfidf");
    let recs = set["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 2);
    assert!(recs[0]["explanation"].as_str().unwrap().contains("Clannad"));
}

#[test]
fn top_n_out_of_range_fails() {
    anirec()
        .args(["recommend", "-f", "Clannad", "-n", "0"])
        .assert()
        .failure()
        .stderr(contains("invalid top_n"));
}

#[test]
fn search_finds_space_titles() {
    anirec()
        .args(["search", "space", "junk"])
        .assert()
        .success()
        .stdout(contains("Planetes"))
        .stdout(contains("key terms: ").and(contains("debris")));
}

#[test]
fn head_and_stats() {
    anirec()
        .args(["head", "-n", "2"])
        .assert()
        .success()
        .stdout(contains("[0] Mobile Suit Gundam").and(contains("[1] Neon Genesis Evangelion")))
        .stdout(contains("[2]").not());

    anirec()
        .arg("stats")
        .assert()
        .success()
        .stdout(contains("items:              10"))
        .stdout(contains("duplicate titles:   1"));
}

#[test]
fn pitch_falls_back_to_synopsis_excerpt() {
    anirec()
        .args(["pitch", "Planetes"])
        .assert()
        .success()
        .stdout(contains(
            "Planetes: Debris collectors work in orbit cleaning up space junk around the planet.",
        ));

    anirec()
        .args(["pitch", "Not An Anime"])
        .assert()
        .success()
        .stdout(contains("Unknown title: Not An Anime"));
}

#[test]
fn about_does_not_need_a_catalog() {
    Command::cargo_bin("anirec")
        .unwrap()
        .args(["--catalog", "/nonexistent.csv", "about"])
        .assert()
        .success()
        .stdout(contains("cosine"))
        .stdout(contains(concat!("anirec ", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn missing_catalog_is_reported() {
    Command::cargo_bin("anirec")
        .unwrap()
        .args(["--catalog", "/nonexistent.csv", "stats"])
        .assert()
        .failure()
        .stderr(contains("failed to load catalog /nonexistent.csv"));
}

#[test]
fn config_file_sets_top_n() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[recommend]\ndefault_top_n = 1").unwrap();
    file.flush().unwrap();

    let output = anirec()
        .arg("--config")
        .arg(file.path())
        .args(["recommend", "-f", "Clannad", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let set: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(set["recommendations"].as_array().unwrap().len(), 1);
}

#[test]
fn interactive_session() {
    anirec()
        .arg("interactive")
        .write_stdin("2\nClannad, Toradora!\n4\nPlanetes\n5\n")
        .assert()
        .success()
        .stdout(contains("Recommendations:").and(contains("Goodbye!")))
        .stdout(contains("Planetes: Debris collectors work in orbit"));
}
