#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

struct Graph {
    temp: TempDir,
}

impl Graph {
    /// Alpha, Bravo (with properties), Projects/Garden and one journal, which
    /// references a page that has no file.
    fn new() -> Self {
        let graph = Self::empty();
        graph.write("pages/Alpha.md", "- first\n");
        graph.write("pages/Bravo.md", "type:: book\n\n- second\n");
        graph.write("pages/Projects___Garden.md", "- dig\n");
        graph.write("journals/2024_01_15.md", "- read [[Someday]]\n");
        graph
    }

    fn empty() -> Self {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("graph").join("logseq")).unwrap();
        fs::create_dir_all(temp.path().join("global")).unwrap();
        Self { temp }
    }

    fn root(&self) -> std::path::PathBuf {
        self.temp.path().join("graph")
    }

    fn write(&self, relative: &str, content: &str) {
        let path = self.root().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.root().join(relative)).unwrap()
    }

    /// `randnote` running inside the graph, isolated from the user's config.
    fn cmd(&self) -> Command {
        let mut cmd = Command::new(cargo_bin("randnote"));
        cmd.current_dir(self.root())
            .env("RANDNOTE_CONFIG_DIR", self.temp.path().join("global"))
            .env_remove("RANDNOTE_LOG");
        cmd
    }
}

fn global_config(graph: &Graph, content: &str) {
    fs::write(
        graph.temp.path().join("global").join("randnote.toml"),
        content,
    )
    .unwrap();
}

#[test]
fn naked_run_prints_sorted_links() {
    let graph = Graph::new();
    graph
        .cmd()
        .args(["10", "--seed", "1"])
        .assert()
        .success()
        .stdout(
            "- [[Alpha]]\n- [[Bravo]]\n- [[Jan 15th, 2024]]\n- [[Projects]]\n- [[Projects/Garden]]\n- [[Someday]]\n",
        )
        .stderr(predicate::str::contains("Only 6 matching pages"));
}

#[test]
fn count_defaults_to_one() {
    let graph = Graph::new();
    let output = graph.cmd().arg("--seed=3").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with("- [["));
}

#[test]
fn seed_makes_picks_reproducible() {
    let graph = Graph::new();
    let run = || {
        graph
            .cmd()
            .args(["pick", "3", "--no-sort", "--seed", "42"])
            .output()
            .unwrap()
            .stdout
    };
    let first = run();
    assert_eq!(first, run());
    assert_eq!(String::from_utf8(first).unwrap().lines().count(), 3);
}

#[test]
fn filters_narrow_the_population() {
    let graph = Graph::new();
    graph
        .cmd()
        .args(["pick", "5", "--journal", "only"])
        .assert()
        .success()
        .stdout("- [[Jan 15th, 2024]]\n");

    graph
        .cmd()
        .args(["pick", "5", "--dangling", "only", "--namespace", "none"])
        .assert()
        .success()
        .stdout("- [[Projects]]\n- [[Someday]]\n");

    graph
        .cmd()
        .args(["pick", "5", "--properties", "only"])
        .assert()
        .success()
        .stdout("- [[Bravo]]\n");
}

#[test]
fn count_text_is_lenient() {
    let graph = Graph::new();
    graph
        .cmd()
        .args(["2 notes", "--journal", "none", "--dangling", "none", "--seed", "9"])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| out.lines().count() == 2));

    graph
        .cmd()
        .args(["--count", "-5", "--seed", "9"])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| out.lines().count() == 1));

    graph
        .cmd()
        .args(["--count", "many", "--seed", "9"])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| out.lines().count() == 1));
}

#[test]
fn empty_graph_warns_but_succeeds() {
    let graph = Graph::empty();
    graph
        .cmd()
        .arg("3")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No pages found"));
}

#[test]
fn filtering_everything_out_warns_but_succeeds() {
    let graph = Graph::new();
    graph
        .cmd()
        .args(["--journal", "only", "--dangling", "only"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No pages found after filtering"));
}

#[test]
fn header_nests_links() {
    let graph = Graph::new();
    graph
        .cmd()
        .args(["5", "--properties", "only", "--header", "Random notes"])
        .assert()
        .success()
        .stdout("- Random notes\n\t- [[Bravo]]\n");
}

#[test]
fn writes_into_a_page() {
    let graph = Graph::new();
    graph.write("pages/Inbox.md", "title:: Inbox\n- old\n");

    graph
        .cmd()
        .args(["pick", "1", "--journal", "only", "--page", "inbox"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Added 1 link to inbox"));
    assert_eq!(
        graph.read("pages/Inbox.md"),
        "title:: Inbox\n- old\n- [[Jan 15th, 2024]]\n"
    );

    graph
        .cmd()
        .args(["pick", "1", "--namespace", "only", "--page", "Inbox", "--prepend"])
        .assert()
        .success();
    assert_eq!(
        graph.read("pages/Inbox.md"),
        "title:: Inbox\n- [[Projects/Garden]]\n- old\n- [[Jan 15th, 2024]]\n"
    );
}

#[test]
fn configured_placement_and_header_apply() {
    let graph = Graph::new();
    graph.write(
        "logseq/randnote.toml",
        "append_pages = false\nheader_block = \"Picked\"\n",
    );
    graph.write("pages/Inbox.md", "- old\n");

    graph
        .cmd()
        .args(["pick", "3", "--properties", "only", "--page", "Inbox"])
        .assert()
        .success();
    assert_eq!(graph.read("pages/Inbox.md"), "- Picked\n\t- [[Bravo]]\n- old\n");
}

#[test]
fn configured_filters_apply_and_flags_override_them() {
    let graph = Graph::new();
    global_config(&graph, "count = 10\njournal_mode = \"only\"\n");

    graph
        .cmd()
        .assert()
        .success()
        .stdout("- [[Jan 15th, 2024]]\n");

    graph
        .cmd()
        .args(["--journal", "none", "--dangling", "none", "--namespace", "none"])
        .assert()
        .success()
        .stdout("- [[Alpha]]\n- [[Bravo]]\n");
}

#[test]
fn unknown_filter_mode_is_rejected() {
    let graph = Graph::new();
    graph
        .cmd()
        .args(["--journal", "sometimes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid filter mode"));
}

#[test]
fn unknown_mode_in_config_is_an_error() {
    let graph = Graph::new();
    global_config(&graph, "dangling_mode = \"sometimes\"\n");
    graph
        .cmd()
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn missing_graph_is_an_error() {
    let graph = Graph::empty();
    let elsewhere = graph.temp.path().join("global");
    graph
        .cmd()
        .current_dir(&elsewhere)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No Logseq graph found"));
}

#[test]
fn graph_flag_selects_the_graph() {
    let graph = Graph::new();
    let elsewhere = graph.temp.path().join("global");
    graph
        .cmd()
        .current_dir(&elsewhere)
        .args(["pick", "5", "--journal", "only", "--graph"])
        .arg(graph.root())
        .assert()
        .success()
        .stdout("- [[Jan 15th, 2024]]\n");
}

#[test]
fn json_export_is_a_page_source() {
    let graph = Graph::empty();
    let export = graph.temp.path().join("pages.json");
    fs::write(
        &export,
        r#"[[{"name": "x", "originalName": "X", "file": {"id": 1}}], [{"name": "y", "journal?": true}]]"#,
    )
    .unwrap();

    graph
        .cmd()
        .args(["pick", "5", "--json"])
        .arg(&export)
        .assert()
        .success()
        .stdout("- [[X]]\n- [[y]]\n");

    graph
        .cmd()
        .args(["pick", "--page", "Inbox", "--json"])
        .arg(&export)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("read-only"));
}

#[test]
fn pages_lists_population() {
    let graph = Graph::new();
    graph
        .cmd()
        .args(["pages", "--dangling", "only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Projects"))
        .stdout(predicate::str::contains("Someday"))
        .stdout(predicate::str::contains("Alpha").not())
        .stderr(predicate::str::contains("2 of 6 pages match"));
}

#[test]
fn json_output() {
    let graph = Graph::new();
    let output = graph
        .cmd()
        .args(["pick", "2", "--journal", "only", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["listed_pages"][0]["originalName"], "Jan 15th, 2024");
    assert_eq!(json["listed_pages"][0]["journal?"], true);
    assert_eq!(json["outline"], "- [[Jan 15th, 2024]]\n");
}

#[test]
fn config_shows_effective_values() {
    let graph = Graph::new();
    global_config(&graph, "count = 4\n");
    graph.write("logseq/randnote.toml", "namespace_mode = \"none\"\n");

    graph
        .cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("count = 4"))
        .stdout(predicate::str::contains("namespace_mode = none"))
        .stdout(predicate::str::contains("sort_pages = true"));
}

#[test]
fn config_gen_prints_template() {
    let graph = Graph::empty();
    graph
        .cmd()
        .args(["config", "gen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("journal_mode"))
        .stdout(predicate::str::contains("append_pages"));
}

#[test]
fn completions_need_no_graph() {
    let temp = TempDir::new().unwrap();
    Command::new(cargo_bin("randnote"))
        .current_dir(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("randnote"));
}
