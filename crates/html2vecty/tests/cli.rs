//! Integration tests for the html2vecty binary.

use pretty_assertions::assert_eq;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn html2vecty(dir: &Path, args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_html2vecty"))
        .args(args)
        .current_dir(dir)
        .env_remove("HTML2VECTY_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn html2vecty");

    let mut pipe = child.stdin.take().expect("stdin is piped");
    if let Some(input) = stdin {
        pipe.write_all(input.as_bytes()).expect("failed to write stdin");
    }
    drop(pipe);

    child.wait_with_output().expect("failed to wait for html2vecty")
}

#[test]
fn test_file_input_uses_default_names() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("todo-item.html"),
        r#"<li @click="Toggle">Buy milk</li>"#,
    )
    .unwrap();

    let output = html2vecty(dir.path(), &["todo-item.html"], None);
    assert!(output.status.success(), "{output:?}");

    let generated = fs::read_to_string(dir.path().join("todo-item_gen.go")).unwrap();
    assert!(generated.starts_with("package main\n"));
    assert!(generated.contains("func NewTodoItem(d map[string]func(*vecty.Event)) *TodoItem {"));
    assert!(generated.contains("\t\t\tevent.Click(c.Toggle),\n"));
    assert!(generated.contains("func (c *TodoItem) Toggle(event *vecty.Event) {"));
}

#[test]
fn test_stdin_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let output = html2vecty(
        dir.path(),
        &["--stdout", "-p", "views", "-c", "Banner", "-"],
        Some("<h1>Hello</h1>"),
    );
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("package views\n"));
    assert!(stdout.contains("func (c *Banner) Render() vecty.ComponentOrHTML {\n\treturn elem.Heading1(\n\t\tvecty.Text(\"Hello\"),\n\t)\n}\n"));
    assert!(!dir.path().join("generated.go").exists());
}

#[test]
fn test_stdin_default_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = html2vecty(dir.path(), &[], Some("<p>x</p>"));
    assert!(output.status.success(), "{output:?}");

    let generated = fs::read_to_string(dir.path().join("generated.go")).unwrap();
    assert!(generated.contains("type Component struct {"));
}

#[test]
fn test_explicit_output_path() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("page.html"), "<main></main>").unwrap();

    let output = html2vecty(dir.path(), &["-o", "out.go", "page.html"], None);
    assert!(output.status.success(), "{output:?}");
    assert!(dir.path().join("out.go").exists());
    assert!(!dir.path().join("page_gen.go").exists());
}

#[test]
fn test_unknown_event_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bad.html"), r#"<div @hover="X"></div>"#).unwrap();

    let output = html2vecty(dir.path(), &["bad.html"], None);
    assert!(!output.status.success());
    assert!(!dir.path().join("bad_gen.go").exists());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("failed to convert bad.html"), "{stderr}");
    assert!(stderr.contains("unknown event: hover"), "{stderr}");
}

#[test]
fn test_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = html2vecty(dir.path(), &["nope.html"], None);
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("failed to read nope.html"), "{stderr}");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
