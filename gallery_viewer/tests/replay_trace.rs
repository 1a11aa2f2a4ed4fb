//! Drives the viewer binary over the sample gallery data and checks the
//! emitted state trace step by step.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use anyhow::{Context, Result};
use serde::Deserialize;
use tempfile::tempdir;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Trace {
    grid_size: i32,
    start: TraceUser,
    steps: Vec<TraceStep>,
}

#[derive(Debug, Deserialize)]
struct TraceUser {
    position: TracePosition,
    facing: String,
}

#[derive(Debug, Deserialize)]
struct TracePosition {
    x: i32,
    y: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TraceStep {
    action: String,
    user: TraceUser,
    view: TraceView,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TraceView {
    faced_instance_id: Option<String>,
    transform: TraceTransform,
    visible: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TraceTransform {
    rotation_degrees: f32,
    scale: f32,
    anchor: String,
}

#[test]
fn scripted_walk_matches_the_sample_gallery() -> Result<()> {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir
        .parent()
        .expect("workspace root should exist")
        .to_path_buf();

    let layout = workspace_root.join("data").join("layout.json");
    let manifest = workspace_root.join("data").join("manifest.json");
    assert!(layout.is_file(), "expected layout at {}", layout.display());
    assert!(
        manifest.is_file(),
        "expected manifest at {}",
        manifest.display()
    );

    let temp_dir = tempdir().context("creating temp dir for the trace")?;
    let trace_path = temp_dir.path().join("trace.json");

    // From the default start at (10, 11) facing up: the free-standing wall
    // south of (10, 10) blocks the first step, then the walk rounds the
    // corner and ends facing the bottom-wall piece at (9, 11).
    let status = Command::new(env!("CARGO_BIN_EXE_gallery_viewer"))
        .args([
            "--layout",
            layout.to_str().context("layout path is not UTF-8")?,
            "--manifest",
            manifest.to_str().context("manifest path is not UTF-8")?,
            "--script",
            "f l f r f r r",
            "--trace-json",
            trace_path.to_str().context("trace path is not UTF-8")?,
        ])
        .status()
        .context("executing gallery_viewer")?;
    assert!(status.success(), "gallery_viewer exited with {status:?}");

    let payload = fs::read_to_string(&trace_path).context("reading the emitted trace")?;
    let trace: Trace = serde_json::from_str(&payload).context("parsing the emitted trace")?;

    assert_eq!(trace.grid_size, 11);
    assert_eq!((trace.start.position.x, trace.start.position.y), (10, 11));
    assert_eq!(trace.start.facing, "up");
    assert_eq!(trace.steps.len(), 7);

    // Step 1: blocked by the wall segment, position unchanged.
    let blocked = &trace.steps[0];
    assert_eq!(blocked.action, "moveForward");
    assert_eq!((blocked.user.position.x, blocked.user.position.y), (10, 11));
    assert!(!blocked.view.visible);

    // Steps 2-3: turn left and slide along the bottom row.
    assert_eq!(trace.steps[1].user.facing, "left");
    assert_eq!(
        (trace.steps[2].user.position.x, trace.steps[2].user.position.y),
        (9, 11)
    );

    // Step 5 ends one row up; nothing in view mid-turn.
    assert_eq!(
        (trace.steps[4].user.position.x, trace.steps[4].user.position.y),
        (9, 10)
    );
    assert!(!trace.steps[5].view.visible);

    // Final turn faces the piece head-on.
    let last = trace.steps.last().expect("trace should have steps");
    assert_eq!(last.user.facing, "down");
    assert_eq!(
        last.view.faced_instance_id.as_deref(),
        Some("MERIDIANS_XII-9-11")
    );
    assert!(last.view.visible);
    assert_eq!(last.view.transform.rotation_degrees, 0.0);
    assert_eq!(last.view.transform.scale, 1.0);
    assert_eq!(last.view.transform.anchor, "center-center");

    Ok(())
}

#[test]
fn headless_run_prints_the_map_and_info_lines() -> Result<()> {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir
        .parent()
        .expect("workspace root should exist")
        .to_path_buf();

    let output = Command::new(env!("CARGO_BIN_EXE_gallery_viewer"))
        .args([
            "--layout",
            workspace_root.join("data/layout.json").to_str().unwrap(),
            "--manifest",
            workspace_root.join("data/manifest.json").to_str().unwrap(),
            "--headless",
        ])
        .output()
        .context("executing gallery_viewer headless")?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).context("viewer output is not UTF-8")?;
    assert!(stdout.contains("artwork placements"));
    assert!(stdout.contains("User: (10, 11)"));
    assert!(stdout.contains('^'), "map should show the user arrow");

    Ok(())
}
