use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use gallery_engine::{GalleryLayout, NavAction, Position, User, ViewState, WalkSession, join_instances};
use gallery_formats::{load_layout, load_manifest};
use serde::Serialize;

mod cli;
mod map;

use cli::Args;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TraceStep {
    action: &'static str,
    user: User,
    view: ViewState,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TraceFile<'a> {
    grid_size: i32,
    start: User,
    steps: &'a [TraceStep],
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let cells = load_layout(&args.layout)?;
    let manifest = load_manifest(&args.manifest)?;
    let instances = join_instances(&cells, &manifest);
    if instances.is_empty() {
        log::warn!(
            "no artwork placements resolved from {}",
            args.layout.display()
        );
    }
    let layout = GalleryLayout::from_records(args.grid_size, cells)?;

    let start = Position::new(args.start_x, args.start_y);
    ensure!(
        layout.contains(start),
        "start position {start} is outside the {0}x{0} grid",
        args.grid_size
    );

    println!(
        "Loaded {} cell records and {} artwork placements from {}",
        layout.cell_count(),
        instances.len(),
        args.layout.display()
    );

    let mut session = WalkSession::new(layout, instances, User::new(start, args.facing));

    if let Some(script) = args.script.as_deref() {
        run_script(&mut session, script, args.trace_json.as_deref())?;
    } else if args.headless {
        print_map(&session);
        print_info(&session);
    } else {
        run_interactive(&mut session)?;
    }

    Ok(())
}

/// Split a script into actions. Tokens are action words or compact
/// single-letter runs ("fflr"); unknown words are dropped with a warning.
fn parse_script(text: &str) -> Vec<NavAction> {
    let mut actions = Vec::new();
    for token in text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
    {
        if let Some(action) = NavAction::parse(token) {
            actions.push(action);
            continue;
        }
        let compact: Option<Vec<NavAction>> = token
            .chars()
            .map(|c| NavAction::parse(&c.to_string()))
            .collect();
        match compact {
            Some(batch) => actions.extend(batch),
            None => log::warn!("ignoring unknown action word '{token}'"),
        }
    }
    actions
}

fn run_script(session: &mut WalkSession, script: &str, trace_json: Option<&Path>) -> Result<()> {
    let start = *session.user();
    let actions = parse_script(script);
    println!("Replaying {} actions", actions.len());

    let mut steps = Vec::with_capacity(actions.len());
    for action in actions {
        session.apply(action);
        let user = *session.user();
        let view = session.view().clone();
        match view.faced_instance_id.as_deref() {
            Some(id) => println!(
                "  {:<12} -> {} facing {} | viewing {} ({:+.1} deg, scale {:.2}, {})",
                action.label(),
                user.position,
                user.facing,
                id,
                view.transform.rotation_degrees,
                view.transform.scale,
                view.transform.anchor.label()
            ),
            None => println!(
                "  {:<12} -> {} facing {}",
                action.label(),
                user.position,
                user.facing
            ),
        }
        steps.push(TraceStep {
            action: action.label(),
            user,
            view,
        });
    }

    for line in session.describe() {
        println!("{line}");
    }

    if let Some(path) = trace_json {
        let trace = TraceFile {
            grid_size: session.layout().grid_size(),
            start,
            steps: &steps,
        };
        let payload =
            serde_json::to_string_pretty(&trace).context("serializing state trace")?;
        fs::write(path, payload)
            .with_context(|| format!("writing state trace to {}", path.display()))?;
        println!("State trace written to {}", path.display());
    }

    Ok(())
}

fn run_interactive(session: &mut WalkSession) -> Result<()> {
    print_map(session);
    print_info(session);
    println!("Commands: f/b move, l/r rotate, u undo, m map, i info, q quit");

    let stdin = io::stdin();
    let mut out = io::stdout();
    loop {
        print!("> ");
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        match word {
            "q" | "quit" => break,
            "m" | "map" => print_map(session),
            "i" | "info" => print_info(session),
            "u" | "undo" => {
                if session.undo() {
                    print_status(session);
                } else {
                    println!("Nothing to undo.");
                }
            }
            other => match NavAction::parse(other) {
                Some(action) => {
                    session.apply(action);
                    print_status(session);
                }
                None => println!("Unknown command '{other}' (f/b/l/r, u, m, i, q)"),
            },
        }
    }

    Ok(())
}

fn print_map(session: &WalkSession) {
    for line in map::render_map(session.layout(), session.user()) {
        println!("{line}");
    }
}

fn print_info(session: &WalkSession) {
    for line in session.describe() {
        println!("{line}");
    }
}

fn print_status(session: &WalkSession) {
    let user = session.user();
    match session.faced_instance() {
        Some(inst) => {
            let transform = &session.view().transform;
            println!(
                "{} facing {} | viewing {} ({:+.1} deg, scale {:.2}, anchor {})",
                user.position,
                user.facing,
                inst.name,
                transform.rotation_degrees,
                transform.scale,
                transform.anchor.label()
            );
        }
        None => println!("{} facing {}", user.position, user.facing),
    }
}
