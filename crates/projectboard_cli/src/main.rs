//! Interactive board frontend.
//!
//! # Responsibility
//! - Drive one `ProjectBoard` from stdin: submit projects through the input
//!   form and move them by running the drag pipeline.
//! - Print the board by reading the rendered element tree, so what the user
//!   sees is what the views produced.

use log::debug;
use projectboard_core::{
    default_log_level, init_logging, parse_project_status, ProjectBoard, ProjectId,
    ProjectStatus,
};
use std::io::{self, BufRead, Write};

const PROMPT: &str = "board> ";

fn main() {
    bootstrap_logging();

    let board = match ProjectBoard::new() {
        Ok(board) => board,
        Err(err) => {
            eprintln!("failed to build board: {err}");
            std::process::exit(1);
        }
    };

    println!("projectboard {}", projectboard_core::core_version());
    print_help();

    let stdin = io::stdin();
    loop {
        print!("{PROMPT}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("failed to read input: {err}");
                break;
            }
        }

        match dispatch(&board, line.trim()) {
            Flow::Continue => {}
            Flow::Quit => break,
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

fn dispatch(board: &ProjectBoard, line: &str) -> Flow {
    if line.is_empty() {
        return Flow::Continue;
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    debug!("event=command_dispatched module=cli command={command}");
    match command {
        "add" => cmd_add(board, rest),
        "move" => cmd_move(board, rest),
        "show" => print_board(board),
        "help" => print_help(),
        "quit" | "exit" => return Flow::Quit,
        other => println!("unknown command `{other}`; try `help`"),
    }
    Flow::Continue
}

/// `add <title> | <description> | <people>`
fn cmd_add(board: &ProjectBoard, args: &str) {
    let mut parts = args.splitn(3, '|').map(str::trim);
    let title = parts.next().unwrap_or("");
    let description = parts.next().unwrap_or("");
    let people = parts.next().unwrap_or("");

    if board.submit_project(title, description, people) {
        print_board(board);
    } else if let Some(message) = board.document().alerts().last() {
        println!("{message}");
    }
}

/// `move <id-prefix> <active|finished>`
fn cmd_move(board: &ProjectBoard, args: &str) {
    let Some((prefix, status_raw)) = args.split_once(char::is_whitespace) else {
        println!("usage: move <id-prefix> <active|finished>");
        return;
    };

    let status = match parse_project_status(status_raw) {
        Ok(status) => status,
        Err(err) => {
            println!("{err}");
            return;
        }
    };
    let Some(id) = resolve_id(board, prefix.trim()) else {
        return;
    };

    if board.drag_project(id, status) {
        print_board(board);
    } else {
        println!("project {id} is not currently rendered");
    }
}

/// Resolves a unique project id from a prefix of its string form.
fn resolve_id(board: &ProjectBoard, prefix: &str) -> Option<ProjectId> {
    if prefix.is_empty() {
        println!("usage: move <id-prefix> <active|finished>");
        return None;
    }

    let matches: Vec<ProjectId> = board
        .state()
        .snapshot()
        .iter()
        .map(|project| project.id)
        .filter(|id| id.to_string().starts_with(prefix))
        .collect();

    match matches.as_slice() {
        [] => {
            println!("no project id starts with `{prefix}`");
            None
        }
        [id] => Some(*id),
        _ => {
            println!("`{prefix}` is ambiguous; give more characters");
            None
        }
    }
}

/// Prints both lists by walking the rendered element tree.
fn print_board(board: &ProjectBoard) {
    for status in [ProjectStatus::Active, ProjectStatus::Finished] {
        let list = board.list(status);
        let header = list
            .element()
            .find_tag("h2")
            .map(|h| h.text())
            .unwrap_or_default();
        println!("== {header} ==");

        let Some(items) = board.document().node_by_id(&list.list_id()) else {
            continue;
        };
        if items.child_count() == 0 {
            println!("  (empty)");
            continue;
        }
        for item in items.children() {
            let title = item.find_tag("h2").map(|h| h.text()).unwrap_or_default();
            let people = item.find_tag("h3").map(|h| h.text()).unwrap_or_default();
            let description = item.find_tag("p").map(|p| p.text()).unwrap_or_default();
            let id = item.id().unwrap_or_default();
            let short_id = id.get(..8).unwrap_or(&id);
            println!("  [{short_id}] {title} - {people} {description}");
        }
    }
}

fn print_help() {
    println!("commands:");
    println!("  add <title> | <description> | <people>");
    println!("  move <id-prefix> <active|finished>");
    println!("  show");
    println!("  help");
    println!("  quit");
}

fn bootstrap_logging() {
    let level =
        std::env::var("PROJECTBOARD_LOG").unwrap_or_else(|_| default_log_level().to_string());
    let log_dir = std::env::var("PROJECTBOARD_LOG_DIR").unwrap_or_else(|_| {
        std::env::temp_dir()
            .join("projectboard")
            .join("logs")
            .to_string_lossy()
            .into_owned()
    });

    if let Err(err) = init_logging(&level, &log_dir) {
        eprintln!("logging disabled: {err}");
    }
}
