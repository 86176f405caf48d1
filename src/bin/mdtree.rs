//! Command-line interface for markdown-tree.
//! Parses a document and prints either the element tree or the plain-text
//! projection.
//!
//! Usage:
//!   mdtree tree `<path>` [--format `<format>`]  - Print the parsed element tree
//!   mdtree clear `<path>`                     - Print the text with markup stripped

use clap::{Arg, Command};

use markdown_tree::markdown::{clear, parse, Element};

fn main() {
    let matches = Command::new("mdtree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting markdown documents as typed element trees")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tree")
                .about("Parse a document and print its element tree")
                .arg(
                    Arg::new("path")
                        .help("Path to the document to parse")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('json' or 'summary')")
                        .default_value("json"),
                ),
        )
        .subcommand(
            Command::new("clear")
                .about("Print the document with all markup stripped")
                .arg(
                    Arg::new("path")
                        .help("Path to the document to strip")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("tree", tree_matches)) => {
            let path = tree_matches.get_one::<String>("path").unwrap();
            let format = tree_matches.get_one::<String>("format").unwrap();
            handle_tree_command(path, format);
        }
        Some(("clear", clear_matches)) => {
            let path = clear_matches.get_one::<String>("path").unwrap();
            handle_clear_command(path);
        }
        _ => unreachable!(),
    }
}

/// Handle the tree command
fn handle_tree_command(path: &str, format: &str) {
    let source = read_source(path);
    let document = parse(&source);

    match format {
        "json" => {
            let output = serde_json::to_string_pretty(&document).unwrap_or_else(|e| {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            });
            println!("{}", output);
        }
        "summary" => {
            let mut out = String::new();
            for element in &document.elements {
                summarize(element, 0, &mut out);
            }
            print!("{}", out);
        }
        other => {
            eprintln!("Unknown format: {}", other);
            std::process::exit(1);
        }
    }
}

/// Handle the clear command
fn handle_clear_command(path: &str) {
    let source = read_source(path);
    println!("{}", clear(&source));
}

fn read_source(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}

/// One line per element, indented by nesting depth.
fn summarize(element: &Element, depth: usize, out: &mut String) {
    let preview: String = element.text().chars().take(48).collect();
    out.push_str(&format!(
        "{}{} {:?}\n",
        "  ".repeat(depth),
        element.kind(),
        preview
    ));
    for child in element.children() {
        summarize(child, depth + 1, out);
    }
}
