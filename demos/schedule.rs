//! Example: Navigating a JSON conference schedule
//!
//! This example parses a JSON document into a raw value, wraps it with
//! `build` and walks it by field name.
//!
//! Run with: cargo run --example schedule -- [path_to_json_file]
//!
//! Without a path a small built-in schedule is used.

use std::env;
use std::fs;

use frozen_view::{Node, RawValue, build};

const SAMPLE: &str = r#"{
  "Schedule": {
    "conferences": [{"serial": 115, "name": "PyCon"}],
    "events": [
      {"serial": 34505, "name": "Why Schools Don't Use Open Source to Teach Programming",
       "event_type": "40-minute conference session", "speakers": [157509]},
      {"serial": 33451, "name": "Migrating to the Web Using Dart and Polymer",
       "event_type": "40-minute conference session", "speakers": [146344]}
    ],
    "speakers": [
      {"serial": 157509, "name": "Robert Lefkowitz", "position": "CTO"},
      {"serial": 146344, "name": "Faisal Abid", "position": "Engineer"}
    ]
  }
}"#;

/// Pretty-print the shape of a node recursively
fn dump(node: &Node, indent: usize) -> String {
    let pad = "  ".repeat(indent);
    match node {
        Node::Scalar(scalar) => format!("{pad}{scalar:?}"),
        Node::Sequence(items) => {
            let mut out = format!("{pad}Sequence[{}] {{\n", items.len());
            for item in items {
                out.push_str(&dump(item, indent + 1));
                out.push('\n');
            }
            out.push_str(&format!("{pad}}}"));
            out
        }
        Node::View(view) => {
            let mut out = format!("{pad}View {{\n");
            for (name, field) in view.fields() {
                let nested = dump(&field, indent + 1);
                out.push_str(&format!("{pad}  {name:?}: {}\n", nested.trim_start()));
            }
            out.push_str(&format!("{pad}}}"));
            out
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let text = match env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => SAMPLE.to_string(),
    };

    let raw: RawValue = serde_json::from_str(&text)?;
    let feed = build(&raw);

    let schedule = feed.get("Schedule")?;
    let names: Vec<&str> = schedule.as_view().map(|v| v.field_names().collect()).unwrap_or_default();
    println!("Schedule fields: {names:?}");

    for key in &names {
        let len = schedule.get(*key)?.as_sequence().map_or(0, <[_]>::len);
        println!("{len:>5} {key}");
    }

    let speakers = schedule.get("speakers")?;
    if let Some(last) = speakers.as_sequence().and_then(<[_]>::last) {
        println!(
            "Last speaker: {} ({})",
            last.get("name")?.as_str().unwrap_or("?"),
            last.get("position")?.as_str().unwrap_or("?"),
        );
    }

    match schedule.get("venue") {
        Ok(node) => println!("venue: {node:?}"),
        Err(e) => println!("venue: {e}"),
    }

    println!();
    println!("{}", dump(&schedule.get("conferences")?, 0));
    Ok(())
}
