//! Plain-text views printed by the command-line tool.

use std::fmt::Write;

use flow::{FlowGraph, NodeCategory, palette};

/// Mark printed in the matrix for an allowed connection.
const ALLOWED: &str = "yes";
/// Mark printed in the matrix for a rejected connection.
const REJECTED: &str = "-";

/// Table of allowed connections: rows are sources, columns are targets.
pub fn matrix_table() -> String {
    const CORNER: &str = "source \\ target";

    let width = NodeCategory::ALL
        .iter()
        .map(|c| c.as_str().len())
        .chain([CORNER.len()])
        .max()
        .unwrap_or_default();

    let mut header = format!("{CORNER:<width$}");
    for target in NodeCategory::ALL {
        let _ = write!(header, "  {:<width$}", target.as_str());
    }

    let mut out = String::new();
    out.push_str(header.trim_end());
    out.push('\n');

    for source in NodeCategory::ALL {
        let mut row = format!("{:<width$}", source.as_str());
        for target in NodeCategory::ALL {
            let mark = if flow::is_valid_category_pair(source, target) {
                ALLOWED
            } else {
                REJECTED
            };
            let _ = write!(row, "  {mark:<width$}");
        }
        out.push_str(row.trim_end());
        out.push('\n');
    }

    out
}

/// The palette, one section per heading.
pub fn palette_listing() -> String {
    let mut out = String::new();

    for category in NodeCategory::ALL {
        let Some(title) = palette::section_title(category) else {
            continue;
        };

        if !out.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "{title}:");
        for item in palette::section(category) {
            let _ = writeln!(out, "  {:<12} {}", item.kind, item.label);
        }
    }

    out
}

/// Every node and edge of `graph`, in draw order.
pub fn graph_listing(graph: &FlowGraph) -> String {
    let mut out = String::from("Nodes:\n");

    for node in graph.nodes() {
        let _ = writeln!(
            out,
            "  {:<16} {:<15} {:<20} x = {}",
            node.id,
            node.category.as_str(),
            format!("\"{}\"", node.label),
            node.position.x,
        );
    }

    out.push_str("Edges:\n");
    if graph.edges().is_empty() {
        out.push_str("  (none)\n");
    }
    for edge in graph.edges() {
        let _ = writeln!(out, "  {} -> {}", edge.source, edge.target);
    }

    out
}
