use crate::form::{HumanReadableNode, HumanReadableValue, NO_DATA};
use std::fmt::{self, Write};

const INDENT: &str = "  ";

/// Render a flattened submission as indented `label: value` lines.
///
/// Groups print their label followed by their children one level deeper; each
/// repeat occurrence is introduced by a 1-based `[n]` line.
pub fn render_text(nodes: &[HumanReadableNode]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_nodes(&mut out, nodes, 0);
    out
}

fn write_nodes(out: &mut String, nodes: &[HumanReadableNode], depth: usize) -> fmt::Result {
    let pad = INDENT.repeat(depth);
    for node in nodes {
        match &node.value {
            HumanReadableValue::NoData => writeln!(out, "{pad}{}: {NO_DATA}", node.label)?,
            HumanReadableValue::Text(s) => writeln!(out, "{pad}{}: {s}", node.label)?,
            HumanReadableValue::Raw(v) => writeln!(out, "{pad}{}: {v}", node.label)?,
            HumanReadableValue::Group(children) => {
                writeln!(out, "{pad}{}:", node.label)?;
                write_nodes(out, children, depth + 1)?;
            }
            HumanReadableValue::Repeat(occurrences) => {
                writeln!(out, "{pad}{}:", node.label)?;
                for (i, children) in occurrences.iter().enumerate() {
                    writeln!(out, "{pad}{INDENT}[{}]", i + 1)?;
                    write_nodes(out, children, depth + 2)?;
                }
            }
        }
    }
    Ok(())
}
