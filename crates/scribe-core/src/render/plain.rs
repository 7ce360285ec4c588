//! Human-readable nested dump
//!
//! Text passes through untouched. Collections print a labelled block with one
//! `[key] => value` line per entry, each nesting level indented eight columns
//! further than its parent:
//!
//! ```text
//! Map
//! (
//!     [id] => 7
//!     [tags] => Array
//!         (
//!             [0] => a
//!         )
//!
//! )
//! ```

use std::fmt::Write;

use super::node::Node;

/// Dump a value for reading, not for parsing back
pub fn dump(node: &Node) -> String {
    if let Node::Str(text) = node {
        return text.clone();
    }

    let mut out = String::new();
    write_node(&mut out, node, 0);
    out.truncate(out.trim_end_matches('\n').len());
    out
}

fn write_node(out: &mut String, node: &Node, indent: usize) {
    match node {
        Node::Seq(items) => write_block(
            out,
            "Array",
            items.iter().enumerate().map(|(i, item)| (i.to_string(), item)),
            indent,
        ),
        Node::Map(entries) => write_block(
            out,
            "Map",
            entries.iter().map(|(key, item)| (key.inline_text(), item)),
            indent,
        ),
        scalar => out.push_str(&scalar.inline_text()),
    }
}

fn write_block<'a>(
    out: &mut String,
    label: &str,
    entries: impl Iterator<Item = (String, &'a Node)>,
    indent: usize,
) {
    let pad = " ".repeat(indent);
    let _ = writeln!(out, "{}", label);
    let _ = writeln!(out, "{}(", pad);
    for (key, item) in entries {
        let _ = write!(out, "{}    [{}] => ", pad, key);
        write_node(out, item, indent + 8);
        out.push('\n');
    }
    let _ = writeln!(out, "{})", pad);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::node::to_node;
    use serde_json::json;

    fn dump_json(value: serde_json::Value) -> String {
        dump(&to_node(&value).unwrap())
    }

    #[test]
    fn test_text_is_unchanged() {
        assert_eq!(dump_json(json!("created #42")), "created #42");
        assert_eq!(dump_json(json!("")), "");
    }

    #[test]
    fn test_scalars() {
        assert_eq!(dump_json(json!(7)), "7");
        assert_eq!(dump_json(json!(1.5)), "1.5");
        assert_eq!(dump_json(json!(true)), "true");
        assert_eq!(dump_json(json!(null)), "null");
    }

    #[test]
    fn test_non_finite_and_wide_scalars() {
        assert_eq!(dump(&Node::Float(f64::NAN)), "NAN");
        assert_eq!(dump(&Node::Float(f64::NEG_INFINITY)), "-INF");
        assert_eq!(dump(&Node::UInt(u128::MAX)), u128::MAX.to_string());
    }

    #[test]
    fn test_nested_dump() {
        let value = json!({"id": 7, "tags": ["a", "b"]});
        let expected = "Map\n(\n    [id] => 7\n    [tags] => Array\n        (\n            [0] => a\n            [1] => b\n        )\n\n)";
        assert_eq!(dump_json(value), expected);
    }

    #[test]
    fn test_compound_key_stays_on_one_line() {
        let node = Node::Map(vec![(
            Node::Seq(vec![Node::Int(1), Node::Int(2)]),
            Node::Str("pair".into()),
        )]);
        assert_eq!(dump(&node), "Map\n(\n    [[1, 2]] => pair\n)");
    }

    #[test]
    fn test_empty_collections() {
        assert_eq!(dump_json(json!([])), "Array\n(\n)");
        assert_eq!(dump_json(json!({})), "Map\n(\n)");
    }
}
