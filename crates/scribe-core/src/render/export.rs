//! Literal export of a value
//!
//! Collections are written as `array ( ... )` with two columns of indentation
//! per level and a trailing comma after every entry. Sequence keys are their
//! index, string keys are quoted, so `0 => 1` and `'0' => 1` stay
//! distinguishable. A collection value starts on the line after its key.
//! Non-finite floats are written `NAN`, `INF` and `-INF`.

use std::fmt::Write;

use super::node::Node;

/// Export a value as a structural literal
pub fn export(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out
}

/// Single-quote a string, escaping so the literal never spans lines
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{{{:04x}}}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

fn scalar(node: &Node) -> String {
    match node {
        Node::Null => "NULL".to_string(),
        Node::Str(text) => quote(text),
        other => other.inline_text(),
    }
}

fn key_text(key: &Node) -> String {
    match key {
        Node::Seq(_) | Node::Map(_) => quote(&key.inline_text()),
        other => scalar(other),
    }
}

fn write_node(out: &mut String, node: &Node, indent: usize) {
    match node {
        Node::Seq(items) => write_array(
            out,
            items.iter().enumerate().map(|(i, item)| (i.to_string(), item)),
            indent,
        ),
        Node::Map(entries) => write_array(
            out,
            entries.iter().map(|(key, item)| (key_text(key), item)),
            indent,
        ),
        other => out.push_str(&scalar(other)),
    }
}

fn write_array<'a>(
    out: &mut String,
    entries: impl Iterator<Item = (String, &'a Node)>,
    indent: usize,
) {
    let pad = " ".repeat(indent);
    out.push_str("array (\n");
    for (key, item) in entries {
        let _ = write!(out, "{}  {} => ", pad, key);
        if item.is_collection() {
            let _ = write!(out, "\n{}  ", pad);
        }
        write_node(out, item, indent + 2);
        out.push_str(",\n");
    }
    out.push_str(&pad);
    out.push(')');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::node::to_node;
    use serde_json::{json, Value};

    fn export_json(value: Value) -> String {
        export(&to_node(&value).unwrap())
    }

    #[test]
    fn test_scalars() {
        assert_eq!(export_json(json!(7)), "7");
        assert_eq!(export_json(json!(-2.25)), "-2.25");
        assert_eq!(export_json(json!(false)), "false");
        assert_eq!(export_json(json!(null)), "NULL");
        assert_eq!(export_json(json!("hi")), "'hi'");
    }

    #[test]
    fn test_whole_floats_keep_their_point() {
        assert_eq!(export(&Node::Float(3.0)), "3.0");
        assert_eq!(export(&Node::Int(3)), "3");
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("it's"), "'it\\'s'");
        assert_eq!(quote("a\\b"), "'a\\\\b'");
        assert_eq!(quote("two\nlines"), "'two\\nlines'");
        assert_eq!(quote("bell\u{7}"), "'bell\\u{0007}'");
    }

    #[test]
    fn test_nested_export() {
        let value = json!({"id": 7, "tags": ["a", "b"]});
        let expected = "array (\n  'id' => 7,\n  'tags' => \n  array (\n    0 => 'a',\n    1 => 'b',\n  ),\n)";
        assert_eq!(export_json(value), expected);
    }

    #[test]
    fn test_types_stay_distinguishable() {
        let out = export_json(json!(["1", 1, true, null]));
        assert!(out.contains("0 => '1',"));
        assert!(out.contains("1 => 1,"));
        assert!(out.contains("2 => true,"));
        assert!(out.contains("3 => NULL,"));
    }

    #[test]
    fn test_integer_keys_are_bare() {
        let node = Node::Map(vec![
            (Node::UInt(5), Node::Str("five".into())),
            (Node::Str("5".into()), Node::Str("text".into())),
        ]);
        let out = export(&node);
        assert!(out.contains("  5 => 'five',"));
        assert!(out.contains("  '5' => 'text',"));
    }

    #[test]
    fn test_key_order_preserved() {
        let value: Value = serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        let out = export_json(value);
        let zeta = out.find("'zeta'").unwrap();
        let alpha = out.find("'alpha'").unwrap();
        let mid = out.find("'mid'").unwrap();
        assert!(zeta < alpha && alpha < mid);
    }

    #[test]
    fn test_empty_array() {
        assert_eq!(export_json(json!([])), "array (\n)");
        assert_eq!(export_json(json!({"k": []})), "array (\n  'k' => \n  array (\n  ),\n)");
    }
}
