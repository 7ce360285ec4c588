//! Bracketed re-layout of exported text
//!
//! Works line by line on the output of [`super::export::export`]:
//!
//! 1. every line's leading indentation is doubled;
//! 2. a line holding only `array (` is dropped;
//! 3. a trailing `)` or `),` becomes `]` or `],`;
//! 4. a trailing `key => ` becomes `key => [`;
//! 5. the result is opened with `[` and joined with the platform line ending,
//!    skipping empty lines.
//!
//! The closing `]` of the outer block is the rewritten top-level `)`.

use crate::LINE_ENDING;

const OPEN_MARKER: &str = "array (";

/// Reshape exported text into indented `[ ... ]` blocks
///
/// Exported scalars carry no collection syntax and are returned as-is.
pub fn prettify(exported: &str) -> String {
    if !exported.starts_with(OPEN_MARKER) {
        return exported.to_string();
    }

    let mut lines = vec!["[".to_string()];
    lines.extend(
        exported
            .lines()
            .filter_map(|line| rewrite_line(&double_indent(line)))
            .filter(|line| !line.is_empty()),
    );
    lines.join(LINE_ENDING)
}

fn double_indent(line: &str) -> String {
    let body = line.trim_start_matches(' ');
    let indent = &line[..line.len() - body.len()];
    format!("{}{}{}", indent, indent, body)
}

fn rewrite_line(line: &str) -> Option<String> {
    if line.trim_start() == OPEN_MARKER {
        return None;
    }
    if let Some(head) = line.strip_suffix("),") {
        return Some(format!("{}],", head));
    }
    if let Some(head) = line.strip_suffix(')') {
        return Some(format!("{}]", head));
    }
    if line.ends_with(" => ") {
        return Some(format!("{}[", line));
    }
    Some(line.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::export::export;
    use crate::render::node::to_node;
    use serde_json::json;

    fn pretty(value: serde_json::Value) -> String {
        prettify(&export(&to_node(&value).unwrap()))
    }

    /// Walk the output counting brackets outside quoted strings
    fn assert_balanced(text: &str) {
        let mut depth: i64 = 0;
        let mut in_string = false;
        let mut escaped = false;
        for c in text.chars() {
            if in_string {
                match c {
                    _ if escaped => escaped = false,
                    '\\' => escaped = true,
                    '\'' => in_string = false,
                    _ => {}
                }
                continue;
            }
            match c {
                '\'' => in_string = true,
                '[' => depth += 1,
                ']' => {
                    depth -= 1;
                    assert!(depth >= 0, "depth went negative in:\n{}", text);
                }
                _ => {}
            }
        }
        assert_eq!(depth, 0, "unbalanced brackets in:\n{}", text);
    }

    #[test]
    fn test_nested_mapping() {
        let out = pretty(json!({"id": 7, "tags": ["a", "b"]}));
        let expected = [
            "[",
            "    'id' => 7,",
            "    'tags' => [",
            "        0 => 'a',",
            "        1 => 'b',",
            "    ],",
            "]",
        ]
        .join(LINE_ENDING);
        assert_eq!(out, expected);
        assert_balanced(&out);
    }

    #[test]
    fn test_scalar_passes_through() {
        assert_eq!(pretty(json!(42)), "42");
        assert_eq!(pretty(json!("x")), "'x'");
        assert_eq!(pretty(json!(null)), "NULL");
    }

    #[test]
    fn test_empty_collections() {
        assert_eq!(pretty(json!([])), ["[", "]"].join(LINE_ENDING));
        let out = pretty(json!({"k": {}}));
        assert_eq!(out, ["[", "    'k' => [", "    ],", "]"].join(LINE_ENDING));
    }

    #[test]
    fn test_brackets_always_balanced() {
        let samples = [
            json!([]),
            json!([1, [2, [3, [4]]]]),
            json!({"a": {"b": {"c": []}}, "d": [{}, {"e": null}]}),
            json!({"tricky": "ends with )", "also": "x => ", "bracket": "]["}),
            json!(["(", ")", "),", "array ("]),
        ];
        for sample in samples {
            assert_balanced(&pretty(sample));
        }
    }

    #[test]
    fn test_strings_that_look_like_syntax_are_untouched() {
        let out = pretty(json!({"s": "array ("}));
        assert!(out.contains("'s' => 'array (',"));
    }
}
