//! Value rendering
//!
//! Turns any `Serialize` value into log text according to a [`RenderMode`].
//! Rendering is pure and never fails: a value whose `Serialize` impl reports
//! an error is replaced by a short `<unserializable: ...>` note.

mod mode;
pub mod export;
pub mod node;
pub mod plain;
pub mod pretty;

use serde::Serialize;

pub use mode::RenderMode;
pub use node::{to_node, Node};

/// Render any serializable value
pub fn render<T: Serialize + ?Sized>(value: &T, mode: RenderMode) -> String {
    match to_node(value) {
        Ok(node) => render_value(&node, mode),
        Err(e) => format!("<unserializable: {}>", e),
    }
}

/// Render an already-lowered value
pub fn render_value(node: &Node, mode: RenderMode) -> String {
    match mode {
        RenderMode::Plain => plain::dump(node),
        RenderMode::Exported => export::export(node),
        RenderMode::PrettyExported => pretty::prettify(&export::export(node)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::{Error as _, Serializer};

    const ALL_MODES: [RenderMode; 3] =
        [RenderMode::Plain, RenderMode::Exported, RenderMode::PrettyExported];

    #[derive(Serialize)]
    struct Order {
        id: u32,
        tags: Vec<&'static str>,
    }

    struct Refuses;

    impl Serialize for Refuses {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("handle is closed"))
        }
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(render("created #42", RenderMode::Plain), "created #42");
    }

    #[test]
    fn test_struct_field_order_follows_declaration() {
        let order = Order { id: 7, tags: vec!["a", "b"] };
        let out = render(&order, RenderMode::Exported);
        assert!(out.find("'id'").unwrap() < out.find("'tags'").unwrap());
    }

    #[test]
    fn test_render_is_deterministic() {
        let order = Order { id: 7, tags: vec!["a", "b"] };
        for mode in ALL_MODES {
            assert_eq!(render(&order, mode), render(&order, mode));
        }
    }

    #[test]
    fn test_failing_serialize_falls_back_to_text() {
        for mode in ALL_MODES {
            assert_eq!(render(&Refuses, mode), "<unserializable: handle is closed>");
        }
        let out = render(&vec![Refuses], RenderMode::Plain);
        assert!(out.starts_with("<unserializable:"));
    }

    #[test]
    fn test_nan_in_every_mode() {
        for mode in ALL_MODES {
            assert_eq!(render(&f64::NAN, mode), "NAN");
        }
    }

    #[test]
    fn test_infinity_in_every_mode() {
        let values = vec![f64::INFINITY, f64::NEG_INFINITY];
        assert_eq!(
            render(&values, RenderMode::Plain),
            "Array\n(\n    [0] => INF\n    [1] => -INF\n)"
        );
        assert_eq!(
            render(&values, RenderMode::Exported),
            "array (\n  0 => INF,\n  1 => -INF,\n)"
        );
        let pretty = render(&values, RenderMode::PrettyExported);
        assert!(pretty.contains("0 => INF,"));
        assert!(pretty.contains("1 => -INF,"));
        assert!(!pretty.contains("NULL"));
    }

    #[test]
    fn test_u128_max_in_every_mode() {
        let expected = u128::MAX.to_string();
        for mode in ALL_MODES {
            assert_eq!(render(&u128::MAX, mode), expected);
        }
        let wrapped = render(&vec![u128::MAX, 0], RenderMode::PrettyExported);
        assert!(wrapped.contains(&format!("0 => {},", expected)));
        assert_eq!(render(&i128::MIN, RenderMode::Exported), i128::MIN.to_string());
    }

    #[test]
    fn test_pretty_scenario() {
        let order = Order { id: 7, tags: vec!["a", "b"] };
        let out = render(&order, RenderMode::PrettyExported);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.first(), Some(&"["));
        assert_eq!(lines.last(), Some(&"]"));
        assert!(out.contains("'id' => 7,"));
        assert!(out.contains("'tags' => ["));
        assert!(out.contains("0 => 'a',"));
        assert!(out.contains("1 => 'b',"));
    }
}
