//! Trace labels - who wrote a record
//!
//! A label is either a fixed module name or the source location of the
//! logging call. Public entry points are `#[track_caller]`, so the location
//! is the caller's line, not one inside this crate.

use std::fmt;
use std::panic::Location;

/// Origin attached to each record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceLabel {
    /// Explicitly configured module name
    Module(String),
    /// Source location of the logging call
    Caller { file: String, line: u32 },
    /// Neither a module nor a location is known
    Unknown,
}

impl TraceLabel {
    /// Module name if it is non-empty, then the caller location, then unknown
    pub fn resolve(module: Option<&str>, caller: Option<&Location<'_>>) -> Self {
        match (module.filter(|m| !m.trim().is_empty()), caller) {
            (Some(module), _) => TraceLabel::Module(module.to_string()),
            (None, Some(location)) => TraceLabel::from(location),
            (None, None) => TraceLabel::Unknown,
        }
    }

    /// Label for the code calling this function
    #[track_caller]
    pub fn here() -> Self {
        TraceLabel::from(Location::caller())
    }

    /// Parse the textual form produced by `Display`
    ///
    /// Empty text and `unknown` give [`TraceLabel::Unknown`]. `file:line` with a
    /// decimal line number gives [`TraceLabel::Caller`]; anything else is kept
    /// as a module name, so `app::orders` stays a module.
    pub fn parse(text: &str) -> Self {
        match text.trim() {
            "" | "unknown" => TraceLabel::Unknown,
            other => Self::parse_location(other)
                .unwrap_or_else(|| TraceLabel::Module(other.to_string())),
        }
    }

    fn parse_location(text: &str) -> Option<Self> {
        let (file, line) = text.rsplit_once(':')?;
        if file.is_empty() || file.ends_with(':') || !line.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let line = line.parse::<u32>().ok()?;
        Some(TraceLabel::Caller {
            file: file.to_string(),
            line,
        })
    }
}

impl From<&Location<'_>> for TraceLabel {
    fn from(location: &Location<'_>) -> Self {
        TraceLabel::Caller {
            file: location.file().to_string(),
            line: location.line(),
        }
    }
}

impl fmt::Display for TraceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceLabel::Module(name) => f.write_str(name),
            TraceLabel::Caller { file, line } => write!(f, "{}:{}", file, line),
            TraceLabel::Unknown => f.write_str("unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_wins() {
        let label = TraceLabel::resolve(Some("OrderModule"), Some(Location::caller()));
        assert_eq!(label.to_string(), "OrderModule");
    }

    #[test]
    fn test_blank_module_falls_back_to_caller() {
        let location = Location::caller();
        let label = TraceLabel::resolve(Some("  "), Some(location));
        assert_eq!(label.to_string(), format!("{}:{}", location.file(), location.line()));
    }

    #[test]
    fn test_unknown_without_information() {
        assert_eq!(TraceLabel::resolve(None, None), TraceLabel::Unknown);
        assert_eq!(TraceLabel::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_here_points_at_this_file() {
        let label = TraceLabel::here();
        assert!(label.to_string().contains("trace.rs:"));
    }

    #[test]
    fn test_parse() {
        assert_eq!(TraceLabel::parse(""), TraceLabel::Unknown);
        assert_eq!(TraceLabel::parse("unknown"), TraceLabel::Unknown);
        assert_eq!(TraceLabel::parse("Billing"), TraceLabel::Module("Billing".into()));
    }

    #[test]
    fn test_parse_caller_location() {
        assert_eq!(
            TraceLabel::parse("src/orders.rs:42"),
            TraceLabel::Caller { file: "src/orders.rs".into(), line: 42 }
        );
        assert_eq!(
            TraceLabel::parse(r"C:\app\main.rs:7"),
            TraceLabel::Caller { file: r"C:\app\main.rs".into(), line: 7 }
        );
    }

    #[test]
    fn test_parse_display_roundtrip_for_here() {
        let label = TraceLabel::here();
        assert_eq!(TraceLabel::parse(&label.to_string()), label);
    }

    #[test]
    fn test_parse_keeps_paths_and_odd_suffixes_as_modules() {
        for text in ["app::orders", "orders:", ":12", "orders:12a", "orders:+3", "a::7"] {
            assert_eq!(TraceLabel::parse(text), TraceLabel::Module(text.into()), "{}", text);
        }
        assert_eq!(
            TraceLabel::parse("orders:99999999999"),
            TraceLabel::Module("orders:99999999999".into())
        );
    }
}
