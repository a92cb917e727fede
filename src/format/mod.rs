use serde::Serialize;
use serde_json::Value;

use crate::options::FormatOptions;
use crate::parse::wrap::split_callback;

/// Pretty-print raw text at the configured indent via a serde_json
/// parse/serialize round trip. Order of attempts mirrors the display flow:
/// plain JSON, then the callback-unwrapped payload with its wrapper
/// re-attached, then the raw text unchanged. Never fails.
pub fn pretty(raw: &str, options: &FormatOptions) -> String {
    if let Some(formatted) = reindent(raw, options) {
        return formatted;
    }
    if let Some(parts) = split_callback(raw) {
        if let Some(formatted) = reindent(parts.inner, options) {
            let prefix = parts.prefix.trim();
            let suffix = parts.suffix.trim();
            let mut out = String::with_capacity(prefix.len() + formatted.len() + suffix.len());
            out.push_str(prefix);
            out.push_str(&formatted);
            out.push_str(suffix);
            return out;
        }
    }
    raw.to_string()
}

fn reindent(raw: &str, options: &FormatOptions) -> Option<String> {
    let value: Value = serde_json::from_str(raw).ok()?;
    match options.indent.width() {
        2 => serde_json::to_string_pretty(&value).ok(),
        width => {
            let indent = vec![b' '; width];
            let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
            let mut out = Vec::new();
            let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
            value.serialize(&mut serializer).ok()?;
            String::from_utf8(out).ok()
        }
    }
}
