//! Field extraction from descriptor text.
//!
//! Only `group`, `name` and `version` are recognized. Each is found by its own
//! line-anchored search; everything else in the file is ignored.

use crate::model::Descriptor;
use regex::Regex;
use std::sync::LazyLock;

static RE_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^group\s*=\s*([^ \t\n]*)\s*$").unwrap());
static RE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^name\s*=\s*([^ \t\n]*)\s*$").unwrap());
static RE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^version\s*=\s*([^ \t\n]*)\s*$").unwrap());

pub const DEFAULT_GROUP: &str = "group";
pub const DEFAULT_NAME: &str = "name";
pub const DEFAULT_VERSION: &str = "version";

/// Derive the project key from a descriptor file name.
/// "sdsai-common.properties" → "sdsai-common", "foo.bar.properties" → "foo"
pub fn project_key(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}

/// Extract the descriptor record from the full text of one file.
pub fn parse_descriptor(text: &str) -> Descriptor {
    Descriptor {
        group: field(text, &RE_GROUP, DEFAULT_GROUP),
        name: field(text, &RE_NAME, DEFAULT_NAME),
        version: field(text, &RE_VERSION, DEFAULT_VERSION),
    }
}

/// First matching line wins. Patterns run per line, so the whitespace
/// around `=` never reaches into the next line.
fn field(text: &str, re: &Regex, default: &str) -> String {
    text.lines()
        .find_map(|line| re.captures(line))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| default.to_string())
}
