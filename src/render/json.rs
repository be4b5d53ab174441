//! JSON renderer — same shape as the YAML data file, for tooling that
//! would rather not pull in a YAML parser.

use crate::error::{Error, Result};
use crate::model::Catalog;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, catalog: &Catalog) -> Result<String> {
        let mut out = serde_json::to_string_pretty(catalog).map_err(|e| Error::Serialize {
            format: "json",
            message: e.to_string(),
        })?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
