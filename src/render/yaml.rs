//! YAML renderer — the data file format read by the site templates.

use crate::error::{Error, Result};
use crate::model::Catalog;
use crate::render::Renderer;

pub struct YamlRenderer;

impl Renderer for YamlRenderer {
    fn render(&self, catalog: &Catalog) -> Result<String> {
        serde_yaml::to_string(catalog).map_err(|e| Error::Serialize {
            format: "yaml",
            message: e.to_string(),
        })
    }

    fn file_extension(&self) -> &str {
        "yml"
    }
}
