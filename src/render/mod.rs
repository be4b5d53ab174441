//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod yaml;

use crate::error::{Error, Result};
use crate::model::Catalog;

/// Trait for rendering a Catalog into a specific output format.
pub trait Renderer {
    fn render(&self, catalog: &Catalog) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "yaml" | "yml" => Ok(Box::new(yaml::YamlRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(Error::UnknownFormat(format.to_string())),
    }
}
