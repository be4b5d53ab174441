//! load-versions — gather project descriptors into one site data file.
//!
//! Every `*.properties` file in a directory contributes one record
//! (`group`, `name`, `version`) keyed by the file name up to its first dot.
//! The whole catalog is written to `_data/properties.yml`, where the site
//! templates pick it up.
//!
//! The pipeline runs in four phases, once per invocation:
//!
//! 1. **Discover** — list descriptor files, sorted by name
//! 2. **Extract** — pull the three fields out of each file, with placeholders
//! 3. **Aggregate** — insert under the project key; later files win
//! 4. **Serialize** — render the catalog once and overwrite the output

pub mod discover;
pub mod error;
pub mod extract;
pub mod model;
pub mod render;

pub use error::{Error, Result};
pub use model::{Catalog, Descriptor};

use render::Renderer;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Data directory read by the site templating layer.
pub const DATA_DIR: &str = "_data";
/// Output file stem inside [`DATA_DIR`].
pub const OUTPUT_STEM: &str = "properties";
pub const DEFAULT_FORMAT: &str = "yaml";

/// Pipeline configuration for [`run_with`].
#[derive(Debug, Clone)]
pub struct Options {
    /// Directory scanned for descriptors.
    pub dir: PathBuf,
    /// Output file. `None` means `<dir>/_data/properties.<ext>`.
    pub output: Option<PathBuf>,
    pub format: String,
    /// Print the rendered catalog instead of writing a file.
    pub to_stdout: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            output: None,
            format: DEFAULT_FORMAT.to_string(),
            to_stdout: false,
        }
    }
}

impl Options {
    /// Resolve the output path for a renderer.
    pub fn output_path(&self, renderer: &dyn Renderer) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => self
                .dir
                .join(DATA_DIR)
                .join(format!("{}.{}", OUTPUT_STEM, renderer.file_extension())),
        }
    }
}

/// Host entry point: rebuild `_data/properties.yml` from the working
/// directory. Any error must abort the host build.
pub fn run() -> Result<()> {
    run_with(&Options::default())
}

/// Run the full pipeline with explicit options.
pub fn run_with(options: &Options) -> Result<()> {
    let renderer = render::create_renderer(&options.format)?;
    let catalog = build_catalog(&options.dir)?;

    if options.to_stdout {
        print!("{}", renderer.render(&catalog)?);
        return Ok(());
    }

    let out_path = options.output_path(renderer.as_ref());
    write_catalog(&catalog, &out_path, renderer.as_ref())
}

/// Discover, read and aggregate every descriptor in `dir`.
///
/// A descriptor that cannot be read aborts the run rather than leaving a
/// catalog that silently lacks an entry.
pub fn build_catalog(dir: &Path) -> Result<Catalog> {
    let files = discover::descriptor_files(dir)?;
    if files.is_empty() {
        tracing::info!(dir = %dir.display(), "no descriptor files found");
    }

    let mut catalog = Catalog::new();
    let mut sources: HashMap<String, PathBuf> = HashMap::new();

    for path in files {
        let bytes = fs::read(&path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);
        let descriptor = extract::parse_descriptor(&text);

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let key = extract::project_key(&file_name).to_string();
        tracing::debug!(
            file = %path.display(),
            key = %key,
            group = %descriptor.group,
            name = %descriptor.name,
            version = %descriptor.version,
            "read descriptor"
        );

        if catalog.insert(key.clone(), descriptor).is_some() {
            if let Some(previous) = sources.get(&key) {
                tracing::warn!(
                    key = %key,
                    replaced = %previous.display(),
                    by = %path.display(),
                    "duplicate project key, later file wins"
                );
            }
        }
        sources.insert(key, path);
    }

    Ok(catalog)
}

/// Render `catalog` and overwrite `path` with it.
///
/// The parent directory must already exist.
pub fn write_catalog(catalog: &Catalog, path: &Path, renderer: &dyn Renderer) -> Result<()> {
    let output = renderer.render(catalog)?;
    fs::write(path, output).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), entries = catalog.len(), "wrote catalog");
    Ok(())
}
