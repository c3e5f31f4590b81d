//! Build descriptor: the one input handed to the external bundler.

mod types;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::validation::{ConfigValidator, FsValidator};

pub use types::{EsTarget, Loader};

/// `[build]` section as written in the project file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BuildSource {
    /// Entry points, in the order they are passed to the bundler
    #[serde(default, alias = "entryPoints")]
    pub entry_points: Vec<PathBuf>,

    /// Output file, overwritten on every build
    #[serde(rename = "outfile", alias = "output_path")]
    pub output_path: PathBuf,

    /// Inline dependencies into the output
    #[serde(default = "default_bundle")]
    pub bundle: bool,

    #[serde(default)]
    pub target: EsTarget,

    /// Extension (with leading dot) to load strategy
    #[serde(default, alias = "loader")]
    pub loaders: IndexMap<String, Loader>,

    #[serde(default)]
    pub minify: bool,

    #[serde(default)]
    pub sourcemap: bool,
}

fn default_bundle() -> bool {
    true
}

impl BuildSource {
    /// Create a source with one entry point and defaults for everything else
    ///
    /// # Example
    ///
    /// ```
    /// use tandem_config::{BuildSource, EsTarget};
    ///
    /// let source = BuildSource::new("src/app.js", "dist/app.js");
    /// assert!(source.bundle);
    /// assert_eq!(source.target, EsTarget::Es2015);
    /// ```
    pub fn new(entry: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            entry_points: vec![entry.into()],
            output_path: output_path.into(),
            bundle: default_bundle(),
            target: EsTarget::default(),
            loaders: IndexMap::new(),
            minify: false,
            sourcemap: false,
        }
    }

    /// Add a loader rule for an extension
    pub fn with_loader(mut self, extension: impl Into<String>, loader: Loader) -> Self {
        self.loaders.insert(extension.into(), loader);
        self
    }
}

/// Validated, immutable build descriptor.
///
/// Only obtainable through [`BuildDescriptor::load`] or
/// [`BuildDescriptor::load_with`], so a consumer never sees a partially
/// validated value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildDescriptor {
    entry_points: Vec<PathBuf>,
    output_path: PathBuf,
    bundle: bool,
    target: EsTarget,
    loaders: IndexMap<String, Loader>,
    minify: bool,
    sourcemap: bool,
}

impl BuildDescriptor {
    /// Validate `source` against the project at `root` and build the descriptor.
    ///
    /// Fails if there are no entry points, if an entry is missing, or if the
    /// parent of the output path cannot be written.
    pub fn load(source: &BuildSource, root: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(source, &FsValidator::new(root))
    }

    /// Same as [`load`](Self::load) with a caller-chosen validation strategy
    pub fn load_with<V>(source: &BuildSource, validator: &V) -> Result<Self>
    where
        V: ConfigValidator<BuildSource> + ?Sized,
    {
        validator.validate(source)?;

        let descriptor = Self {
            entry_points: source.entry_points.clone(),
            output_path: source.output_path.clone(),
            bundle: source.bundle,
            target: source.target,
            loaders: source.loaders.clone(),
            minify: source.minify,
            sourcemap: source.sourcemap,
        };

        info!(
            entries = descriptor.entry_points.len(),
            output = %descriptor.output_path.display(),
            "build descriptor loaded"
        );
        debug!(?descriptor, "build descriptor");

        Ok(descriptor)
    }

    pub fn entry_points(&self) -> &[PathBuf] {
        &self.entry_points
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn bundle(&self) -> bool {
        self.bundle
    }

    pub fn target(&self) -> EsTarget {
        self.target
    }

    pub fn loaders(&self) -> &IndexMap<String, Loader> {
        &self.loaders
    }

    pub fn minify(&self) -> bool {
        self.minify
    }

    pub fn sourcemap(&self) -> bool {
        self.sourcemap
    }

    /// The source this descriptor was built from
    pub fn to_source(&self) -> BuildSource {
        BuildSource {
            entry_points: self.entry_points.clone(),
            output_path: self.output_path.clone(),
            bundle: self.bundle,
            target: self.target,
            loaders: self.loaders.clone(),
            minify: self.minify,
            sourcemap: self.sourcemap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::SchemaValidator;
    use serde_json::json;

    #[test]
    fn source_accepts_bundler_style_keys() {
        let source: BuildSource = serde_json::from_value(json!({
            "entryPoints": ["src/app.js"],
            "outfile": "dist/app.js",
            "target": "es6",
            "loader": { ".html": "text" },
            "minify": true,
            "sourcemap": true
        }))
        .unwrap();

        assert_eq!(source.entry_points, vec![PathBuf::from("src/app.js")]);
        assert_eq!(source.output_path, PathBuf::from("dist/app.js"));
        assert!(source.bundle);
        assert_eq!(source.target, EsTarget::Es2015);
        assert_eq!(source.loaders.get(".html"), Some(&Loader::Text));
    }

    #[test]
    fn source_rejects_unknown_keys() {
        let result = serde_json::from_value::<BuildSource>(json!({
            "entry_points": ["src/app.js"],
            "outfile": "dist/app.js",
            "splitting": true
        }));
        assert!(result.is_err());
    }

    #[test]
    fn loaders_keep_declaration_order() {
        let source = BuildSource::new("a.js", "out.js")
            .with_loader(".svg", Loader::DataUrl)
            .with_loader(".html", Loader::Text)
            .with_loader(".png", Loader::File);

        let descriptor = BuildDescriptor::load_with(&source, &SchemaValidator).unwrap();
        let keys: Vec<_> = descriptor.loaders().keys().cloned().collect();
        assert_eq!(keys, vec![".svg", ".html", ".png"]);
    }

    #[test]
    fn to_source_round_trips() {
        let source = BuildSource::new("src/app.js", "dist/app.js").with_loader(".html", Loader::Text);
        let descriptor = BuildDescriptor::load_with(&source, &SchemaValidator).unwrap();
        assert_eq!(descriptor.to_source(), source);
    }
}
