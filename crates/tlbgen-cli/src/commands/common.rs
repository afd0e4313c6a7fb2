//! Loading and reporting shared by the generating commands.

use std::fs;
use std::path::{Path, PathBuf};

use tlbgen_compiler::{AliasConfig, Artifacts, Config, ConfigError, Pipeline, report};
use tlbgen_core::{SnapshotError, TypeLibrary};

/// Where the curated alias rules come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AliasSource {
    Preset(String),
    File(PathBuf),
}

pub struct GenerationArgs {
    pub snapshot: PathBuf,
    pub aliases: AliasSource,
    pub constants_module: Option<String>,
    pub base_class: Option<String>,
    pub base_module: Option<String>,
    pub enum_aliases: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid snapshot {}: {source}", path.display())]
    Snapshot {
        path: PathBuf,
        source: SnapshotError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl GenerationArgs {
    /// Emitter settings; unset flags keep the library defaults.
    pub fn config(&self) -> Config {
        let mut config = Config::new()
            .generator(concat!("tlbgen ", env!("CARGO_PKG_VERSION")))
            .emit_enum_aliases(self.enum_aliases);
        if let Some(module) = &self.constants_module {
            config = config.constants_module(module);
        }
        if let Some(class) = &self.base_class {
            config = config.base_class(class);
        }
        if let Some(module) = &self.base_module {
            config = config.base_module(module);
        }
        config
    }

    pub fn alias_config(&self) -> Result<AliasConfig, LoadError> {
        match &self.aliases {
            AliasSource::Preset(name) => Ok(AliasConfig::preset(name)?),
            AliasSource::File(path) => Ok(AliasConfig::from_json(&read_text(path)?)?),
        }
    }

    /// Load everything and run the pipeline, exiting on fatal errors.
    ///
    /// The run summary always goes to stderr.
    pub fn run(&self) -> Artifacts {
        let aliases = self.alias_config().unwrap_or_else(|e| fail(&e));
        let host = load_snapshot(&self.snapshot).unwrap_or_else(|e| fail(&e));

        let pipeline = Pipeline::new(&aliases, self.config());
        let artifacts = pipeline.run(&host).unwrap_or_else(|e| fail(&e));
        eprint!("{}", report::run_summary(&artifacts));
        artifacts
    }
}

/// Load a snapshot, choosing the decoder by file extension.
pub fn load_snapshot(path: &Path) -> Result<TypeLibrary, LoadError> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    tracing::debug!(path = %path.display(), json = is_json, "loading snapshot");

    let decoded = if is_json {
        TypeLibrary::from_json(&read_text(path)?)
    } else {
        let bytes = fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        TypeLibrary::from_binary(&bytes)
    };

    decoded.map_err(|source| LoadError::Snapshot {
        path: path.to_path_buf(),
        source,
    })
}

fn read_text(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `text` to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, text: &str) {
    match path {
        Some(path) => write_file(path, text),
        None => print!("{}", text),
    }
}

pub fn write_file(path: &Path, text: &str) {
    if let Err(e) = fs::write(path, text) {
        eprintln!("error: failed to write {}: {}", path.display(), e);
        std::process::exit(1);
    }
    eprintln!("Generated {}", path.display());
}

pub fn fail(err: &dyn std::fmt::Display) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1);
}
