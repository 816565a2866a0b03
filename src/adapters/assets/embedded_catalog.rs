//! Catalog loader - builds the catalog from embedded TOML assets.
//!
//! Layout under `src/assets/catalog/`:
//! - `stacks/<name>.toml` - one stack per file, named by file stem
//! - `presets.toml` - `[[presets]]` in declaration order
//! - `defaults.toml` - `[[servers]]` registered by `init`

use std::sync::OnceLock;

use include_dir::{Dir, File, include_dir};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use tracing::debug;

use crate::domain::{
    AppError, Catalog, DefaultServer, EnvVarSpec, Preset, ServerDefinition, StackDefinition,
};

/// Embedded catalog directory.
static CATALOG_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/catalog");

static SHARED: OnceLock<Catalog> = OnceLock::new();

/// Stack file contents.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StackMeta {
    #[serde(default)]
    description: String,
    #[serde(default)]
    servers: Vec<ServerMeta>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ServerMeta {
    name: String,
    command: String,
    #[serde(default)]
    args: Vec<String>,
    #[serde(default)]
    env: Vec<EnvMeta>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EnvMeta {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    example: String,
    #[serde(default)]
    required: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PresetsFile {
    #[serde(default)]
    presets: Vec<PresetMeta>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PresetMeta {
    name: String,
    #[serde(default)]
    description: String,
    stacks: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DefaultsFile {
    #[serde(default)]
    servers: Vec<DefaultServerMeta>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DefaultServerMeta {
    name: String,
    #[serde(default)]
    description: String,
    command: String,
    #[serde(default)]
    args: Vec<String>,
    #[serde(default)]
    env: BTreeMap<String, String>,
}

/// Loader for the catalog compiled into the binary.
pub struct EmbeddedCatalog;

impl EmbeddedCatalog {
    /// Parse the embedded assets into a fresh catalog.
    pub fn load() -> Result<Catalog, AppError> {
        let stacks_dir = CATALOG_DIR.get_dir("stacks").ok_or_else(|| AppError::InvalidCatalog {
            entry: "stacks".to_string(),
            reason: "embedded stacks directory is missing".to_string(),
        })?;

        let mut stacks = Vec::new();
        for file in stacks_dir.files() {
            let path = file.path();
            if path.extension().and_then(|e| e.to_str()) != Some("toml") {
                continue;
            }
            let name = path.file_stem().and_then(|n| n.to_str()).unwrap_or("").to_string();
            let meta: StackMeta = parse(&name, file)?;
            stacks.push(StackDefinition {
                name,
                description: meta.description,
                servers: meta.servers.into_iter().map(server_definition).collect(),
            });
        }

        let presets: PresetsFile = parse("presets.toml", required_file("presets.toml")?)?;
        let defaults: DefaultsFile = parse("defaults.toml", required_file("defaults.toml")?)?;

        let catalog = Catalog::new(
            stacks,
            presets
                .presets
                .into_iter()
                .map(|p| Preset { name: p.name, description: p.description, stack_names: p.stacks })
                .collect(),
            defaults
                .servers
                .into_iter()
                .map(|d| DefaultServer {
                    name: d.name,
                    description: d.description,
                    command: d.command,
                    args: d.args,
                    env: d.env,
                })
                .collect(),
        )?;
        debug!(
            stacks = catalog.stacks().count(),
            presets = catalog.presets().len(),
            "loaded embedded catalog"
        );
        Ok(catalog)
    }

    /// Process-wide catalog, loaded on first use.
    pub fn shared() -> Result<&'static Catalog, AppError> {
        if let Some(catalog) = SHARED.get() {
            return Ok(catalog);
        }
        let catalog = Self::load()?;
        Ok(SHARED.get_or_init(|| catalog))
    }
}

fn required_file(name: &str) -> Result<&'static File<'static>, AppError> {
    CATALOG_DIR.get_file(name).ok_or_else(|| AppError::InvalidCatalog {
        entry: name.to_string(),
        reason: "embedded file is missing".to_string(),
    })
}

fn parse<T: DeserializeOwned>(entry: &str, file: &File<'_>) -> Result<T, AppError> {
    let content = file.contents_utf8().ok_or_else(|| AppError::InvalidCatalog {
        entry: entry.to_string(),
        reason: "not valid UTF-8".to_string(),
    })?;
    toml::from_str(content).map_err(|e| AppError::InvalidCatalog {
        entry: entry.to_string(),
        reason: e.to_string(),
    })
}

fn server_definition(meta: ServerMeta) -> ServerDefinition {
    ServerDefinition {
        name: meta.name,
        command: meta.command,
        arg_template: meta.args,
        env_specs: meta
            .env
            .into_iter()
            .map(|e| EnvVarSpec {
                name: e.name,
                description: e.description,
                example: e.example,
                required: e.required,
            })
            .collect(),
    }
}
