//! Configuration management for `rolesieve-core`.
//!
//! This module defines the markup grammar (the directive names the recognizer
//! looks for) and the build configuration consumed by the CLI driver. It
//! handles YAML deserialization, the embedded defaults, and validation.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use crate::errors::RoleSieveError;

/// Maximum allowed length for a directive name.
pub const MAX_DIRECTIVE_LENGTH: usize = 64;

/// The directive names that make up the conditional markup.
///
/// With the defaults the recognized forms are `\begin{rolecontent}{roles}`,
/// `\end{rolecontent}`, `\rolecontent{roles}{content}`, `\exclude{...}`,
/// `\begin{exclude}`/`\end{exclude}` and the `highlights` wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MarkupGrammar {
    /// Name shared by the block region environment and the inline region command.
    pub region: String,
    /// Name shared by the line exclude command and the exclude environment.
    pub exclude: String,
    /// Environments deleted when nothing but whitespace or comments remain inside.
    pub wrappers: Vec<String>,
}

impl Default for MarkupGrammar {
    fn default() -> Self {
        Self {
            region: "rolecontent".to_string(),
            exclude: "exclude".to_string(),
            wrappers: vec!["highlights".to_string()],
        }
    }
}

impl Hash for MarkupGrammar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.region.hash(state);
        self.exclude.hash(state);
        self.wrappers.hash(state);
    }
}

impl MarkupGrammar {
    /// Checks that every directive name is a plain, non-empty letter sequence.
    pub fn validate(&self) -> Result<(), RoleSieveError> {
        let mut errors = Vec::new();
        let names = [("region", &self.region), ("exclude", &self.exclude)]
            .into_iter()
            .chain(self.wrappers.iter().map(|w| ("wrapper", w)));

        for (kind, name) in names {
            if name.is_empty() {
                errors.push(format!("{} directive name is empty", kind));
            } else if name.len() > MAX_DIRECTIVE_LENGTH {
                errors.push(format!(
                    "{} directive '{}' exceeds {} characters",
                    kind, name, MAX_DIRECTIVE_LENGTH
                ));
            } else if !name.chars().all(|c| c.is_ascii_alphabetic() || c == '*') {
                errors.push(format!("{} directive '{}' must contain only letters or '*'", kind, name));
            }
        }

        if self.region == self.exclude {
            errors.push(format!(
                "region and exclude directives share the name '{}'",
                self.region
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(RoleSieveError::InvalidGrammar(errors.join("; ")))
        }
    }
}

/// Represents the top-level build configuration for rolesieve.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Every role a full build produces, in build order.
    pub roles: Vec<String>,
    /// Extension (without the dot) of the source documents.
    pub source_extension: String,
    /// Style file copied into every output location, relative to the source directory.
    pub style_asset: Option<PathBuf>,
    /// File name the style asset is written under.
    pub style_asset_name: String,
    /// File name of the generated role marker.
    pub marker_file: String,
    /// Macro defined to the role name in the marker file.
    pub role_macro: String,
    /// Macro defined to `true`/`false` in the marker file.
    pub location_macro: String,
    pub include_location: bool,
    pub markup: MarkupGrammar,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            roles: ["qr", "qd", "tech", "soleng"].iter().map(|r| r.to_string()).collect(),
            source_extension: "tex".to_string(),
            style_asset: Some(PathBuf::from("../templates/resume-layout.sty")),
            style_asset_name: "resume-layout.sty".to_string(),
            marker_file: "role-def.tex".to_string(),
            role_macro: "buildrole".to_string(),
            location_macro: "includelocation".to_string(),
            include_location: false,
            markup: MarkupGrammar::default(),
        }
    }
}

impl BuildConfig {
    /// Loads a build configuration from a YAML file.
    ///
    /// Keys missing from the file keep their default values.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading build configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: BuildConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        debug!("Loaded configuration with {} roles from {}.", config.roles.len(), path.display());
        Ok(config)
    }

    /// Loads the default configuration from the embedded YAML.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default build configuration from embedded string...");
        let default_yaml = include_str!("../config/default_build.yaml");
        let config: BuildConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default build configuration")?;
        Ok(config)
    }

    /// Validates names, roles and the markup grammar.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for role in &self.roles {
            if role.trim().is_empty() {
                errors.push("A role name is empty.".to_string());
            } else if role.as_str() != role.trim() {
                errors.push(format!("Role '{}' has leading or trailing whitespace.", role));
            } else if role.contains(',') || role.contains('{') || role.contains('}') {
                errors.push(format!("Role '{}' contains a reserved character.", role));
            } else if !seen.insert(role.as_str()) {
                errors.push(format!("Duplicate role found: '{}'.", role));
            }
        }

        for (field, value) in [
            ("source_extension", &self.source_extension),
            ("style_asset_name", &self.style_asset_name),
            ("marker_file", &self.marker_file),
            ("role_macro", &self.role_macro),
            ("location_macro", &self.location_macro),
        ] {
            if value.trim().is_empty() {
                errors.push(format!("Field `{}` cannot be empty.", field));
            }
        }

        if let Err(e) = self.markup.validate() {
            errors.push(e.to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow!("Build configuration validation failed:\n{}", errors.join("\n")))
        }
    }

    /// Resolves the roles a run builds.
    ///
    /// Without an override every configured role is returned. With one, the
    /// override must be a configured role.
    pub fn select_roles(&self, only: Option<&str>) -> Result<Vec<String>, RoleSieveError> {
        match only {
            None => Ok(self.roles.clone()),
            Some(role) if self.roles.iter().any(|r| r == role) => Ok(vec![role.to_string()]),
            Some(role) => Err(RoleSieveError::UnknownRole {
                role: role.to_string(),
                allowed: self.roles.clone(),
            }),
        }
    }

    /// Resolves the style asset location against the source directory.
    pub fn style_asset_path(&self, source_dir: &Path) -> Option<PathBuf> {
        self.style_asset.as_ref().map(|asset| {
            if asset.is_absolute() {
                asset.clone()
            } else {
                source_dir.join(asset)
            }
        })
    }

    /// Renders the role marker file contents.
    pub fn render_marker(&self, role: &str) -> String {
        format!(
            "\\def\\{}{{{}}}\n\\def\\{}{{{}}}\n",
            self.role_macro, role, self.location_macro, self.include_location
        )
    }
}

/// Overrides configured values with the ones given on the command line.
///
/// `None` and empty lists leave the configured value untouched.
pub fn merge_cli_overrides(
    mut config: BuildConfig,
    roles: Option<Vec<String>>,
    include_location: bool,
) -> BuildConfig {
    if let Some(roles) = roles.filter(|r| !r.is_empty()) {
        debug!("Overriding configured roles with CLI roles: {:?}", roles);
        let mut seen = HashSet::new();
        config.roles = roles
            .into_iter()
            .filter(|r| seen.insert(r.clone()))
            .collect();
    }
    if include_location {
        config.include_location = true;
    }
    config
}
