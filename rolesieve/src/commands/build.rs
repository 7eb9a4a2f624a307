// rolesieve/src/commands/build.rs
//! Per-role build driver.
//!
//! For each role the driver filters every source document, writes the results
//! to the role's output directory, copies the style asset and writes the role
//! definition file. Roles are built one after another, and a failure to read
//! or write any file aborts the whole run. Files already written stay on disk.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use rolesieve_core::{BuildConfig, FilterContext, FilterEngine, FilterSummary};

/// Where to read from and write to, and which role to restrict the build to.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Builds just this role, directly into `output_dir`.
    pub only_role: Option<String>,
}

/// What was produced for one role.
#[derive(Debug, Clone)]
pub struct RoleReport {
    pub role: String,
    pub output_dir: PathBuf,
    pub documents: usize,
    pub style_copied: bool,
    pub summary: FilterSummary,
}

/// Builds every requested role.
///
/// An override role that is not configured fails with
/// [`RoleSieveError::UnknownRole`](rolesieve_core::RoleSieveError) before any
/// file is touched.
pub fn run_build(
    engine: &dyn FilterEngine,
    config: &BuildConfig,
    opts: &BuildOptions,
) -> Result<Vec<RoleReport>> {
    let roles = config.select_roles(opts.only_role.as_deref())?;
    let sources = collect_sources(&opts.source_dir, &config.source_extension)?;
    info!(
        "Found {} .{} file(s) in {}.",
        sources.len(),
        config.source_extension,
        opts.source_dir.display()
    );

    let mut reports = Vec::with_capacity(roles.len());
    for role in roles {
        let role_dir = if opts.only_role.is_some() {
            opts.output_dir.clone()
        } else {
            opts.output_dir.join(&role)
        };
        reports.push(build_role(engine, config, &opts.source_dir, &sources, &role, &role_dir)?);
    }
    Ok(reports)
}

/// Lists the files with `extension` directly inside `dir`, sorted by name.
pub fn collect_sources(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read source directory: {}", dir.display()))?;

    let mut sources = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read an entry of {}", dir.display()))?
            .path();
        let matches = path
            .extension()
            .is_some_and(|ext| ext.to_string_lossy() == extension);
        if matches && path.is_file() {
            sources.push(path);
        }
    }
    sources.sort();
    Ok(sources)
}

fn build_role(
    engine: &dyn FilterEngine,
    config: &BuildConfig,
    source_dir: &Path,
    sources: &[PathBuf],
    role: &str,
    role_dir: &Path,
) -> Result<RoleReport> {
    info!("Building role: {}", role);
    fs::create_dir_all(role_dir)
        .with_context(|| format!("Failed to create output directory: {}", role_dir.display()))?;

    let ctx = FilterContext::new(role);
    let mut summary = FilterSummary::default();

    for source in sources {
        let Some(file_name) = source.file_name() else {
            continue;
        };
        let target = role_dir.join(file_name);
        info!("Processing {} -> {}", source.display(), target.display());

        let content = fs::read_to_string(source)
            .with_context(|| format!("Failed to read source file: {}", source.display()))?;
        let (filtered, doc_summary) = engine.filter(&content, &ctx);
        fs::write(&target, filtered)
            .with_context(|| format!("Failed to write output file: {}", target.display()))?;
        summary += doc_summary;
    }

    let style_copied = copy_style_asset(config, source_dir, role_dir)?;

    let marker = role_dir.join(&config.marker_file);
    fs::write(&marker, config.render_marker(role))
        .with_context(|| format!("Failed to write role definition file: {}", marker.display()))?;
    debug!("Wrote role definition file {}.", marker.display());

    Ok(RoleReport {
        role: role.to_string(),
        output_dir: role_dir.to_path_buf(),
        documents: sources.len(),
        style_copied,
        summary,
    })
}

/// Copies the configured style asset into `role_dir`. A missing asset is not an error.
fn copy_style_asset(config: &BuildConfig, source_dir: &Path, role_dir: &Path) -> Result<bool> {
    let Some(asset) = config.style_asset_path(source_dir) else {
        return Ok(false);
    };
    if !asset.is_file() {
        debug!("Style asset {} not found; skipping copy.", asset.display());
        return Ok(false);
    }

    let target = role_dir.join(&config.style_asset_name);
    fs::copy(&asset, &target).with_context(|| {
        format!("Failed to copy style asset {} to {}", asset.display(), target.display())
    })?;
    debug!("Copied style asset to {}.", target.display());
    Ok(true)
}
