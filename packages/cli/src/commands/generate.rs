use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use methodsynth_emitter::GoFile;
use methodsynth_method::{presets, DefinedOutside};
use methodsynth_model::{Kind, PackageManifest};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Package manifests describing the types to generate methods for
    #[arg(required = true)]
    pub manifests: Vec<PathBuf>,

    /// Output directory (defaults to each package's directory)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,
}

/// One generated file, named relative to its package directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub name: String,
    pub kind: Kind,
    pub methods: usize,
    pub content: String,
}

pub fn generate(args: GenerateArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;

    println!("{}", "🔨 Generating methods...".bright_blue().bold());

    let mut file_count = 0;
    let mut method_count = 0;

    for manifest_path in &args.manifests {
        let path = cwd.join(manifest_path);
        let manifest = PackageManifest::load(&path)
            .with_context(|| format!("Failed to load manifest {}", manifest_path.display()))?;

        // Relative to cwd, the same form the manifest records declaring files in
        let out_dir = match &args.out_dir {
            Some(dir) => dir.clone(),
            None => PathBuf::from(&manifest.directory),
        };

        let files = generate_package(&manifest, &config, &out_dir);

        if !args.stdout {
            for kind in Kind::ALL {
                if files.iter().any(|f| f.kind == kind) {
                    continue;
                }
                let stale_path = cwd.join(&out_dir).join(config.outputs.get(kind));
                if remove_stale(&stale_path, &config.header)? {
                    println!(
                        "  {} {} {} → removed {}",
                        "✗".red(),
                        manifest.name,
                        kind,
                        stale_path.display()
                    );
                }
            }
        }

        if files.is_empty() {
            println!(
                "  {} {} - no types need generated methods",
                "⚠️".yellow(),
                manifest.name
            );
            continue;
        }

        for file in files {
            file_count += 1;
            method_count += file.methods;

            if args.stdout {
                println!("{}", file.content);
                continue;
            }

            let output_path = cwd.join(&out_dir).join(&file.name);
            write_file(&output_path, &file.content)?;
            println!(
                "  {} {} {} → {} ({} methods)",
                "✓".green(),
                manifest.name,
                file.kind,
                output_path.display(),
                file.methods
            );
        }
    }

    println!();
    println!(
        "{} Generated {} methods in {} files",
        "✅".green(),
        method_count,
        file_count
    );

    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content).map_err(|e| anyhow!("Failed to write {}: {}", path.display(), e))
}

/// Delete a previous output that the current pass no longer produces.
///
/// Left in place, it would still declare methods that are now written by
/// hand. Only files starting with the generated header are removed.
fn remove_stale(path: &Path, header: &str) -> Result<bool> {
    if !path.is_file() {
        return Ok(false);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read {}: {}", path.display(), e))?;
    let marker = format!("// {}", header.lines().next().unwrap_or_default());
    if !content.starts_with(&marker) {
        debug!(path = %path.display(), "Keeping file without generated header");
        return Ok(false);
    }

    fs::remove_file(path).map_err(|e| anyhow!("Failed to remove {}: {}", path.display(), e))?;
    info!(path = %path.display(), "Removed stale generated file");
    Ok(true)
}

/// Generate every non-empty file for one package, in kind order.
///
/// `out_dir` is where the files will be written, in the form the manifest
/// records declaring files. Each kind's file is bound to a `DefinedOutside`
/// filter naming its path there, so its own previous output is regenerated.
pub fn generate_package(
    manifest: &PackageManifest,
    config: &Config,
    out_dir: &Path,
) -> Vec<GeneratedFile> {
    let mut files = Vec::new();

    for kind in Kind::ALL {
        let name = config.outputs.get(kind);
        let filter = DefinedOutside::new(out_dir.join(name).display().to_string());
        let registry = presets::for_kind(kind, config.receivers.get(kind), &config.imports);

        let mut file = GoFile::new(&manifest.name, &manifest.path).with_header(&config.header);
        let mut methods = 0;

        for ty in manifest.types.iter().filter(|ty| kind.matches(ty)) {
            debug!(type_name = %ty.name, %kind, "Writing methods");
            methods += registry.write(&mut file, ty, &filter);
        }

        if file.is_empty() {
            continue;
        }

        info!(package = %manifest.name, file = %name, methods, "Generated file");
        files.push(GeneratedFile {
            name: name.to_string(),
            kind,
            methods,
            content: file.render(),
        });
    }

    files
}
