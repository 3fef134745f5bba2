use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use methodsynth_method::presets;
use methodsynth_model::Kind;
use std::path::Path;

#[derive(Debug, Args)]
pub struct MethodsArgs {
    /// Only list methods for this kind (managed, claim, nonportableclass, portableclasslist)
    #[arg(short, long)]
    pub kind: Option<Kind>,
}

/// Print the methods each kind's registry generates, in generation order
pub fn methods(args: MethodsArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;

    let kinds: Vec<Kind> = match args.kind {
        Some(kind) => vec![kind],
        None => Kind::ALL.to_vec(),
    };

    for kind in kinds {
        let registry = presets::for_kind(kind, config.receivers.get(kind), &config.imports);
        println!(
            "{} {}",
            kind.as_str().bright_blue().bold(),
            format!("→ {}", config.outputs.get(kind)).dimmed()
        );
        for name in registry.names() {
            println!("  {}", name);
        }
        println!();
    }

    Ok(())
}
