use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use gmat_scriptgen::build_scenario;
use gmat_scriptgen::config::{TemplateConfig, load_scenario, load_templates};
use gmat_scriptgen::common::DEFAULT_SCRIPT_PATH;
use gmat_scriptgen::export::writer_for_path;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Generate a GMAT script from a scenario manifest.
#[derive(Parser, Debug)]
#[command(author, version, about = "GMAT script generator")]
struct Cli {
    /// Scenario manifest (YAML, or TOML by extension)
    #[arg(long)]
    scenario: PathBuf,

    /// Template overrides for the fixed block values (YAML or TOML)
    #[arg(long)]
    templates: Option<PathBuf>,

    /// Output script path (use '-' for stdout)
    #[arg(long, default_value = DEFAULT_SCRIPT_PATH)]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("gmat_script=info,generate_script=info,warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let manifest = load_scenario(&cli.scenario)?;
    let templates = match &cli.templates {
        Some(path) => load_templates(path)?,
        None => TemplateConfig::default(),
    };

    let builder = build_scenario(&manifest, templates)?;
    let mut writer = writer_for_path(&cli.output)?;
    builder.write_to(writer.as_mut())?;
    writer.flush()?;

    info!(
        output = %cli.output.display(),
        bytes = builder.script().len(),
        "script written"
    );
    Ok(())
}
