use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use yomi_config::Config;
use yomi_config::logging::LoggingConfig;
use yomi_core::CardFace;
use yomi_lang_japanese::{
    ConjugationRegistry, FormName, JapaneseConjugator, TableLoader, Verb, VerbClass, VerbForm,
};

pub mod profile;

#[derive(Parser)]
#[command(name = "yomi", about = "Table-driven Japanese verb conjugation")]
struct Cli {
    /// JSON config file, defaults to ./yomi.json when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Extra conjugation table, loaded after the configured ones
    #[arg(long = "table", global = true)]
    tables: Vec<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Conjugate a dictionary-form verb
    Conjugate {
        /// Written form, e.g. 飲む
        written: String,
        /// Pronounced form, e.g. のむ
        pronounced: String,
        /// regularA (godan), regularB (ichidan) or irregular
        #[arg(long, default_value = "regularA")]
        class: String,
        #[arg(long, default_value = "")]
        definition: String,
        /// Form name, e.g. "Past Indicative"; every registered form when omitted
        #[arg(long)]
        form: Option<String>,
        #[arg(long)]
        polite: bool,
        #[arg(long)]
        negative: bool,
    },
    /// List registered verb forms
    Forms,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = profile::load_config(cli.config.as_deref())?;
    init_tracing(&config.logging);

    let registry = build_registry(&config, &cli.tables)?;
    let conjugator = JapaneseConjugator::new(registry);

    match cli.command {
        Command::Conjugate {
            written,
            pronounced,
            class,
            definition,
            form,
            polite,
            negative,
        } => {
            let class: VerbClass = class.parse()?;
            let verb = Verb::new(written, pronounced, definition, class)?;

            match form {
                Some(name) => {
                    let form = VerbForm::new(!polite, !negative, name.parse::<FormName>()?);
                    let result = conjugator.conjugate(&verb, &form)?;
                    print_card(&result);
                }
                None => {
                    for (form, result) in conjugator.conjugate_all(&verb) {
                        match result {
                            Ok(result) => print_card(&result),
                            Err(e) => tracing::warn!("Skipping {form}: {e}"),
                        }
                    }
                }
            }
        }
        Command::Forms => {
            for form in conjugator.registry().forms() {
                println!("{form}");
            }
        }
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Embedded table first if enabled, then configured paths, then `extra`
fn build_registry(config: &Config, extra: &[PathBuf]) -> anyhow::Result<ConjugationRegistry> {
    let mut registry = if config.conjugation.use_embedded {
        TableLoader::load_embedded().context("embedded conjugation table is invalid")?
    } else {
        ConjugationRegistry::new()
    };

    let configured = config.conjugation.table_paths.iter().map(PathBuf::from);
    for path in configured.chain(extra.iter().cloned()) {
        let loader = loader_for(config.conjugation.delimiter, &path);
        loader
            .load_file(&mut registry, &path)
            .with_context(|| format!("failed to load conjugation table {}", path.display()))?;
    }

    if registry.is_empty() {
        bail!("no conjugation tables loaded; enable use_embedded or add table paths");
    }

    tracing::info!("Conjugation registry ready with {} forms", registry.len());
    Ok(registry)
}

fn loader_for(delimiter: Option<char>, path: &Path) -> TableLoader {
    delimiter.map_or_else(|| TableLoader::for_path(path), TableLoader::new)
}

fn print_card(card: &impl CardFace) {
    let card = card.to_display_card();
    println!("{}\t{}\t{}", card.term, card.reading, card.definition);
}
