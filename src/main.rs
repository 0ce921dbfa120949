use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use commcare_digest::form::{FormDefinitionNode, check_definition};
use commcare_digest::manifest::{ManifestNode, derive_location_index, extract_version, validate};
use commcare_digest::record::FormSubmission;
use commcare_digest::render;
use tracing::info;

mod telemetry;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "commcare-digest")]
#[command(about = "Validate suite manifests and flatten form submissions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a suite.xml against the manifest invariants.
    Validate {
        #[arg(long)]
        manifest: String,
    },

    /// Print the resource -> remote location index of a suite.xml as JSON.
    Locations {
        #[arg(long)]
        manifest: String,

        /// Refuse manifests that fail validation.
        #[arg(long)]
        strict: bool,
    },

    /// Print the suite version.
    Version {
        #[arg(long)]
        manifest: String,
    },

    /// Flatten a form submission against its definition.
    Flatten {
        /// Question list (JSON) for the submitted form.
        #[arg(long)]
        definition: String,

        /// Form record (JSON) as served by the form API.
        #[arg(long)]
        submission: String,

        /// Check the submission envelope for required keys first.
        #[arg(long)]
        strict: bool,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        #[arg(short = 'o', long)]
        out: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    telemetry::init_tracing()?;
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Validate { manifest } => {
            let suite = read_manifest(&manifest)?;
            validate(&suite).with_context(|| format!("validate {}", manifest))?;
            println!("{} is valid", manifest);
        }

        Commands::Locations { manifest, strict } => {
            let suite = read_manifest(&manifest)?;
            if strict {
                validate(&suite).with_context(|| format!("validate {}", manifest))?;
            }
            let index = derive_location_index(&suite);
            info!(resources = index.len(), "indexed remote locations");
            println!("{}", serde_json::to_string_pretty(&index)?);
        }

        Commands::Version { manifest } => {
            let suite = read_manifest(&manifest)?;
            println!("{}", extract_version(&suite)?);
        }

        Commands::Flatten {
            definition,
            submission,
            strict,
            format,
            out,
        } => {
            // 1) Definition tree.
            let text = std::fs::read_to_string(&definition)
                .with_context(|| format!("read definition file {}", definition))?;
            let questions: Vec<FormDefinitionNode> = serde_json::from_str(&text)
                .with_context(|| format!("parse definition file {}", definition))?;
            check_definition(&questions)
                .with_context(|| format!("check definition file {}", definition))?;

            // 2) Submission record.
            let text = std::fs::read_to_string(&submission)
                .with_context(|| format!("read submission file {}", submission))?;
            let record = FormSubmission::from_json(&text)
                .with_context(|| format!("parse submission file {}", submission))?;
            if strict {
                record
                    .validate()
                    .with_context(|| format!("validate submission {}", submission))?;
            }

            // 3) Flatten + render.
            let nodes = record
                .human_readable(&questions)
                .with_context(|| format!("flatten submission {}", submission))?;
            info!(
                questions = questions.len(),
                form = %record.unique_id().map(|k| k.to_string()).unwrap_or_default(),
                "flattened submission"
            );

            let rendered = match format {
                Format::Text => render::render_text(&nodes),
                Format::Json => serde_json::to_string_pretty(&nodes)? + "\n",
            };
            match out {
                Some(out) => {
                    std::fs::write(&out, rendered).with_context(|| format!("write {}", out))?;
                    println!("Wrote {}", out);
                }
                None => print!("{}", rendered),
            }
        }
    }

    Ok(())
}

fn read_manifest(path: &str) -> Result<ManifestNode> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read manifest file {}", path))?;
    ManifestNode::parse_xml(&text).with_context(|| format!("parse manifest file {}", path))
}
