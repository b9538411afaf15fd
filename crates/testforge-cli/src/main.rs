use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use testforge_core::{EntityModel, validate_model};
use testforge_normalize::{ParseError, document_json_schema, entity_from_json, validate_document_json};
use testforge_render::{GenerateOptions, GenerationError, GenerationPipeline, TemplateError};

#[derive(Debug, Error)]
enum CliError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("core error: {0}")]
    Core(#[from] testforge_core::Error),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("generation failed: {0}")]
    Failed(String),
}

#[derive(Parser, Debug)]
#[command(name = "testforge", version, about = "Testforge CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate test artifacts from entity documents.
    Generate(GenerateArgs),
    /// Emit the entity document JSON Schema.
    Schema,
    /// Validate entity documents without generating anything.
    Validate(ValidateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Entity document file(s).
    #[arg(long = "document", value_name = "FILE", required = true)]
    documents: Vec<PathBuf>,
    /// Output directory for generated artifacts.
    #[arg(long, default_value = "generated")]
    out: PathBuf,
    /// Synthesizer seed; identical seeds reproduce identical artifacts.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Skip the shared access-control artifact.
    #[arg(long, default_value_t = false)]
    no_security: bool,
    /// Write the run report as JSON next to the artifacts.
    #[arg(long, default_value_t = true)]
    report: bool,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// Entity document file(s).
    #[arg(long = "document", value_name = "FILE", required = true)]
    documents: Vec<PathBuf>,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Schema => run_schema(),
        Command::Validate(args) => run_validate(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let models = load_models(&args.documents)?;

    let pipeline = GenerationPipeline::new(GenerateOptions {
        seed: args.seed,
        include_security_artifact: !args.no_security,
    })?;
    let result = pipeline.generate(&models)?;

    fs::create_dir_all(&args.out)?;
    for (name, text) in &result.artifacts {
        let path = args.out.join(format!("{name}.java"));
        fs::write(&path, text).map_err(|err| {
            GenerationError::FileWrite(format!("{}: {err}", path.display()))
        })?;
    }

    if args.report {
        let report_path = args.out.join("generation_report.json");
        fs::write(&report_path, serde_json::to_vec_pretty(&result)?)?;
    }

    for issue in result.warnings.iter().chain(result.errors.iter()) {
        eprintln!("{}: [{}] {}", issue.level, issue.code, issue.message);
    }
    println!("{}", result.summary());

    info!(
        run_id = %result.run_id,
        artifacts = result.artifacts.len(),
        out = %args.out.display(),
        "artifacts written"
    );

    if result.is_successful() {
        Ok(())
    } else {
        Err(CliError::Failed(result.summary()))
    }
}

fn run_schema() -> Result<(), CliError> {
    let schema = document_json_schema();
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), CliError> {
    for path in &args.documents {
        let model = load_model(path)?;
        validate_model(&model)?;
        println!("{}: ok ({})", path.display(), model.name);
    }
    Ok(())
}

fn load_models(paths: &[PathBuf]) -> Result<Vec<EntityModel>, CliError> {
    paths.iter().map(|path| load_model(path)).collect()
}

fn load_model(path: &Path) -> Result<EntityModel, CliError> {
    let contents = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&contents)?;
    validate_document_json(&value)?;
    Ok(entity_from_json(&value)?)
}
