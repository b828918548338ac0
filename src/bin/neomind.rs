//! NeoMind CLI - Command-line interface for the screening engine
//!
//! Commands:
//! - analyze: Run a screening from an intake record
//! - demo: Run a screening with the built-in demo intake
//! - validate: Validate an intake record against the schema
//! - schema: Print schema information

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use neomind::intake::IntakeRecord;
use neomind::report::{render_text, ScreeningReport};
use neomind::{ScreeningEngine, ENGINE_VERSION, INTAKE_SCHEMA_VERSION, REPORT_VERSION};

/// NeoMind - Screening engine for early neurodevelopmental risk markers
#[derive(Parser)]
#[command(name = "neomind")]
#[command(version = ENGINE_VERSION)]
#[command(about = "Screen intake data for developmental risk markers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a screening from an intake record
    Analyze {
        /// Intake JSON file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Output format
        #[arg(long, default_value = "json-pretty")]
        format: OutputFormat,

        /// Seed for reproducible runs (OS-seeded when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run a screening with the built-in demo intake
    Demo {
        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Validate an intake record against the schema
    Validate {
        /// Intake JSON file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output validation report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print schema information
    Schema {
        /// Schema to print (input or output)
        #[arg(value_enum)]
        schema_type: SchemaType,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    JsonPretty,
    /// Plain-text caregiver report
    Text,
}

#[derive(Clone, ValueEnum)]
enum SchemaType {
    /// Input schema (neomind.intake.v1)
    Input,
    /// Output schema (neomind.report.v1)
    Output,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), NeomindCliError> {
    match cli.command {
        Commands::Analyze {
            input,
            output,
            format,
            seed,
        } => cmd_analyze(&input, &output, format, seed),

        Commands::Demo { format, seed } => cmd_demo(format, seed),

        Commands::Validate { input, json } => cmd_validate(&input, json),

        Commands::Schema { schema_type } => {
            cmd_schema(schema_type);
            Ok(())
        }
    }
}

fn cmd_analyze(
    input: &Path,
    output: &Path,
    format: OutputFormat,
    seed: Option<u64>,
) -> Result<(), NeomindCliError> {
    let record = read_intake(input)?;

    let mut engine = match seed {
        Some(seed) => ScreeningEngine::seeded(seed),
        None => ScreeningEngine::new(),
    };
    let report = engine.run(&record)?;

    let rendered = format_report(&report, &format)?;
    if output.to_string_lossy() == "-" {
        print!("{}", rendered);
    } else {
        fs::write(output, rendered)?;
    }

    Ok(())
}

fn cmd_demo(format: OutputFormat, seed: Option<u64>) -> Result<(), NeomindCliError> {
    let mut engine = match seed {
        Some(seed) => ScreeningEngine::seeded(seed),
        None => ScreeningEngine::new(),
    };
    let report = engine.run(&IntakeRecord::demo())?;

    print!("{}", format_report(&report, &format)?);
    Ok(())
}

fn cmd_validate(input: &Path, json: bool) -> Result<(), NeomindCliError> {
    let result = read_intake(input).and_then(|record| {
        record.validate().map_err(NeomindCliError::from)?;
        Ok(record)
    });

    match result {
        Ok(record) => {
            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "valid": true,
                        "schema_version": record.schema_version,
                        "subject": record.subject.name,
                    })
                );
            } else {
                println!("Intake record is valid ({})", record.schema_version);
            }
            Ok(())
        }
        Err(e) => {
            if json {
                let detail = CliError::from(e);
                println!(
                    "{}",
                    serde_json::json!({ "valid": false, "error": detail.message })
                );
                Err(NeomindCliError::ValidationFailed)
            } else {
                Err(e)
            }
        }
    }
}

fn cmd_schema(schema_type: SchemaType) {
    match schema_type {
        SchemaType::Input => {
            println!("Input Schema: {}", INTAKE_SCHEMA_VERSION);
            println!();
            println!("An intake record contains:");
            println!();
            println!("- schema_version: \"{}\"", INTAKE_SCHEMA_VERSION);
            println!("- subject: {{ name, birth_date (YYYY-MM-DD) }}");
            println!("- health (all fields optional):");
            println!("  - birth_weight: kilograms, finite and positive");
            println!("  - apgar_1min, apgar_5min: integers 0-10");
            println!("  - family_history: free text, matched against");
            println!("    autism / adhd / down / developmental keywords");
        }
        SchemaType::Output => {
            println!("Output Schema: {}", REPORT_VERSION);
            println!();
            println!("A screening report contains:");
            println!();
            println!("- report_version: \"{}\"", REPORT_VERSION);
            println!("- producer: {{ name, version, instance_id }}");
            println!("- analysis_id, analyzed_at_utc, subject");
            println!("- video / audio: {{ metrics, risk_indicators, summary }}");
            println!("- health: {{ risk_factors, protective_factors, total_risk_factors }}");
            println!("- assessment:");
            println!("  - risk_scores: ASD, ADHD, Down Syndrome, Developmental Delay");
            println!("  - overall_risk: Low | Medium | High");
            println!("  - explanations, components {{ video_risk, audio_risk, health_risk }}");
            println!("- recommendations: {{ disorder_specific, general, follow_up_timeline }}");
        }
    }
}

// Helper functions

fn read_intake(input: &Path) -> Result<IntakeRecord, NeomindCliError> {
    let input_data = if input.to_string_lossy() == "-" {
        if atty::is(atty::Stream::Stdin) {
            return Err(NeomindCliError::InteractiveStdin);
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(input)?
    };

    let record: IntakeRecord = serde_json::from_str(&input_data)?;
    Ok(record)
}

fn format_report(
    report: &ScreeningReport,
    format: &OutputFormat,
) -> Result<String, NeomindCliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(report)? + "\n"),
        OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(report)? + "\n"),
        OutputFormat::Text => Ok(render_text(report)),
    }
}

// Error types

#[derive(Debug)]
enum NeomindCliError {
    Io(io::Error),
    Screen(neomind::ScreenError),
    Json(serde_json::Error),
    Validation(neomind::ValidationError),
    InteractiveStdin,
    ValidationFailed,
}

impl From<io::Error> for NeomindCliError {
    fn from(e: io::Error) -> Self {
        NeomindCliError::Io(e)
    }
}

impl From<neomind::ScreenError> for NeomindCliError {
    fn from(e: neomind::ScreenError) -> Self {
        NeomindCliError::Screen(e)
    }
}

impl From<serde_json::Error> for NeomindCliError {
    fn from(e: serde_json::Error) -> Self {
        NeomindCliError::Json(e)
    }
}

impl From<neomind::ValidationError> for NeomindCliError {
    fn from(e: neomind::ValidationError) -> Self {
        NeomindCliError::Validation(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<NeomindCliError> for CliError {
    fn from(e: NeomindCliError) -> Self {
        match e {
            NeomindCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            NeomindCliError::Screen(e) => CliError {
                code: "SCREEN_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Run 'neomind validate' on the intake record".to_string()),
            },
            NeomindCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Ensure input matches the neomind.intake.v1 schema".to_string()),
            },
            NeomindCliError::Validation(e) => CliError {
                code: "VALIDATION_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Run 'neomind schema input' for the field rules".to_string()),
            },
            NeomindCliError::InteractiveStdin => CliError {
                code: "INTERACTIVE_STDIN".to_string(),
                message: "stdin is a TTY; pipe an intake record or pass --input <file>"
                    .to_string(),
                hint: Some("Example: neomind analyze --input intake.json".to_string()),
            },
            NeomindCliError::ValidationFailed => CliError {
                code: "VALIDATION_FAILED".to_string(),
                message: "Intake record failed validation".to_string(),
                hint: Some("Fix the reported fields and retry".to_string()),
            },
        }
    }
}
