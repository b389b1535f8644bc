use anyhow::Context;
use api_shared::{AssessReq, AssessRes};
use clap::{Parser, Subcommand};
use oheng_core::config::{
    balance_from_env_value, outlook_year_from_env_value, resolve_knowledge_base_path,
};
use oheng_core::{
    stem_for_year, Assessment, AssessmentService, Condition, CoreConfig, KnowledgeBase,
    SurveyItem,
};
use oheng_files::{ReportDocument, ReportExporter, ReportSink};
use oheng_types::NonEmptyText;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "oheng")]
#[command(about = "Element-based health profile and supplement recommendation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess one person and print the report
    Assess {
        /// Name shown in the report
        #[arg(long)]
        name: String,
        /// male or female
        #[arg(long)]
        gender: String,
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        birth_date: String,
        /// Height in centimetres
        #[arg(long)]
        height: u16,
        /// Weight in kilograms
        #[arg(long)]
        weight: u16,
        /// Survey item answered "yes" (repeatable, see `survey-items`)
        #[arg(long = "flag")]
        flags: Vec<String>,
        /// Diagnosed condition (repeatable, see `conditions`)
        #[arg(long = "condition")]
        conditions: Vec<String>,
        /// Knowledge base JSON file (defaults to OHENG_KNOWLEDGE_BASE or the bundled file)
        #[arg(long)]
        knowledge_base: Option<PathBuf>,
        /// First year of the outlook section (defaults to OHENG_OUTLOOK_YEAR or 2025)
        #[arg(long)]
        outlook_year: Option<i32>,
        /// Print the assessment as JSON instead of plain text
        #[arg(long)]
        json: bool,
        /// Also write the plain-text report into this directory
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Print the stem and element category for a year
    Element {
        #[arg(allow_negative_numbers = true)]
        year: i32,
    },
    /// Print a previously exported report by its sha256 hash
    ShowReport {
        /// Directory the report was exported into
        #[arg(long)]
        dir: PathBuf,
        hash: String,
    },
    /// List the health-survey items
    SurveyItems,
    /// List the condition catalog with its nutrients
    Conditions,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Some(command) => execute(command, &mut stdout),
        None => {
            println!("Use --help to see available commands");
            Ok(())
        }
    }
}

fn execute(command: Commands, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Commands::Assess {
            name,
            gender,
            birth_date,
            height,
            weight,
            flags,
            conditions,
            knowledge_base,
            outlook_year,
            json,
            export,
        } => {
            let req = AssessReq {
                name,
                gender,
                birth_date,
                height_cm: height,
                weight_kg: weight,
                flags,
                conditions,
            };
            let service = build_service(knowledge_base, outlook_year)?;
            let subject = req.into_subject()?;
            let assessment = service.assess(&subject)?;

            if json {
                let res = AssessRes::from(&assessment);
                writeln!(out, "{}", serde_json::to_string_pretty(&res)?)?;
            } else {
                write!(out, "{}", assessment.report)?;
            }

            if let Some(dir) = export {
                let location = export_report(&dir, subject.name.clone(), &assessment)?;
                eprintln!("Report exported to {location}");
            }
        }
        Commands::Element { year } => {
            let stem = stem_for_year(year);
            writeln!(out, "{year}: stem {}, element {}", stem.as_str(), stem.element())?;
        }
        Commands::ShowReport { dir, hash } => {
            let exporter = ReportExporter::new(&dir)?;
            write!(out, "{}", exporter.read(&hash)?)?;
        }
        Commands::SurveyItems => {
            for item in SurveyItem::ALL {
                writeln!(out, "{:<20} {}", item.key(), item.question())?;
            }
        }
        Commands::Conditions => {
            for condition in Condition::CATALOG {
                writeln!(
                    out,
                    "{:<18} {}",
                    condition.label(),
                    condition.nutrients().join(", ")
                )?;
            }
        }
    }
    Ok(())
}

/// Resolve configuration once: CLI flags first, then environment, then defaults.
fn build_service(
    knowledge_base: Option<PathBuf>,
    outlook_year: Option<i32>,
) -> anyhow::Result<AssessmentService> {
    let kb_override =
        knowledge_base.or_else(|| std::env::var("OHENG_KNOWLEDGE_BASE").ok().map(PathBuf::from));
    let kb_path = resolve_knowledge_base_path(kb_override)?;
    let outlook_year = match outlook_year {
        Some(year) => year,
        None => outlook_year_from_env_value(std::env::var("OHENG_OUTLOOK_YEAR").ok())?,
    };
    let balance = balance_from_env_value(std::env::var("OHENG_BALANCE").ok())?;

    let cfg = CoreConfig::new(kb_path, outlook_year, balance)?;
    let kb = KnowledgeBase::load(cfg.knowledge_base_path())
        .with_context(|| format!("loading {}", cfg.knowledge_base_path().display()))?;
    tracing::debug!(
        path = %cfg.knowledge_base_path().display(),
        outlook_year = cfg.outlook_year(),
        "knowledge base loaded"
    );
    Ok(AssessmentService::new(Arc::new(kb), cfg))
}

fn export_report(
    dir: &std::path::Path,
    subject_name: NonEmptyText,
    assessment: &Assessment,
) -> anyhow::Result<String> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating export directory {}", dir.display()))?;
    let exporter = ReportExporter::new(dir)?;
    let document = ReportDocument::new(
        subject_name,
        assessment.report.to_text(),
        assessment.recommendations.to_vec(),
    );
    let receipt = exporter.deliver(&document)?;
    Ok(receipt.location)
}
