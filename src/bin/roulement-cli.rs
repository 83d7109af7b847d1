#![forbid(unsafe_code)]
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use roulement::{
    detect_conflicts, generate, io,
    render::{GridRenderer, HtmlTable, TextGrid},
    scheduler::{AssignOptions, ConflictKind, ScheduleReport},
    storage::{JsonStorage, Storage},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de planning hebdomadaire par préférences
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Html,
    Csv,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Générer le planning à partir d'un CSV de préférences
    Generate {
        #[arg(long)]
        csv: String,
        /// Graine du tirage aléatoire (reproductible)
        #[arg(long)]
        seed: Option<u64>,
        /// Fichier JSON du rapport
        #[arg(long, default_value = "schedule.json")]
        out: String,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Réafficher un rapport enregistré
    Show {
        #[arg(long, default_value = "schedule.json")]
        report: String,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Export CSV de la grille (optionnel)
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Vérifier doubles affectations et sous-effectifs
    Check {
        #[arg(long, default_value = "schedule.json")]
        report: String,
    },

    /// Jours travaillés par personne
    Tally {
        #[arg(long, default_value = "schedule.json")]
        report: String,
        /// Export CSV des compteurs (optionnel)
        #[arg(long)]
        out: Option<String>,
    },
}

fn render(report: &ScheduleReport, format: Format) -> Result<String> {
    Ok(match format {
        Format::Text => TextGrid.render(report),
        Format::Html => HtmlTable.render(report),
        Format::Csv => io::schedule_csv_string(report)?,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let code = match cli.cmd {
        Commands::Generate {
            csv,
            seed,
            out,
            format,
        } => {
            let roster = io::import_preferences_csv(csv)?;
            let report = generate(roster, AssignOptions { seed });
            JsonStorage::open(&out)?.save(&report)?;
            print!("{}", render(&report, format)?);
            eprintln!("seed: {} (report saved to {out})", report.seed);
            0
        }
        Commands::Show {
            report,
            format,
            out_csv,
        } => {
            let report = JsonStorage::open(&report)?.load()?;
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, &report)?;
            }
            print!("{}", render(&report, format)?);
            0
        }
        Commands::Check { report } => {
            let report = JsonStorage::open(&report)?.load()?;
            let conflicts = detect_conflicts(&report);
            if conflicts.is_empty() {
                println!("OK: no conflicts");
                0
            } else {
                eprintln!("Found {} conflict(s)", conflicts.len());
                for c in &conflicts {
                    match &c.kind {
                        ConflictKind::DoubleBooking {
                            first,
                            second,
                            via_overflow,
                        } => println!(
                            "{} | double | {} | {first} + {second}{}",
                            c.day,
                            c.person.as_ref().map(|p| p.as_str()).unwrap_or("-"),
                            if *via_overflow { " (overflow)" } else { "" }
                        ),
                        ConflictKind::Understaffed { shift, seated } => {
                            println!("{} | understaffed | {shift} | {seated}", c.day)
                        }
                    }
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Tally { report, out } => {
            let report = JsonStorage::open(&report)?.load()?;
            if let Some(path) = out {
                io::export_tallies_csv(path, &report)?;
            }
            for t in report.days_worked() {
                println!("{} | {}", t.person, t.days_worked);
            }
            0
        }
    };

    std::process::exit(code);
}
