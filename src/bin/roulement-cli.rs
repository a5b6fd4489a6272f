#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
use roulement::{
    calendar, io,
    model::{Participant, Team},
    report,
    scheduler::{AssignOptions, ConflictKind, Scheduler},
    storage::{JsonStorage, Storage},
};
use std::collections::BTreeSet;
use std::path::Path;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Répartition mensuelle des gardes (dimanche → jeudi)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lister les jours ouvrables d'un mois
    Workdays {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
        /// liste "YYYY-MM-DD,YYYY-MM-DD,..."
        #[arg(long)]
        exclude: Option<String>,
    },

    /// Afficher la configuration d'équipe chargée
    ShowTeam {
        /// Fichier d'équipe (CSV, ou JSON si extension .json)
        #[arg(long)]
        team: String,
    },

    /// Calculer le planning du mois
    Plan {
        #[arg(long)]
        team: String,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
        #[arg(long)]
        exclude: Option<String>,
        #[arg(long, default_value_t = 2)]
        fewer_shifts_factor: u32,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
        /// Vérifier le planning produit
        #[arg(long)]
        check: bool,
        /// Code de sortie 2 si des jours restent sans garde
        #[arg(long)]
        strict: bool,
    },

    /// Convertir une équipe entre CSV et JSON
    Convert {
        /// Équipe source (CSV, ou JSON si extension .json)
        #[arg(long, required_unless_present = "from_json", conflicts_with = "from_json")]
        team: Option<String>,
        /// Équipe source au format JSON, quelle que soit l'extension
        #[arg(long)]
        from_json: Option<String>,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },
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
        Commands::Workdays {
            year,
            month,
            exclude,
        } => {
            let excluded = parse_excluded(exclude.as_deref(), year, month)?;
            for date in calendar::resolve(year, month, &excluded)? {
                println!("{}", date.format("%Y-%m-%d %A"));
            }
            0
        }
        Commands::ShowTeam { team } => {
            let team = load_team(&team)?;
            print_team(&team);
            0
        }
        Commands::Plan {
            team,
            year,
            month,
            exclude,
            fewer_shifts_factor,
            out_json,
            out_csv,
            check,
            strict,
        } => {
            let team = load_team(&team)?;
            let excluded = parse_excluded(exclude.as_deref(), year, month)?;
            let scheduler = Scheduler::new(team).with_options(AssignOptions {
                fewer_shifts_factor,
            });

            let dates = calendar::resolve(year, month, &excluded)?;
            let blocked = scheduler.blocked_days(&dates);
            if !blocked.is_empty() {
                eprintln!("Constraint warnings:");
                eprint!("{}", report::render_blocked_days(&blocked));
            }

            let schedule = scheduler.assign(&dates)?;
            println!("Shift schedule for {month:02}/{year}");
            print!("{}", report::render_schedule(&schedule));

            if let Some(path) = out_json {
                io::export_schedule_json(path, &schedule)?;
            }
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, &schedule)?;
            }

            if check {
                let conflicts = scheduler.detect_conflicts(&schedule);
                if conflicts.is_empty() {
                    println!("OK: no conflicts");
                } else {
                    eprintln!("Found {} conflict(s)", conflicts.len());
                    for c in &conflicts {
                        eprintln!("  {} {} {}", c.participant, c.date, conflict_label(&c.kind));
                    }
                }
            }

            // Code 2 = WARNING/INCOMPLETE
            if strict && !schedule.is_complete() {
                2
            } else {
                0
            }
        }
        Commands::Convert {
            team,
            from_json,
            out_json,
            out_csv,
        } => {
            let team = match (team, from_json) {
                (_, Some(path)) => load_json_team(&path)?,
                (Some(path), None) => load_team(&path)?,
                (None, None) => bail!("--team or --from-json is required"),
            };
            if let Some(path) = out_json {
                JsonStorage::open(path)?.save(&team)?;
            }
            if let Some(path) = out_csv {
                io::export_team_csv(path, &team)?;
            }
            0
        }
    };

    std::process::exit(code);
}

fn load_team(path: &str) -> Result<Team> {
    let is_json = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json {
        return load_json_team(path);
    }
    let team = io::import_team_csv(path)?;
    team.validate()
        .with_context(|| format!("validating team {path}"))?;
    Ok(team)
}

/// `JsonStorage::load` valide déjà l'équipe.
fn load_json_team(path: &str) -> Result<Team> {
    JsonStorage::open(path)?.load()
}

/// Dates exclues ; celles hors du mois cible sont ignorées.
fn parse_excluded(raw: Option<&str>, year: i32, month: u32) -> Result<BTreeSet<NaiveDate>> {
    let mut out = BTreeSet::new();
    for chunk in raw.unwrap_or("").split(',').map(str::trim) {
        if chunk.is_empty() {
            continue;
        }
        let date = io::parse_date(chunk)?;
        if date.year() != year || date.month() != month {
            #[cfg(feature = "logging")]
            tracing::warn!(%date, "excluded date outside target month, ignored");
            eprintln!("Warning: {date} is not in {month:02}/{year}, ignored");
            continue;
        }
        out.insert(date);
    }
    Ok(out)
}

fn print_team(team: &Team) {
    let names: Vec<&str> = team.participants.iter().map(|p| p.name.as_str()).collect();
    println!("Participants: {}", names.join(", "));
    println!();
    println!("Constraints:");
    for p in &team.participants {
        println!("  {}: {}", p.name, describe_constraints(p));
    }
    let fewer: Vec<&str> = team.fewer_shifts().map(|p| p.name.as_str()).collect();
    if !fewer.is_empty() {
        println!();
        println!("Participants with fewer shifts: {}", fewer.join(", "));
    }
}

fn describe_constraints(p: &Participant) -> String {
    let mut parts = Vec::new();
    if !p.blocked_weekdays.is_empty() {
        let days: Vec<String> = p
            .blocked_weekdays_iter()
            .map(|d| format!("{d:?}"))
            .collect();
        parts.push(format!("weekdays: {}", days.join(", ")));
    }
    if !p.blocked_dates.is_empty() {
        let dates: Vec<String> = p.blocked_dates.iter().map(NaiveDate::to_string).collect();
        parts.push(format!("dates: {}", dates.join(", ")));
    }
    if parts.is_empty() {
        "no constraints".to_string()
    } else {
        parts.join(" | ")
    }
}

fn conflict_label(kind: &ConflictKind) -> &'static str {
    match kind {
        ConflictKind::ConsecutiveDays => "consecutive",
        ConflictKind::SameWeek => "same-week",
        ConflictKind::BlockedWeekday => "blocked-weekday",
        ConflictKind::BlockedDate => "blocked-date",
        ConflictKind::UnknownParticipant => "unknown",
    }
}
