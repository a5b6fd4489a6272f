use crate::model::{Participant, Team};
use crate::scheduler::Schedule;
use anyhow::{bail, Context};
use chrono::{Datelike, NaiveDate};
use csv::{ReaderBuilder, StringRecord, Writer, WriterBuilder};
use std::collections::BTreeSet;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

/// En-tête du fichier d'équipe.
pub const TEAM_HEADER: [&str; 4] = ["name", "weekday_blocks", "date_blocks", "fewer_shifts"];

/// Formats acceptés pour une date, essayés dans l'ordre.
const DATE_FORMATS: [&str; 8] = [
    "%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y", "%Y/%m/%d", "%m-%d-%Y", "%d-%m-%Y", "%m/%d/%y",
    "%d/%m/%y",
];

/// Import d'une équipe depuis CSV: header `name,weekday_blocks,date_blocks,fewer_shifts`
pub fn import_team_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Team> {
    let path = path.as_ref();
    let file = fs::File::open(path).with_context(|| format!("reading {}", path.display()))?;
    read_team_csv(file).with_context(|| format!("parsing team file {}", path.display()))
}

pub fn read_team_csv<R: Read>(reader: R) -> anyhow::Result<Team> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();
    let col = |name: &str| column(&headers, name);
    let (name_col, weekday_col, date_col, fewer_col) = (
        col("name").context("missing name column")?,
        col("weekday_blocks"),
        col("date_blocks"),
        col("fewer_shifts"),
    );

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(name_col).unwrap_or("").trim();
        if name.is_empty() {
            bail!("invalid team row (empty name)");
        }
        let field = |idx: Option<usize>| idx.and_then(|i| rec.get(i)).unwrap_or("").trim();

        let mut person = Participant::new(name);
        person.blocked_weekdays = parse_weekdays(field(weekday_col))
            .with_context(|| format!("invalid weekday_blocks for {name}"))?;
        person.blocked_dates = parse_dates(field(date_col))
            .with_context(|| format!("invalid date_blocks for {name}"))?;
        let flag = field(fewer_col);
        if !flag.is_empty() {
            person.fewer_shifts =
                parse_bool(flag).with_context(|| format!("invalid fewer_shifts for {name}"))?;
        }
        out.push(person);
    }
    Ok(Team::new(out))
}

fn column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().trim_start_matches('\u{feff}').eq_ignore_ascii_case(name))
}

fn parse_bool(s: &str) -> anyhow::Result<bool> {
    match s.to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "1" => Ok(true),
        "no" | "n" | "false" | "0" => Ok(false),
        _ => bail!("expected YES/NO"),
    }
}

fn parse_weekdays(raw: &str) -> anyhow::Result<BTreeSet<u8>> {
    raw.split(';')
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| {
            chunk
                .parse::<u8>()
                .with_context(|| format!("invalid weekday code: {chunk}"))
        })
        .collect()
}

fn parse_dates(raw: &str) -> anyhow::Result<BTreeSet<NaiveDate>> {
    raw.split(';')
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(parse_date)
        .collect()
}

/// Parse une date saisie à la main ou passée par un tableur.
///
/// L'apostrophe de protection en tête est retirée. Une année sur deux chiffres
/// ne doit pas être lue comme l'an 25 par un format `%Y`.
pub fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    let raw = raw.trim().trim_start_matches('\'');
    DATE_FORMATS
        .iter()
        .find_map(|fmt| {
            NaiveDate::parse_from_str(raw, fmt)
                .ok()
                .filter(|d| d.year() >= 1000)
        })
        .with_context(|| format!("could not parse date: {raw}"))
}

/// Export CSV de l'équipe (dates protégées par une apostrophe)
pub fn export_team_csv<P: AsRef<Path>>(path: P, team: &Team) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file = fs::File::create(path).with_context(|| format!("writing {}", path.display()))?;
    write_team_csv(file, team)
}

pub fn write_team_csv<W: Write>(writer: W, team: &Team) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_writer(writer);
    w.write_record(TEAM_HEADER)?;
    for p in &team.participants {
        let weekdays = p
            .blocked_weekdays
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(";");
        let dates = p
            .blocked_dates
            .iter()
            .map(|d| format!("'{d}"))
            .collect::<Vec<_>>()
            .join(";");
        let fewer = if p.fewer_shifts { "YES" } else { "NO" };
        w.write_record([p.name.as_str(), weekdays.as_str(), dates.as_str(), fewer])?;
    }
    w.flush()?;
    Ok(())
}

/// Export JSON du planning (jolie mise en forme)
pub fn export_schedule_json<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(schedule)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV du planning: header `date,weekday,assigned`, trous compris (assigned vide)
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let path = path.as_ref();
    let w = Writer::from_path(path).with_context(|| format!("writing {}", path.display()))?;
    write_schedule_csv(w, schedule)
}

fn write_schedule_csv<W: Write>(mut w: Writer<W>, schedule: &Schedule) -> anyhow::Result<()> {
    w.write_record(["date", "weekday", "assigned"])?;
    let mut rows: Vec<(NaiveDate, &str)> = schedule
        .assignments
        .iter()
        .map(|(date, name)| (*date, name.as_str()))
        .chain(schedule.gaps.iter().map(|date| (*date, "")))
        .collect();
    rows.sort_by_key(|(date, _)| *date);
    for (date, name) in rows {
        let day = date.format("%A").to_string();
        let date = date.to_string();
        w.write_record([date.as_str(), day.as_str(), name])?;
    }
    w.flush()?;
    Ok(())
}
