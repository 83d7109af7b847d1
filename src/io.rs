use crate::model::{DayOfWeek, Person, Roster, ShiftKind};
use crate::scheduler::ScheduleReport;
use anyhow::{bail, Context};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Nombre maximal de rangs lus par jour (`Monday_1` .. `Monday_3`).
pub const MAX_RANKS: usize = 3;

/// Variante de feuille de préférences détectée depuis l'en-tête.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetLayout {
    /// Colonnes `<Jour>_1`, `<Jour>_2`, `<Jour>_3` ; cellules illisibles ignorées.
    Ranked,
    /// Une colonne `<Jour>` ; cellule vide ou illisible = Morning.
    Single,
}

/// Import des préférences depuis un fichier CSV: header `name,...`
pub fn import_preferences_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Roster> {
    let path = path.as_ref();
    let file = fs::File::open(path).with_context(|| format!("reading {}", path.display()))?;
    read_preferences(file).with_context(|| format!("parsing {}", path.display()))
}

/// Même chose depuis n'importe quelle source (upload, stdin...).
pub fn read_preferences<R: Read>(input: R) -> anyhow::Result<Roster> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);
    let headers = rdr.headers()?.clone();
    let name_col = column(&headers, "name").context("missing name column")?;
    let layout = detect_layout(&headers);

    let mut roster = Roster::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(name_col).unwrap_or("").trim();
        if name.is_empty() {
            bail!("invalid preference row (empty name)");
        }
        let mut person = Person::new(name);
        for day in DayOfWeek::ALL {
            let ranked = match layout {
                SheetLayout::Ranked => ranked_cells(&headers, &rec, day),
                SheetLayout::Single => vec![single_cell(&headers, &rec, day)],
            };
            person = person.with_preferences(day, ranked);
        }
        roster.upsert(person);
    }
    Ok(roster)
}

pub fn detect_layout(headers: &StringRecord) -> SheetLayout {
    let ranked = DayOfWeek::ALL
        .into_iter()
        .any(|day| column(headers, &format!("{day}_1")).is_some());
    if ranked {
        SheetLayout::Ranked
    } else {
        SheetLayout::Single
    }
}

fn column(headers: &StringRecord, wanted: &str) -> Option<usize> {
    headers.iter().position(|h| h.eq_ignore_ascii_case(wanted))
}

fn ranked_cells(headers: &StringRecord, rec: &StringRecord, day: DayOfWeek) -> Vec<ShiftKind> {
    (1..=MAX_RANKS)
        .filter_map(|rank| column(headers, &format!("{day}_{rank}")))
        .filter_map(|col| rec.get(col))
        .filter_map(ShiftKind::extract)
        .collect()
}

fn single_cell(headers: &StringRecord, rec: &StringRecord, day: DayOfWeek) -> ShiftKind {
    column(headers, day.name())
        .and_then(|col| rec.get(col))
        .and_then(ShiftKind::extract)
        .unwrap_or(ShiftKind::Morning)
}

/// Export CSV de la grille: header `Day,Morning,Afternoon,Evening`
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, report: &ScheduleReport) -> anyhow::Result<()> {
    let w = WriterBuilder::new().has_headers(false).from_path(path)?;
    write_schedule_csv(w, report)
}

/// Grille CSV en mémoire, pour l'affichage.
pub fn schedule_csv_string(report: &ScheduleReport) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    {
        let w = WriterBuilder::new().has_headers(false).from_writer(&mut buf);
        write_schedule_csv(w, report)?;
    }
    Ok(String::from_utf8(buf)?)
}

fn write_schedule_csv<W: std::io::Write>(
    mut w: csv::Writer<W>,
    report: &ScheduleReport,
) -> anyhow::Result<()> {
    let mut header = vec!["Day"];
    header.extend(ShiftKind::ALL.iter().map(|k| k.name()));
    w.write_record(&header)?;
    for day in DayOfWeek::ALL {
        let mut row = vec![day.name().to_string()];
        for shift in ShiftKind::ALL {
            row.push(join_names(report, day, shift));
        }
        w.write_record(&row)?;
    }
    w.flush()?;
    Ok(())
}

/// Export CSV des compteurs: header `name,days_worked`
pub fn export_tallies_csv<P: AsRef<Path>>(path: P, report: &ScheduleReport) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(false).from_path(path)?;
    w.write_record(["name", "days_worked"])?;
    for t in report.days_worked() {
        let worked = t.days_worked.to_string();
        w.write_record([t.person.as_str(), worked.as_str()])?;
    }
    w.flush()?;
    Ok(())
}

/// Noms d'un créneau séparés par `", "`.
pub fn join_names(report: &ScheduleReport, day: DayOfWeek, shift: ShiftKind) -> String {
    report
        .assigned(day, shift)
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
