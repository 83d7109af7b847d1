#![forbid(unsafe_code)]
use roulement::{
    generate, io, AssignOptions, DayOfWeek, JsonStorage, ShiftKind, Storage,
};
use std::fs;
use tempfile::tempdir;

#[test]
fn import_ranked_sheet() {
    let csv = "\
name,Monday_1,Monday_2,Monday_3,Tuesday_1
Alice,Evening (18:00 - 22:00),Morning,,afternoon
Bob,garbage,Afternoon,Evening,
";
    let roster = io::read_preferences(csv.as_bytes()).unwrap();
    assert_eq!(roster.len(), 2);

    let alice = roster.find_person("Alice").unwrap();
    assert_eq!(
        alice.ranked_for(DayOfWeek::Monday),
        [ShiftKind::Evening, ShiftKind::Morning]
    );
    assert_eq!(alice.ranked_for(DayOfWeek::Tuesday), [ShiftKind::Afternoon]);
    assert!(alice.ranked_for(DayOfWeek::Sunday).is_empty());

    let bob = roster.find_person("Bob").unwrap();
    assert_eq!(
        bob.ranked_for(DayOfWeek::Monday),
        [ShiftKind::Afternoon, ShiftKind::Evening]
    );
    assert!(bob.ranked_for(DayOfWeek::Tuesday).is_empty());
}

#[test]
fn import_single_sheet_defaults_to_morning() {
    let csv = "\
name,Monday,Tuesday
Carol,Evening,???
";
    let roster = io::read_preferences(csv.as_bytes()).unwrap();
    let carol = roster.find_person("Carol").unwrap();
    assert_eq!(carol.ranked_for(DayOfWeek::Monday), [ShiftKind::Evening]);
    assert_eq!(carol.ranked_for(DayOfWeek::Tuesday), [ShiftKind::Morning]);
    assert_eq!(carol.ranked_for(DayOfWeek::Sunday), [ShiftKind::Morning]);
}

#[test]
fn import_rejects_empty_name_and_missing_column() {
    assert!(io::read_preferences("name,Monday_1\n ,Morning\n".as_bytes()).is_err());
    assert!(io::read_preferences("who,Monday_1\nAlice,Morning\n".as_bytes()).is_err());
}

#[test]
fn import_from_file_then_generate() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("prefs.csv");
    fs::write(&path, "name,Monday_1\nAlice,Morning\nBob,Morning\nCarol,Morning\n").unwrap();

    let roster = io::import_preferences_csv(&path).unwrap();
    let report = generate(roster, AssignOptions::seeded(1));
    assert_eq!(io::join_names(&report, DayOfWeek::Monday, ShiftKind::Morning), "Alice, Bob");
}

#[test]
fn save_and_load_report_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.json");
    let roster = io::read_preferences("name,Monday_1\nAlice,Morning\nBob,Evening\n".as_bytes()).unwrap();
    let report = generate(roster, AssignOptions::seeded(5));

    let storage = JsonStorage::open(&path).unwrap();
    storage.save(&report).unwrap();
    let loaded = storage.load().unwrap();
    assert_eq!(loaded, report);
}

#[test]
fn load_rejects_inconsistent_tallies() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.json");
    let roster = io::read_preferences("name,Monday_1\nAlice,Morning\n".as_bytes()).unwrap();
    let report = generate(roster, AssignOptions::seeded(5));

    let mut json = serde_json::to_value(&report).unwrap();
    json["tallies"][0]["days_worked"] = serde_json::json!(99);
    fs::write(&path, serde_json::to_vec(&json).unwrap()).unwrap();

    let err = JsonStorage::open(&path).unwrap().load().unwrap_err();
    assert!(format!("{err:#}").contains("tallies"));
}

#[test]
fn export_grid_and_tallies_csv() {
    let dir = tempdir().unwrap();
    let roster = io::read_preferences("name,Monday_1\nAlice,Morning\nBob,Morning\n".as_bytes()).unwrap();
    let report = generate(roster, AssignOptions::seeded(2));

    let grid_path = dir.path().join("grid.csv");
    io::export_schedule_csv(&grid_path, &report).unwrap();
    let grid = fs::read_to_string(&grid_path).unwrap();
    let mut lines = grid.lines();
    assert_eq!(lines.next(), Some("Day,Morning,Afternoon,Evening"));
    assert_eq!(lines.next(), Some("Monday,\"Alice, Bob\",,"));
    assert_eq!(grid.lines().count(), 8);

    let tally_path = dir.path().join("tally.csv");
    io::export_tallies_csv(&tally_path, &report).unwrap();
    let tally = fs::read_to_string(&tally_path).unwrap();
    assert_eq!(tally, "name,days_worked\nAlice,7\nBob,7\n");
}
