#![forbid(unsafe_code)]
use roulement::{generate, AssignOptions, DayOfWeek, GridRenderer, HtmlTable, Person, Roster, ShiftKind, TextGrid};

fn three_on_monday_morning() -> Roster {
    ["Alice", "Bob", "Carol"]
        .into_iter()
        .map(|n| Person::new(n).with_preferences(DayOfWeek::Monday, [ShiftKind::Morning]))
        .collect()
}

#[test]
fn text_grid_layout() {
    let report = generate(three_on_monday_morning(), AssignOptions::seeded(1));
    let out = TextGrid.render(&report);
    insta::assert_snapshot!(out.trim_end(), @r"
    +-----------+------------+-----------+---------+
    | Day       | Morning    | Afternoon | Evening |
    +===========+============+===========+=========+
    | Monday    | Alice, Bob | Carol     |         |
    +-----------+------------+-----------+---------+
    | Tuesday   | Alice, Bob | Carol     |         |
    +-----------+------------+-----------+---------+
    | Wednesday | Alice, Bob | Carol     |         |
    +-----------+------------+-----------+---------+
    | Thursday  | Alice, Bob | Carol     |         |
    +-----------+------------+-----------+---------+
    | Friday    | Alice, Bob | Carol     |         |
    +-----------+------------+-----------+---------+
    | Saturday  | Alice, Bob | Carol     |         |
    +-----------+------------+-----------+---------+
    | Sunday    | Alice, Bob | Carol     |         |
    +-----------+------------+-----------+---------+
    ");
}

#[test]
fn html_table_escapes_names() {
    let roster: Roster = [Person::new("Tom & <Jerry>").with_preferences(DayOfWeek::Monday, [ShiftKind::Evening])]
        .into_iter()
        .collect();
    let report = generate(roster, AssignOptions::seeded(1));
    let html = HtmlTable.render(&report);

    assert!(html.starts_with("<h2>Final Weekly Schedule</h2>"));
    assert!(html.contains("<tr><th>Day</th><th>Morning</th><th>Afternoon</th><th>Evening</th></tr>"));
    assert!(html.contains("<tr><td>Monday</td><td></td><td></td><td>Tom &amp; &lt;Jerry&gt;</td></tr>"));
    assert_eq!(html.matches("<tr><td>").count(), 7);
}
