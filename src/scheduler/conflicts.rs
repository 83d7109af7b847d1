use super::{util, AssignmentPass, Conflict, ConflictKind, ScheduleReport};
use crate::grid::SLOT_CAPACITY;
use crate::model::{DayOfWeek, ShiftKind};

/// Détecte les doubles affectations sur un même jour et les créneaux en
/// sous-effectif. Ne modifie jamais la grille.
pub fn detect_conflicts(report: &ScheduleReport) -> Vec<Conflict> {
    let mut out = Vec::new();
    let grid = report.schedule();

    for day in DayOfWeek::ALL {
        for tally in report.days_worked() {
            let held = util::shifts_held(grid, day, &tally.person);
            if held.len() < 2 {
                continue;
            }
            let via_overflow = report.placements().iter().any(|p| {
                p.day == day && p.person == tally.person && p.pass == AssignmentPass::Overflow
            });
            for (idx, first) in held.iter().enumerate() {
                for second in held.iter().skip(idx + 1) {
                    out.push(Conflict {
                        day,
                        person: Some(tally.person.clone()),
                        kind: ConflictKind::DoubleBooking {
                            first: *first,
                            second: *second,
                            via_overflow,
                        },
                    });
                }
            }
        }

        for shift in ShiftKind::ALL {
            let seated = grid.slot(day, shift).len();
            if seated < SLOT_CAPACITY {
                out.push(Conflict {
                    day,
                    person: None,
                    kind: ConflictKind::Understaffed { shift, seated },
                });
            }
        }
    }

    out
}
