use crate::grid::WeeklySchedule;
use crate::model::{DayOfWeek, PersonId, ShiftKind};

/// Premier créneau libre du lendemain, s'il existe un lendemain.
pub(super) fn next_day_opening(
    grid: &WeeklySchedule,
    day: DayOfWeek,
) -> Option<(DayOfWeek, ShiftKind)> {
    let next = day.next()?;
    grid.first_open(next).map(|shift| (next, shift))
}

/// Créneaux du jour occupés par la personne, dans l'ordre fixe (doublons inclus).
pub(super) fn shifts_held(grid: &WeeklySchedule, day: DayOfWeek, person: &PersonId) -> Vec<ShiftKind> {
    ShiftKind::ALL
        .into_iter()
        .flat_map(|shift| {
            let n = grid
                .slot(day, shift)
                .assigned()
                .iter()
                .filter(|p| *p == person)
                .count();
            std::iter::repeat(shift).take(n)
        })
        .collect()
}
