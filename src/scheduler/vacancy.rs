use super::{AssignmentPass, Scheduler};
use crate::grid::SlotState;
use crate::model::{DayOfWeek, ShiftKind};
use rand::Rng;
use tracing::debug;

/// Passe 3 : complète chaque créneau du jour par tirage uniforme parmi les
/// personnes pas encore placées ce jour-là.
pub(super) fn fill_vacancies<R: Rng>(
    scheduler: &mut Scheduler,
    day: DayOfWeek,
    rng: &mut R,
) {
    for shift in ShiftKind::ALL {
        let mut available: Vec<usize> = (0..scheduler.roster.people.len())
            .filter(|&idx| {
                !scheduler
                    .grid
                    .is_seated_on(day, &scheduler.roster.people[idx].id)
            })
            .collect();

        while scheduler.grid.slot(day, shift).has_room() && !available.is_empty() {
            let pick = rng.random_range(0..available.len());
            let idx = available.remove(pick);
            scheduler.place(idx, day, shift, AssignmentPass::Vacancy);
        }

        let slot = scheduler.grid.slot(day, shift);
        if slot.state() != SlotState::Full {
            debug!(%day, %shift, seated = slot.len(), "slot left understaffed");
        }
    }
}
