use super::{util, AssignmentPass, Scheduler};
use crate::model::DayOfWeek;
use tracing::debug;

/// Passe 1 : chaque personne, dans l'ordre du roster, prend le premier
/// créneau classé qui a encore de la place.
pub(super) fn assign_preferences(scheduler: &mut Scheduler, day: DayOfWeek) -> Vec<usize> {
    let mut unassigned = Vec::new();

    for idx in 0..scheduler.roster.people.len() {
        let chosen = scheduler.roster.people[idx]
            .ranked_for(day)
            .iter()
            .copied()
            .find(|&shift| scheduler.grid.slot(day, shift).has_room());

        match chosen {
            Some(shift) => scheduler.place(idx, day, shift, AssignmentPass::Preference),
            None => unassigned.push(idx),
        }
    }

    unassigned
}

/// Passe 2 : les laissés-pour-compte prennent le premier créneau libre du
/// jour, sinon du lendemain. Le dimanche, ils sont abandonnés.
pub(super) fn assign_overflow(scheduler: &mut Scheduler, day: DayOfWeek, unassigned: &[usize]) {
    for &idx in unassigned {
        if let Some(shift) = scheduler.grid.first_open(day) {
            scheduler.place(idx, day, shift, AssignmentPass::SameDay);
            continue;
        }

        match util::next_day_opening(&scheduler.grid, day) {
            Some((next, shift)) => {
                debug!(
                    person = %scheduler.roster.people[idx].id,
                    from = %day,
                    to = %next,
                    %shift,
                    "overflow into next day"
                );
                scheduler.place(idx, next, shift, AssignmentPass::Overflow);
            }
            None => {
                debug!(person = %scheduler.roster.people[idx].id, %day, "no room left, dropped");
            }
        }
    }
}
