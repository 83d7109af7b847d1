mod assignment;
mod conflicts;
mod types;
mod util;
mod vacancy;

pub use conflicts::detect_conflicts;
pub use types::{
    AssignOptions, AssignmentPass, Conflict, ConflictKind, Placement, ScheduleReport, SchedError,
    WorkTally,
};

use crate::grid::WeeklySchedule;
use crate::model::{DayOfWeek, PersonId, Roster, ShiftKind};
use chrono::Utc;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};
use uuid::Uuid;

/// Scheduler : possède le roster et la grille pendant un passage.
///
/// Chaque passage travaille sur sa propre grille ; rien n'est partagé entre
/// deux instances.
#[derive(Debug)]
pub struct Scheduler {
    roster: Roster,
    grid: WeeklySchedule,
    placements: Vec<Placement>,
}

impl Scheduler {
    pub fn new(mut roster: Roster) -> Self {
        roster.reset_counters();
        Self {
            roster,
            grid: WeeklySchedule::empty(),
            placements: Vec::new(),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn grid(&self) -> &WeeklySchedule {
        &self.grid
    }

    /// Résout les sept jours dans l'ordre, avec la source aléatoire fournie.
    pub fn run_with_rng<R: Rng>(&mut self, rng: &mut R) {
        for day in DayOfWeek::ALL {
            self.resolve_day(day, rng);
        }
    }

    /// Trois passes pour un jour ; le report vers le lendemain a lieu avant
    /// que ce lendemain ne soit traité.
    pub fn resolve_day<R: Rng>(&mut self, day: DayOfWeek, rng: &mut R) {
        let unassigned = self.assign_preferences(day);
        debug!(%day, unassigned = unassigned.len(), "preference pass done");
        self.assign_overflow(day, &unassigned);
        self.fill_vacancies(day, rng);
    }

    /// Passe 1. Renvoie les indices (dans `roster().people`) restés sans créneau.
    pub fn assign_preferences(&mut self, day: DayOfWeek) -> Vec<usize> {
        assignment::assign_preferences(self, day)
    }

    pub fn assign_overflow(&mut self, day: DayOfWeek, unassigned: &[usize]) {
        assignment::assign_overflow(self, day, unassigned)
    }

    pub fn fill_vacancies<R: Rng>(&mut self, day: DayOfWeek, rng: &mut R) {
        vacancy::fill_vacancies(self, day, rng)
    }

    /// Fige le résultat.
    pub fn finish(self, seed: u64) -> ScheduleReport {
        let tallies = self
            .roster
            .people
            .iter()
            .map(|p| WorkTally {
                person: p.id.clone(),
                days_worked: p.days_worked,
            })
            .collect();
        ScheduleReport {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            seed,
            schedule: self.grid,
            tallies,
            placements: self.placements,
        }
    }

    /// Place la personne d'indice `idx` et incrémente son compteur.
    fn place(&mut self, idx: usize, day: DayOfWeek, shift: ShiftKind, pass: AssignmentPass) {
        let person = &mut self.roster.people[idx];
        person.days_worked += 1;
        let id: PersonId = person.id.clone();
        self.grid.slot_mut(day, shift).seat(id.clone());
        self.placements.push(Placement {
            day,
            shift,
            person: id,
            pass,
        });
    }
}

/// Passage complet : roster → grille remplie (ou en sous-effectif).
pub fn generate(roster: Roster, opts: AssignOptions) -> ScheduleReport {
    let seed = opts.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut scheduler = Scheduler::new(roster);
    scheduler.run_with_rng(&mut rng);
    let report = scheduler.finish(seed);
    info!(
        seed,
        people = report.tallies.len(),
        seated = report.schedule.occupancy(),
        "weekly schedule generated"
    );
    report
}
