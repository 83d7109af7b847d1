use crate::grid::{SlotState, WeeklySchedule};
use crate::model::{DayOfWeek, PersonId, ShiftKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Options d'assignation
#[derive(Debug, Clone, Copy, Default)]
pub struct AssignOptions {
    /// Graine du tirage aléatoire ; `None` = graine fraîche à chaque passage.
    pub seed: Option<u64>,
}

impl AssignOptions {
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

/// Passe ayant produit une affectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentPass {
    Preference,
    SameDay,
    Overflow,
    Vacancy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub day: DayOfWeek,
    pub shift: ShiftKind,
    pub person: PersonId,
    pub pass: AssignmentPass,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictKind {
    /// Même personne sur deux créneaux du même jour.
    DoubleBooking {
        first: ShiftKind,
        second: ShiftKind,
        via_overflow: bool,
    },
    /// Créneau figé sous la capacité.
    Understaffed { shift: ShiftKind, seated: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub day: DayOfWeek,
    pub person: Option<PersonId>,
    pub kind: ConflictKind,
}

/// Compteur final d'une personne.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkTally {
    pub person: PersonId,
    pub days_worked: u32,
}

/// Résultat figé d'un passage : grille en lecture seule + compteurs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub seed: u64,
    pub(crate) schedule: WeeklySchedule,
    pub(crate) tallies: Vec<WorkTally>,
    #[serde(default)]
    pub(crate) placements: Vec<Placement>,
}

impl ScheduleReport {
    pub fn schedule(&self) -> &WeeklySchedule {
        &self.schedule
    }

    pub fn assigned(&self, day: DayOfWeek, shift: ShiftKind) -> &[PersonId] {
        self.schedule.slot(day, shift).assigned()
    }

    /// Vue plate (jour, créneau, occupants) pour les formateurs externes.
    pub fn iter(&self) -> impl Iterator<Item = (DayOfWeek, ShiftKind, &[PersonId])> + '_ {
        self.schedule
            .iter()
            .map(|(day, shift, slot)| (day, shift, slot.assigned()))
    }

    /// État final : tout créneau incomplet est `UnderstaffedFinal`.
    pub fn slot_state(&self, day: DayOfWeek, shift: ShiftKind) -> SlotState {
        match self.schedule.slot(day, shift).state() {
            SlotState::Full => SlotState::Full,
            _ => SlotState::UnderstaffedFinal,
        }
    }

    pub fn days_worked(&self) -> &[WorkTally] {
        &self.tallies
    }

    pub fn tally_for(&self, name: &str) -> Result<u32, SchedError> {
        self.tallies
            .iter()
            .find(|t| t.person.as_str() == name)
            .map(|t| t.days_worked)
            .ok_or_else(|| SchedError::UnknownPerson(name.to_string()))
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Vérifie qu'un rapport relu est cohérent : la somme des compteurs doit
    /// égaler le nombre d'occupants de la grille.
    pub fn validate(&self) -> Result<(), SchedError> {
        let worked: u64 = self.tallies.iter().map(|t| u64::from(t.days_worked)).sum();
        let seated = self.schedule.occupancy() as u64;
        if worked != seated {
            return Err(SchedError::InvalidSchedule(format!(
                "tallies sum to {worked} but the grid seats {seated}"
            )));
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("unknown person: {0}")]
    UnknownPerson(String),
    #[error("invalid schedule data: {0}")]
    InvalidSchedule(String),
}
