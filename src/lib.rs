#![forbid(unsafe_code)]
//! Roulement — répartition hebdomadaire d'une équipe sur des créneaux.
//!
//! - Grille fixe : 7 jours × (matin, après-midi, soir), 2 personnes par créneau.
//! - Trois passes par jour : préférences classées, report (jour même puis
//!   lendemain), complément aléatoire reproductible.
//! - Import CSV, rendu texte/HTML et stockage JSON en dehors du moteur.

pub mod grid;
pub mod io;
pub mod model;
pub mod render;
pub mod scheduler;
pub mod storage;

pub use grid::{Slot, SlotState, WeeklySchedule, SLOT_CAPACITY};
pub use model::{DayOfWeek, Person, PersonId, Preferences, Roster, ShiftKind};
pub use render::{GridRenderer, HtmlTable, TextGrid};
pub use scheduler::{
    detect_conflicts, generate, AssignOptions, AssignmentPass, Conflict, ConflictKind, Placement,
    ScheduleReport, SchedError, Scheduler, WorkTally,
};
pub use storage::{JsonStorage, Storage};
