use crate::model::{DayOfWeek, PersonId, ShiftKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Nombre maximal de personnes par créneau.
pub const SLOT_CAPACITY: usize = 2;

/// État d'un créneau. `UnderstaffedFinal` n'existe qu'après le passage complet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Empty,
    PartiallyFilled,
    Full,
    UnderstaffedFinal,
}

/// Créneau (jour, type) : occupants dans l'ordre d'insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slot {
    assigned: Vec<PersonId>,
}

impl Slot {
    pub fn assigned(&self) -> &[PersonId] {
        &self.assigned
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    pub fn has_room(&self) -> bool {
        self.assigned.len() < SLOT_CAPACITY
    }

    pub fn contains(&self, person: &PersonId) -> bool {
        self.assigned.contains(person)
    }

    pub fn state(&self) -> SlotState {
        match self.assigned.len() {
            0 => SlotState::Empty,
            n if n < SLOT_CAPACITY => SlotState::PartiallyFilled,
            _ => SlotState::Full,
        }
    }

    /// Ajoute un occupant. Dépasser la capacité est une erreur de programmation.
    pub(crate) fn seat(&mut self, person: PersonId) {
        assert!(self.has_room(), "slot over capacity while seating {person}");
        self.assigned.push(person);
    }
}

/// Grille hebdomadaire complète : 7 jours × 3 créneaux.
///
/// Toujours construite vide ; seule l'assignation la modifie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "GridRepr", try_from = "GridRepr")]
pub struct WeeklySchedule {
    slots: [[Slot; 3]; 7],
}

type GridRepr = BTreeMap<DayOfWeek, BTreeMap<ShiftKind, Vec<PersonId>>>;

impl WeeklySchedule {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn slot(&self, day: DayOfWeek, shift: ShiftKind) -> &Slot {
        &self.slots[day.index()][shift.index()]
    }

    pub(crate) fn slot_mut(&mut self, day: DayOfWeek, shift: ShiftKind) -> &mut Slot {
        &mut self.slots[day.index()][shift.index()]
    }

    /// Premier créneau du jour avec de la place, dans l'ordre fixe.
    pub fn first_open(&self, day: DayOfWeek) -> Option<ShiftKind> {
        ShiftKind::ALL
            .into_iter()
            .find(|&k| self.slot(day, k).has_room())
    }

    /// Vrai si la personne occupe déjà un créneau du jour.
    pub fn is_seated_on(&self, day: DayOfWeek, person: &PersonId) -> bool {
        self.slots[day.index()].iter().any(|s| s.contains(person))
    }

    /// Parcourt les 21 créneaux dans l'ordre calendrier puis l'ordre des types.
    pub fn iter(&self) -> impl Iterator<Item = (DayOfWeek, ShiftKind, &Slot)> + '_ {
        DayOfWeek::ALL.into_iter().flat_map(move |day| {
            ShiftKind::ALL
                .into_iter()
                .map(move |shift| (day, shift, self.slot(day, shift)))
        })
    }

    /// Nombre total de triplets (jour, créneau, occupant).
    pub fn occupancy(&self) -> usize {
        self.iter().map(|(_, _, s)| s.len()).sum()
    }
}

impl From<WeeklySchedule> for GridRepr {
    fn from(grid: WeeklySchedule) -> Self {
        let mut out = GridRepr::new();
        for (day, shift, slot) in grid.iter() {
            out.entry(day)
                .or_default()
                .insert(shift, slot.assigned.clone());
        }
        out
    }
}

impl TryFrom<GridRepr> for WeeklySchedule {
    type Error = String;

    fn try_from(repr: GridRepr) -> Result<Self, Self::Error> {
        let mut grid = WeeklySchedule::empty();
        for (day, shifts) in repr {
            for (shift, people) in shifts {
                if people.len() > SLOT_CAPACITY {
                    return Err(format!(
                        "{day}/{shift} holds {} people (capacity {SLOT_CAPACITY})",
                        people.len()
                    ));
                }
                grid.slot_mut(day, shift).assigned = people;
            }
        }
        Ok(grid)
    }
}
