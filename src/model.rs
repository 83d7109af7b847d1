use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Jour de la semaine, dans l'ordre du calendrier (lundi → dimanche).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Position dans la semaine (lundi = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Jour suivant ; le dimanche n'a pas de successeur.
    pub fn next(self) -> Option<DayOfWeek> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DayOfWeek {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown day: {wanted}"))
    }
}

impl From<chrono::Weekday> for DayOfWeek {
    fn from(w: chrono::Weekday) -> Self {
        Self::ALL[w.num_days_from_monday() as usize]
    }
}

/// Type de créneau ; l'ordre de déclaration sert d'ordre de départage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShiftKind {
    Morning,
    Afternoon,
    Evening,
}

impl ShiftKind {
    pub const ALL: [ShiftKind; 3] = [ShiftKind::Morning, ShiftKind::Afternoon, ShiftKind::Evening];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ShiftKind::Morning => "Morning",
            ShiftKind::Afternoon => "Afternoon",
            ShiftKind::Evening => "Evening",
        }
    }

    /// Extrait le créneau d'une cellule « humaine », ex. `"Morning (8:00 AM - 12:00 PM)"`.
    ///
    /// Recherche insensible à la casse, dans l'ordre matin / après-midi / soir.
    pub fn extract(cell: &str) -> Option<ShiftKind> {
        let value = cell.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| value.contains(&k.name().to_lowercase()))
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShiftKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown shift: {wanted}"))
    }
}

/// Identifiant fort pour Person : le nom, unique dans un roster.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PersonId(String);

impl PersonId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Préférences classées par jour (rang 1 = premier élément).
pub type Preferences = BTreeMap<DayOfWeek, Vec<ShiftKind>>;

/// Personne à planifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub days_worked: u32,
}

impl Person {
    pub fn new<S: AsRef<str>>(name: S) -> Self {
        Self {
            id: PersonId::new(name),
            preferences: Preferences::new(),
            days_worked: 0,
        }
    }

    /// Ajoute (ou remplace) la liste classée d'un jour.
    pub fn with_preferences<I>(mut self, day: DayOfWeek, ranked: I) -> Self
    where
        I: IntoIterator<Item = ShiftKind>,
    {
        self.preferences.insert(day, ranked.into_iter().collect());
        self
    }

    /// Même liste classée pour les sept jours.
    pub fn with_weekly_preferences(mut self, ranked: &[ShiftKind]) -> Self {
        for day in DayOfWeek::ALL {
            self.preferences.insert(day, ranked.to_vec());
        }
        self
    }

    /// Préférences du jour ; vide si rien n'a été exprimé.
    pub fn ranked_for(&self, day: DayOfWeek) -> &[ShiftKind] {
        self.preferences.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Ensemble ordonné des personnes (ordre de construction).
///
/// Un nom en double remplace les préférences de l'entrée existante sans
/// changer sa position (dernier écrit gagnant).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Roster {
    pub people: Vec<Person>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&mut self, person: Person) {
        match self.people.iter_mut().find(|p| p.id == person.id) {
            Some(existing) => existing.preferences = person.preferences,
            None => self.people.push(person),
        }
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn find_person<'a>(&'a self, name: &str) -> Option<&'a Person> {
        self.people.iter().find(|p| p.id.as_str() == name)
    }

    /// Remet les compteurs à zéro avant un nouveau passage.
    pub fn reset_counters(&mut self) {
        for p in &mut self.people {
            p.days_worked = 0;
        }
    }
}

impl FromIterator<Person> for Roster {
    fn from_iter<T: IntoIterator<Item = Person>>(iter: T) -> Self {
        let mut roster = Roster::new();
        for person in iter {
            roster.upsert(person);
        }
        roster
    }
}
