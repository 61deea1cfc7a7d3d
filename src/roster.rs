use crate::error::GameError;
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Built-in character roster, mirroring the shipped image set.
pub const DEFAULT_CHARACTERS: &[&str] = &[
    "anpanman", "conan", "doraemon", "goku", "kirby", "luffy", "mario", "naruto", "pikachu",
    "sonic", "totoro",
];

/// A playable character. Identity is the name, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    name: String,
}

impl Character {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercase identity key used for used/excluded bookkeeping.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Roster with draw-without-replacement sampling and an exclusion list.
#[derive(Debug, Clone)]
pub struct CharacterPool {
    characters: Vec<Character>,
    excluded: HashSet<String>,
}

impl CharacterPool {
    /// Build a pool from a roster and a set of policy-excluded names.
    ///
    /// Fails when nothing is drawable after exclusions; that is a
    /// configuration fault, not a runtime condition.
    pub fn new<I, S>(characters: Vec<Character>, excluded_names: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let excluded: HashSet<String> = excluded_names
            .into_iter()
            .map(|n| n.as_ref().to_lowercase())
            .collect();

        let pool = Self {
            characters,
            excluded,
        };

        if pool.selectable().is_empty() {
            return Err(GameError::NoCharactersAvailable);
        }

        Ok(pool)
    }

    pub fn with_default_roster<I, S>(excluded_names: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let characters = DEFAULT_CHARACTERS.iter().copied().map(Character::new).collect();
        Self::new(characters, excluded_names)
    }

    fn selectable(&self) -> Vec<&Character> {
        self.characters
            .iter()
            .filter(|c| !self.excluded.contains(&c.key()))
            .collect()
    }

    /// Draw a random character that hasn't been used yet, recording it in
    /// `used`. When every selectable character has been used, the used set
    /// is cleared and the pool recycles instead of failing.
    pub fn draw_next(&self, used: &mut HashSet<String>) -> Character {
        let selectable = self.selectable();
        let mut available: Vec<&Character> = selectable
            .iter()
            .copied()
            .filter(|c| !used.contains(&c.key()))
            .collect();

        if available.is_empty() {
            used.clear();
            available = selectable;
        }

        let mut rng = rand::thread_rng();
        let chosen = available
            .choose(&mut rng)
            .expect("pool validated non-empty at construction");

        used.insert(chosen.key());
        (*chosen).clone()
    }
}
