use std::collections::BTreeMap;

use crate::skill::{CharacterAttributes, CharacterClass};

/// Oracle providing base attributes per class.
pub trait ClassOracle: Send + Sync {
    fn attributes(&self, class: CharacterClass) -> Option<CharacterAttributes>;
}

#[derive(Clone, Debug, Default)]
pub struct ClassTable {
    attributes: BTreeMap<CharacterClass, CharacterAttributes>,
}

impl ClassTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, class: CharacterClass, attributes: CharacterAttributes) {
        self.attributes.insert(class, attributes);
    }

    pub fn iter(&self) -> impl Iterator<Item = (CharacterClass, &CharacterAttributes)> {
        self.attributes.iter().map(|(class, attrs)| (*class, attrs))
    }
}

impl FromIterator<(CharacterClass, CharacterAttributes)> for ClassTable {
    fn from_iter<T: IntoIterator<Item = (CharacterClass, CharacterAttributes)>>(iter: T) -> Self {
        Self {
            attributes: iter.into_iter().collect(),
        }
    }
}

impl ClassOracle for ClassTable {
    fn attributes(&self, class: CharacterClass) -> Option<CharacterAttributes> {
        self.attributes.get(&class).copied()
    }
}
