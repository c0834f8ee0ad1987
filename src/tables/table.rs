use std::collections::HashMap;

use crate::models::NutrientEntry;

/// Read-only food → nutrient lookup.
///
/// Entries keep their declaration order for display; lookups are exact on
/// the food name.
#[derive(Debug, Clone, Default)]
pub struct NutrientTable {
    entries: Vec<NutrientEntry>,
    index: HashMap<String, usize>,
}

impl NutrientTable {
    /// Build a table from entries.
    ///
    /// A repeated name replaces the earlier entry in place (last occurrence wins).
    pub fn new(entries: Vec<NutrientEntry>) -> Self {
        let mut table = Self::default();
        for entry in entries {
            match table.index.get(&entry.name) {
                Some(&pos) => table.entries[pos] = entry,
                None => {
                    table.index.insert(entry.name.clone(), table.entries.len());
                    table.entries.push(entry);
                }
            }
        }
        table
    }

    pub fn get(&self, name: &str) -> Option<&NutrientEntry> {
        self.index.get(name).map(|&pos| &self.entries[pos])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &[NutrientEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
