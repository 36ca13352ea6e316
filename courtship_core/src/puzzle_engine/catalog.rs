//! Puzzle catalog - keyed registry of puzzle definitions.

use std::collections::HashMap;

use social_rules::{builtin_puzzles, PuzzleDefinition};

/// Registry of all loadable puzzle definitions.
///
/// Loading is wholesale: `load_all` replaces the previous contents entirely,
/// with no incremental merge.
#[derive(Debug, Clone, Default)]
pub struct PuzzleCatalog {
    puzzles: HashMap<String, PuzzleDefinition>,
}

impl PuzzleCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog seeded with the stock puzzle set.
    pub fn default_catalog() -> Self {
        let mut catalog = Self::new();
        catalog.load_all(builtin_puzzles());
        catalog
    }

    /// Replace the entire catalog with the given definitions. Later entries
    /// win on duplicate ids.
    pub fn load_all(&mut self, definitions: Vec<PuzzleDefinition>) {
        self.puzzles = definitions
            .into_iter()
            .map(|puzzle| (puzzle.id.clone(), puzzle))
            .collect();
    }

    /// Look up a definition by id.
    pub fn get(&self, puzzle_id: &str) -> Option<&PuzzleDefinition> {
        self.puzzles.get(puzzle_id)
    }

    /// Iterate all definitions.
    pub fn all_puzzles(&self) -> impl Iterator<Item = &PuzzleDefinition> {
        self.puzzles.values()
    }

    /// Number of loaded definitions.
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }
}
