//! Puzzle catalog with TSV import.
//!
//! The catalog is plain configuration data: a list of FEN positions with a
//! short theme line. It is loaded once and handed to whoever serves puzzles;
//! nothing in the search reads it.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::errors::{TutorError, TutorResult};

const EMBEDDED_PUZZLES_TSV: &str = include_str!("data/puzzles.tsv");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub fen: String,
    pub theme: String,
}

#[derive(Debug, Clone, Default)]
pub struct PuzzleCatalog {
    puzzles: Vec<Puzzle>,
}

impl PuzzleCatalog {
    pub fn new(puzzles: Vec<Puzzle>) -> Self {
        Self { puzzles }
    }

    /// Load `tables/puzzles.tsv` when present, otherwise fall back to the
    /// embedded table.
    pub fn load_default() -> Self {
        let candidates = ["tables/puzzles.tsv", "puzzles.tsv"];

        for p in candidates {
            if Path::new(p).exists() {
                match Self::from_tsv_path(p) {
                    Ok(catalog) => {
                        debug!("loaded {} puzzles from {p}", catalog.len());
                        return catalog;
                    }
                    Err(e) => warn!("ignoring puzzle table {p}: {e}"),
                }
            }
        }

        Self::embedded()
    }

    pub fn embedded() -> Self {
        Self::from_tsv_or_empty(EMBEDDED_PUZZLES_TSV, "embedded table")
    }

    fn from_tsv_or_empty(tsv: &str, source: &str) -> Self {
        match Self::from_tsv_str(tsv) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!("puzzle {source} is unusable, serving no puzzles: {e}");
                Self::default()
            }
        }
    }

    pub fn from_tsv_path<P: AsRef<Path>>(path: P) -> TutorResult<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_tsv_str(&data)
    }

    /// Parse a tab-separated table with `fen` and `theme` header columns.
    pub fn from_tsv_str(tsv: &str) -> TutorResult<Self> {
        let mut lines = tsv.lines().filter(|line| !line.trim().is_empty());
        let header = lines
            .next()
            .ok_or_else(|| TutorError::Catalog("puzzle TSV is empty".to_owned()))?;

        let mut fen_idx = None;
        let mut theme_idx = None;
        for (i, name) in header.split('\t').enumerate() {
            match name.trim().to_ascii_lowercase().as_str() {
                "fen" => fen_idx = Some(i),
                "theme" => theme_idx = Some(i),
                _ => {}
            }
        }
        let fen_idx = fen_idx.ok_or_else(|| {
            TutorError::Catalog("puzzle TSV must contain a 'fen' column".to_owned())
        })?;

        let mut puzzles = Vec::new();
        for line in lines {
            let fields: Vec<&str> = line.split('\t').collect();
            let fen = fields
                .get(fen_idx)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .ok_or_else(|| TutorError::Catalog(format!("missing FEN in row '{line}'")))?;
            let theme = theme_idx
                .and_then(|idx| fields.get(idx))
                .map(|s| s.trim().to_owned())
                .unwrap_or_default();

            puzzles.push(Puzzle {
                fen: fen.to_owned(),
                theme,
            });
        }

        Ok(Self::new(puzzles))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Puzzle> {
        self.puzzles.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Puzzle> {
        self.puzzles.iter()
    }

    pub fn choose_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Puzzle> {
        self.puzzles.choose(rng)
    }
}
