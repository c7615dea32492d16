//! Grid cell buffer
//!
//! Cells are numbered from 1 as they are added. Configs always target the
//! most recently added cell, so a cell can collect one config per
//! breakpoint before the row is rendered.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

const DEFAULT_BREAKPOINT: &str = "md";
const DEFAULT_SIZE: u32 = 12;

fn default_breakpoint() -> String {
    DEFAULT_BREAKPOINT.to_string()
}

fn default_size() -> u32 {
    DEFAULT_SIZE
}

/// Column offset for one breakpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridOffset {
    #[serde(rename = "type", default = "default_breakpoint")]
    pub breakpoint: String,
    #[serde(default = "default_size")]
    pub size: u32,
}

impl GridOffset {
    pub fn new(breakpoint: impl Into<String>, size: u32) -> Self {
        Self {
            breakpoint: breakpoint.into(),
            size,
        }
    }
}

/// Width (and optional offset) of a cell at one breakpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    #[serde(rename = "type")]
    pub breakpoint: String,
    pub size: u32,
    /// An empty offset record (`{}`) means no offset
    #[serde(deserialize_with = "non_empty_offset")]
    pub offset: Option<GridOffset>,
}

#[derive(Deserialize)]
struct RawOffset {
    #[serde(rename = "type")]
    breakpoint: Option<String>,
    size: Option<u32>,
}

fn non_empty_offset<'de, D>(deserializer: D) -> Result<Option<GridOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawOffset>::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| match (raw.breakpoint, raw.size) {
        (None, None) => None,
        (breakpoint, size) => Some(GridOffset {
            breakpoint: breakpoint.unwrap_or_else(default_breakpoint),
            size: size.unwrap_or(DEFAULT_SIZE),
        }),
    }))
}

impl GridConfig {
    /// `size` columns at the default `md` breakpoint
    pub fn sized(size: u32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn at(breakpoint: impl Into<String>, size: u32) -> Self {
        Self {
            breakpoint: breakpoint.into(),
            size,
            offset: None,
        }
    }

    pub fn with_offset(mut self, offset: GridOffset) -> Self {
        self.offset = Some(offset);
        self
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            breakpoint: default_breakpoint(),
            size: DEFAULT_SIZE,
            offset: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GridBuffer {
    /// Index of the most recently added cell, 0 when empty
    counter: usize,
    cells: Vec<(usize, String)>,
    configs: HashMap<usize, Vec<GridConfig>>,
}

impl GridBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a cell and return its index
    pub fn add_cell(&mut self, content: impl Into<String>) -> usize {
        self.counter += 1;
        self.cells.push((self.counter, content.into()));
        tracing::trace!(cell = self.counter, "Added grid cell");
        self.counter
    }

    /// Append a config to the current cell
    pub fn configure(&mut self, config: GridConfig) {
        if self.counter == 0 {
            tracing::warn!(
                breakpoint = %config.breakpoint,
                size = config.size,
                "Grid config given before any cell, it will be discarded"
            );
        }
        self.configs.entry(self.counter).or_default().push(config);
    }

    pub fn current_index(&self) -> usize {
        self.counter
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Configs recorded for a cell so far
    pub fn configs_for(&self, index: usize) -> &[GridConfig] {
        self.configs.get(&index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every cell with its configs, in insertion order
    pub fn cells(&self) -> impl Iterator<Item = (&str, &[GridConfig])> {
        self.cells
            .iter()
            .map(move |(index, content)| (content.as_str(), self.configs_for(*index)))
    }

    /// Drop all cells and configs and reset the counter
    pub fn clear(&mut self) {
        self.cells.clear();
        self.configs.clear();
        self.counter = 0;
    }
}
