use serde::ser::{Serialize, SerializeMap, Serializer};

use super::Level;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LevelCounts {
    counts: [u64; 3],
}

impl LevelCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, level: Level) -> u64 {
        self.counts[level.index()]
    }

    pub fn increment(&mut self, level: Level) {
        self.counts[level.index()] += 1;
    }

    /// Bumps every level whose marker occurs in `line`. A line mentioning
    /// several markers counts once for each of them.
    pub fn record_line(&mut self, line: &str) {
        for level in Level::ALL {
            if line.contains(level.marker()) {
                self.increment(level);
            }
        }
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Level, u64)> + '_ {
        Level::ALL.into_iter().map(move |level| (level, self.get(level)))
    }
}

impl Serialize for LevelCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Level::ALL.len()))?;
        for (level, count) in self.iter() {
            map.serialize_entry(level.marker(), &count)?;
        }
        map.end()
    }
}
