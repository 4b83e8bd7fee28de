//! JSONL (JSON Lines) files, one entity per line.
//!
//! Layout: `<data_dir>/competitions.jsonl` holds the registry;
//! `<data_dir>/normalized/<competition_id>/<entity>.jsonl` holds the
//! per-competition collections.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use super::{StorageConfig, StorageError};
use crate::models::Competition;

/// Entity collections stored per competition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    Team,
    Membership,
    Match,
    Round,
}

impl EntityType {
    /// Get the filename for this entity type.
    pub fn filename(&self) -> &'static str {
        match self {
            EntityType::Team => "teams.jsonl",
            EntityType::Membership => "memberships.jsonl",
            EntityType::Match => "matches.jsonl",
            EntityType::Round => "rounds.jsonl",
        }
    }
}

/// JSONL file writer.
pub struct JsonlWriter<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: Serialize> JsonlWriter<T> {
    /// Create a new JSONL writer for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Create a writer for an entity type within a competition.
    pub fn for_entity(config: &StorageConfig, entity: EntityType, competition_id: &str) -> Self {
        let path = config
            .normalized_dir()
            .join(competition_id)
            .join(entity.filename());
        Self::new(path)
    }

    fn ensure_dir(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Append a single entity to the file.
    pub fn append(&self, entity: &T) -> Result<(), StorageError> {
        self.ensure_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{}", serde_json::to_string(entity)?)?;
        writer.flush()?;

        debug!("Appended entity to {:?}", self.path);
        Ok(())
    }

    /// Write entities, replacing the entire file.
    pub fn write_all(&self, entities: &[T]) -> Result<usize, StorageError> {
        self.ensure_dir()?;

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        let mut count = 0;
        for entity in entities {
            writeln!(writer, "{}", serde_json::to_string(entity)?)?;
            count += 1;
        }
        writer.flush()?;

        debug!("Wrote {} entities to {:?}", count, self.path);
        Ok(count)
    }
}

/// JSONL file reader.
pub struct JsonlReader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonlReader<T> {
    /// Create a new JSONL reader for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Create a reader for an entity type within a competition.
    pub fn for_entity(config: &StorageConfig, entity: EntityType, competition_id: &str) -> Self {
        let path = config
            .normalized_dir()
            .join(competition_id)
            .join(entity.filename());
        Self::new(path)
    }

    /// Read all entities. A missing file is an empty collection, not an
    /// error; malformed lines are skipped with a warning.
    pub fn read_all(&self) -> Result<Vec<T>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut entities = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(&line) {
                Ok(entity) => entities.push(entity),
                Err(e) => {
                    warn!(
                        "Failed to parse line {} in {:?}: {}",
                        line_num + 1,
                        self.path,
                        e
                    );
                }
            }
        }

        debug!("Read {} entities from {:?}", entities.len(), self.path);
        Ok(entities)
    }

    /// Read entities matching a predicate.
    pub fn read_where<F>(&self, predicate: F) -> Result<Vec<T>, StorageError>
    where
        F: Fn(&T) -> bool,
    {
        let all = self.read_all()?;
        Ok(all.into_iter().filter(predicate).collect())
    }
}

/// Read the competition registry.
pub fn read_competitions(config: &StorageConfig) -> Result<Vec<Competition>, StorageError> {
    JsonlReader::new(config.competitions_path()).read_all()
}

/// Write the competition registry, sorted by name.
pub fn write_competitions(
    config: &StorageConfig,
    competitions: &mut [Competition],
) -> Result<usize, StorageError> {
    competitions.sort_by(|a, b| a.name.cmp(&b.name));
    JsonlWriter::new(config.competitions_path()).write_all(competitions)
}

/// Resolve a competition id or slug to the canonical id.
///
/// Unknown values pass through unchanged, so queries against absent
/// competitions degrade to empty reads instead of errors.
pub fn resolve_competition_id(
    config: &StorageConfig,
    id_or_slug: &str,
) -> Result<String, StorageError> {
    let competitions = read_competitions(config)?;
    Ok(competitions
        .iter()
        .find(|c| c.id.as_str() == id_or_slug || c.slug == id_or_slug)
        .map(|c| c.id.as_str().to_string())
        .unwrap_or_else(|| id_or_slug.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestEntity {
        id: String,
        value: u32,
    }

    fn entity(id: &str, value: u32) -> TestEntity {
        TestEntity {
            id: id.to_string(),
            value,
        }
    }

    #[test]
    fn test_write_and_read() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("test.jsonl");

        let entities = vec![entity("1", 100), entity("2", 200)];
        let writer: JsonlWriter<TestEntity> = JsonlWriter::new(path.clone());
        assert_eq!(writer.write_all(&entities).unwrap(), 2);

        let reader: JsonlReader<TestEntity> = JsonlReader::new(path);
        assert_eq!(reader.read_all().unwrap(), entities);
    }

    #[test]
    fn test_append() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("append.jsonl");

        let writer: JsonlWriter<TestEntity> = JsonlWriter::new(path.clone());
        writer.append(&entity("1", 1)).unwrap();
        writer.append(&entity("2", 2)).unwrap();

        let reader: JsonlReader<TestEntity> = JsonlReader::new(path);
        assert_eq!(reader.read_all().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let tmp = TempDir::new().unwrap();
        let reader: JsonlReader<TestEntity> = JsonlReader::new(tmp.path().join("nope.jsonl"));
        assert!(reader.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_write_all_overwrites() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("overwrite.jsonl");

        let writer: JsonlWriter<TestEntity> = JsonlWriter::new(path.clone());
        writer.write_all(&[entity("old", 1)]).unwrap();
        writer.write_all(&[entity("new", 2), entity("new2", 3)]).unwrap();

        let reader: JsonlReader<TestEntity> = JsonlReader::new(path);
        let read = reader.read_all().unwrap();
        assert_eq!(read.len(), 2);
        assert_eq!(read[0].id, "new");
    }

    #[test]
    fn test_read_skips_bad_lines() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.jsonl");
        std::fs::write(
            &path,
            "{\"id\":\"ok\",\"value\":1}\nnot-json\n{\"id\":\"ok2\",\"value\":2}\n",
        )
        .unwrap();

        let reader: JsonlReader<TestEntity> = JsonlReader::new(path);
        let read = reader.read_all().unwrap();
        assert_eq!(read.len(), 2);
    }

    #[test]
    fn test_read_where() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("filter.jsonl");

        let writer: JsonlWriter<TestEntity> = JsonlWriter::new(path.clone());
        writer
            .write_all(&[entity("1", 50), entity("2", 150), entity("3", 250)])
            .unwrap();

        let reader: JsonlReader<TestEntity> = JsonlReader::new(path);
        let filtered = reader.read_where(|e| e.value > 100).unwrap();
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, "2");
    }

    #[test]
    fn test_for_entity_path_layout() {
        let tmp = TempDir::new().unwrap();
        let config = StorageConfig::new(tmp.path().to_path_buf());

        let writer: JsonlWriter<TestEntity> =
            JsonlWriter::for_entity(&config, EntityType::Match, "comp-1");
        let expected = config.normalized_dir().join("comp-1").join("matches.jsonl");
        assert_eq!(writer.path, expected);
    }

    #[test]
    fn test_entity_type_filenames() {
        assert_eq!(EntityType::Team.filename(), "teams.jsonl");
        assert_eq!(EntityType::Membership.filename(), "memberships.jsonl");
        assert_eq!(EntityType::Match.filename(), "matches.jsonl");
        assert_eq!(EntityType::Round.filename(), "rounds.jsonl");
    }

    #[test]
    fn test_registry_round_trip_sorted_by_name() {
        let tmp = TempDir::new().unwrap();
        let config = StorageConfig::new(tmp.path().to_path_buf());

        let mut comps = vec![
            Competition::new("Zonal Cup".to_string(), "zonal-cup".to_string()),
            Competition::new("Apex League".to_string(), "apex-league".to_string()),
        ];
        write_competitions(&config, &mut comps).unwrap();

        let read = read_competitions(&config).unwrap();
        assert_eq!(read.len(), 2);
        assert_eq!(read[0].name, "Apex League");
    }

    #[test]
    fn test_registry_empty_when_missing() {
        let tmp = TempDir::new().unwrap();
        let config = StorageConfig::new(tmp.path().to_path_buf());
        assert!(read_competitions(&config).unwrap().is_empty());
    }

    #[test]
    fn test_resolve_competition_id() {
        let tmp = TempDir::new().unwrap();
        let config = StorageConfig::new(tmp.path().to_path_buf());

        let comp = Competition::new("Apex League".to_string(), "apex-league".to_string());
        let mut registry = vec![comp.clone()];
        write_competitions(&config, &mut registry).unwrap();

        // By slug, by id, and pass-through for unknown values.
        assert_eq!(
            resolve_competition_id(&config, "apex-league").unwrap(),
            comp.id.as_str()
        );
        assert_eq!(
            resolve_competition_id(&config, comp.id.as_str()).unwrap(),
            comp.id.as_str()
        );
        assert_eq!(resolve_competition_id(&config, "nope").unwrap(), "nope");
    }
}
