//! Competition snapshot import.
//!
//! The store is owned by external CRUD flows; this module is their
//! stand-in. It parses a JSON snapshot document describing one
//! competition and writes the per-competition JSONL files, deriving
//! deterministic IDs so re-importing the same snapshot is idempotent.

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::models::{Competition, Match, MatchStatus, Membership, Round, RoundId, Team, TeamId};
use crate::slugify;
use crate::storage::{
    read_competitions, write_competitions, EntityType, JsonlWriter, StorageConfig, StorageError,
};

/// Errors that can occur during snapshot import.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Failed to read snapshot file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse snapshot: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Match references unknown team: {0}")]
    UnknownTeam(String),

    #[error("Match references unknown round: {0}")]
    UnknownRound(String),
}

/// Competition header of a snapshot.
#[derive(Debug, Deserialize)]
pub struct CompetitionSeed {
    pub name: String,

    /// Derived from the name when absent.
    #[serde(default)]
    pub slug: Option<String>,
}

/// One team entry of a snapshot. Enrollment data rides along.
#[derive(Debug, Deserialize)]
pub struct TeamSeed {
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub seed_points: u32,
}

/// One round entry of a snapshot.
#[derive(Debug, Deserialize)]
pub struct RoundSeed {
    pub name: String,
    pub number: u32,
    #[serde(default)]
    pub phase: Option<String>,
}

/// One match entry of a snapshot. Teams and rounds are referenced by name.
#[derive(Debug, Deserialize)]
pub struct MatchSeed {
    pub home: String,
    pub away: String,
    pub kickoff: DateTime<Utc>,
    #[serde(default)]
    pub status: Option<MatchStatus>,
    #[serde(default)]
    pub home_score: Option<u32>,
    #[serde(default)]
    pub away_score: Option<u32>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub round: Option<String>,
    #[serde(default)]
    pub stadium: Option<String>,
}

/// A full competition snapshot document.
#[derive(Debug, Deserialize)]
pub struct CompetitionSnapshot {
    pub competition: CompetitionSeed,
    pub teams: Vec<TeamSeed>,
    #[serde(default)]
    pub rounds: Vec<RoundSeed>,
    #[serde(default)]
    pub matches: Vec<MatchSeed>,
}

/// Counts of what an import produced.
#[derive(Debug)]
pub struct ImportSummary {
    pub competition: Competition,
    pub teams: usize,
    pub rounds: usize,
    pub matches: usize,
}

/// Import a snapshot file into the store.
pub fn import_file(
    config: &StorageConfig,
    path: &Path,
    dry_run: bool,
) -> Result<ImportSummary, ImportError> {
    let contents = std::fs::read_to_string(path)?;
    let snapshot: CompetitionSnapshot = serde_json::from_str(&contents)?;
    import_snapshot(config, snapshot, dry_run)
}

/// Import a parsed snapshot into the store.
pub fn import_snapshot(
    config: &StorageConfig,
    snapshot: CompetitionSnapshot,
    dry_run: bool,
) -> Result<ImportSummary, ImportError> {
    let slug = snapshot
        .competition
        .slug
        .unwrap_or_else(|| slugify(&snapshot.competition.name));
    let competition = Competition::new(snapshot.competition.name, slug);

    let mut teams = Vec::with_capacity(snapshot.teams.len());
    let mut memberships = Vec::with_capacity(snapshot.teams.len());
    let mut team_by_name: HashMap<String, TeamId> = HashMap::new();
    for seed in snapshot.teams {
        let mut team = Team::new(seed.name.clone());
        if let Some(logo) = seed.logo_url {
            team = team.with_logo(logo);
        }
        let mut membership = Membership::new(competition.id.clone(), team.id.clone())
            .with_seed_points(seed.seed_points);
        if let Some(group) = seed.group {
            membership = membership.with_group(group);
        }
        team_by_name.insert(seed.name, team.id.clone());
        teams.push(team);
        memberships.push(membership);
    }

    let mut rounds = Vec::with_capacity(snapshot.rounds.len());
    let mut round_by_name: HashMap<String, RoundId> = HashMap::new();
    for seed in snapshot.rounds {
        let mut round = Round::new(competition.id.clone(), seed.name.clone(), seed.number);
        if let Some(phase) = seed.phase {
            round = round.with_phase(phase);
        }
        round_by_name.insert(seed.name, round.id.clone());
        rounds.push(round);
    }

    let mut matches = Vec::with_capacity(snapshot.matches.len());
    for seed in snapshot.matches {
        let home = team_by_name
            .get(&seed.home)
            .ok_or_else(|| ImportError::UnknownTeam(seed.home.clone()))?;
        let away = team_by_name
            .get(&seed.away)
            .ok_or_else(|| ImportError::UnknownTeam(seed.away.clone()))?;

        let mut m = Match::new(
            competition.id.clone(),
            home.clone(),
            away.clone(),
            seed.kickoff,
        );
        if let Some(group) = seed.group {
            m = m.with_group(group);
        }
        if let Some(round_name) = seed.round {
            let round_id = round_by_name
                .get(&round_name)
                .ok_or_else(|| ImportError::UnknownRound(round_name.clone()))?;
            m = m.with_round(round_id.clone());
        }
        if let Some(stadium) = seed.stadium {
            m = m.with_stadium(stadium);
        }

        m.home_score = seed.home_score;
        m.away_score = seed.away_score;
        m.status = match seed.status {
            Some(status) => status,
            // A snapshot carrying both scores without a status is a result.
            None if seed.home_score.is_some() && seed.away_score.is_some() => MatchStatus::Finished,
            None => MatchStatus::Scheduled,
        };
        matches.push(m);
    }

    let summary = ImportSummary {
        teams: teams.len(),
        rounds: rounds.len(),
        matches: matches.len(),
        competition: competition.clone(),
    };

    if dry_run {
        info!(
            "Dry run: would import {} teams, {} rounds, {} matches into {}",
            summary.teams, summary.rounds, summary.matches, competition.slug
        );
        return Ok(summary);
    }

    let competition_id = competition.id.as_str();
    JsonlWriter::for_entity(config, EntityType::Team, competition_id).write_all(&teams)?;
    JsonlWriter::for_entity(config, EntityType::Membership, competition_id)
        .write_all(&memberships)?;
    JsonlWriter::for_entity(config, EntityType::Round, competition_id).write_all(&rounds)?;
    JsonlWriter::for_entity(config, EntityType::Match, competition_id).write_all(&matches)?;

    let mut registry = read_competitions(config)?;
    registry.retain(|c| c.id != competition.id);
    registry.push(competition.clone());
    write_competitions(config, &mut registry)?;

    info!(
        "Imported {} teams, {} rounds, {} matches into {}",
        summary.teams, summary.rounds, summary.matches, competition.slug
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonlReader;
    use serde_json::json;
    use tempfile::TempDir;

    fn snapshot_json() -> serde_json::Value {
        json!({
            "competition": { "name": "Coastal League 2026" },
            "teams": [
                { "name": "Harbor FC", "group": "A" },
                { "name": "Cliffside United", "group": "A" }
            ],
            "rounds": [
                { "name": "Round 1", "number": 1 }
            ],
            "matches": [
                {
                    "home": "Harbor FC",
                    "away": "Cliffside United",
                    "kickoff": "2026-03-01T16:00:00Z",
                    "home_score": 2,
                    "away_score": 1,
                    "group": "A",
                    "round": "Round 1"
                },
                {
                    "home": "Cliffside United",
                    "away": "Harbor FC",
                    "kickoff": "2026-03-08T16:00:00Z",
                    "round": "Round 1"
                }
            ]
        })
    }

    fn parse(value: serde_json::Value) -> CompetitionSnapshot {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_import_writes_all_collections() {
        let tmp = TempDir::new().unwrap();
        let config = StorageConfig::new(tmp.path().to_path_buf());

        let summary = import_snapshot(&config, parse(snapshot_json()), false).unwrap();
        assert_eq!(summary.teams, 2);
        assert_eq!(summary.rounds, 1);
        assert_eq!(summary.matches, 2);
        assert_eq!(summary.competition.slug, "coastal-league-2026");

        let competition_id = summary.competition.id.as_str();
        let teams: Vec<Team> = JsonlReader::for_entity(&config, EntityType::Team, competition_id)
            .read_all()
            .unwrap();
        assert_eq!(teams.len(), 2);

        let matches: Vec<Match> =
            JsonlReader::for_entity(&config, EntityType::Match, competition_id)
                .read_all()
                .unwrap();
        assert_eq!(matches.len(), 2);
        // Scores without an explicit status are a finished result.
        assert_eq!(matches[0].status, MatchStatus::Finished);
        assert_eq!(matches[1].status, MatchStatus::Scheduled);

        let registry = read_competitions(&config).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry[0].name, "Coastal League 2026");
    }

    #[test]
    fn test_import_dry_run_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let config = StorageConfig::new(tmp.path().to_path_buf());

        let summary = import_snapshot(&config, parse(snapshot_json()), true).unwrap();
        assert_eq!(summary.matches, 2);
        assert!(read_competitions(&config).unwrap().is_empty());
        assert!(!config.normalized_dir().exists());
    }

    #[test]
    fn test_import_is_idempotent_in_registry() {
        let tmp = TempDir::new().unwrap();
        let config = StorageConfig::new(tmp.path().to_path_buf());

        import_snapshot(&config, parse(snapshot_json()), false).unwrap();
        import_snapshot(&config, parse(snapshot_json()), false).unwrap();
        assert_eq!(read_competitions(&config).unwrap().len(), 1);
    }

    #[test]
    fn test_import_unknown_team_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let config = StorageConfig::new(tmp.path().to_path_buf());

        let snapshot = parse(json!({
            "competition": { "name": "X" },
            "teams": [{ "name": "Only Team" }],
            "matches": [{
                "home": "Only Team",
                "away": "Ghost Team",
                "kickoff": "2026-03-01T16:00:00Z"
            }]
        }));
        let err = import_snapshot(&config, snapshot, false).unwrap_err();
        assert!(matches!(err, ImportError::UnknownTeam(name) if name == "Ghost Team"));
    }

    #[test]
    fn test_import_unknown_round_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let config = StorageConfig::new(tmp.path().to_path_buf());

        let snapshot = parse(json!({
            "competition": { "name": "X" },
            "teams": [{ "name": "A" }, { "name": "B" }],
            "matches": [{
                "home": "A",
                "away": "B",
                "kickoff": "2026-03-01T16:00:00Z",
                "round": "Round 99"
            }]
        }));
        let err = import_snapshot(&config, snapshot, false).unwrap_err();
        assert!(matches!(err, ImportError::UnknownRound(name) if name == "Round 99"));
    }

    #[test]
    fn test_explicit_status_wins_over_score_inference() {
        let tmp = TempDir::new().unwrap();
        let config = StorageConfig::new(tmp.path().to_path_buf());

        let snapshot = parse(json!({
            "competition": { "name": "X" },
            "teams": [{ "name": "A" }, { "name": "B" }],
            "matches": [{
                "home": "A",
                "away": "B",
                "kickoff": "2026-03-01T16:00:00Z",
                "status": "IN_PROGRESS",
                "home_score": 1,
                "away_score": 0
            }]
        }));
        let summary = import_snapshot(&config, snapshot, false).unwrap();
        let matches: Vec<Match> =
            JsonlReader::for_entity(&config, EntityType::Match, summary.competition.id.as_str())
                .read_all()
                .unwrap();
        assert_eq!(matches[0].status, MatchStatus::InProgress);
    }

    #[test]
    fn test_import_file_round_trip() {
        let tmp = TempDir::new().unwrap();
        let config = StorageConfig::new(tmp.path().to_path_buf());
        let path = tmp.path().join("snapshot.json");
        std::fs::write(&path, serde_json::to_string(&snapshot_json()).unwrap()).unwrap();

        let summary = import_file(&config, &path, false).unwrap();
        assert_eq!(summary.teams, 2);
    }
}
