use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;

use super::domain::{Candidate, CandidateId};

/// Errors raised while loading a candidate roster export.
#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read candidate roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid candidate roster CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("duplicate candidate id {0} in roster")]
    DuplicateId(CandidateId),
}

/// Loads marketplace candidates from a CSV export.
///
/// Expected headers: `Id,Name,Title,Location,Experience,Availability,Last Active,
/// Remote Preference,Skills,Bio`. Skills are `;`-separated.
pub struct CandidateRosterImporter;

impl CandidateRosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Candidate>, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Candidate>, RosterImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut candidates: Vec<Candidate> = Vec::new();

        for row in csv_reader.deserialize::<RosterRow>() {
            let candidate = row?.into_candidate();
            if candidates.iter().any(|existing| existing.id == candidate.id) {
                return Err(RosterImportError::DuplicateId(candidate.id));
            }
            candidates.push(candidate);
        }

        tracing::debug!(count = candidates.len(), "candidate roster imported");
        Ok(candidates)
    }
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "Id")]
    id: u32,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Location", default)]
    location: String,
    #[serde(rename = "Experience", default)]
    experience: String,
    #[serde(rename = "Availability", default)]
    availability: String,
    #[serde(rename = "Last Active", default)]
    last_active: String,
    #[serde(
        rename = "Remote Preference",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    remote_preference: Option<String>,
    #[serde(rename = "Skills", default)]
    skills: String,
    #[serde(rename = "Bio", default)]
    bio: String,
}

impl RosterRow {
    fn into_candidate(self) -> Candidate {
        let skills = self
            .skills
            .split(';')
            .map(str::trim)
            .filter(|skill| !skill.is_empty())
            .map(str::to_string)
            .collect();

        Candidate {
            id: CandidateId(self.id),
            name: self.name,
            title: self.title,
            location: self.location,
            experience: self.experience,
            availability: self.availability,
            last_active: self.last_active,
            remote_preference: self.remote_preference,
            skills,
            bio: self.bio,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
