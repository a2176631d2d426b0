//! Booked artists and their performance slots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stageprep_core::{ArtistId, DomainError, DomainResult, PerformanceId};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spotify: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soundcloud: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_rider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_layout: Option<String>,
    pub contact: ContactInfo,
}

impl Artist {
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("artist name cannot be empty"));
        }
        if self.contact.email.trim().is_empty() {
            return Err(DomainError::validation("artist contact email is required"));
        }
        Ok(())
    }
}

/// Technical needs for one set, grouped the way crews split responsibilities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRequirements {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub audio: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lighting: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stage: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub other: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Soundcheck {
    pub time: DateTime<Utc>,
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    pub id: PerformanceId,
    pub artist_id: ArtistId,
    pub set_time: DateTime<Utc>,
    pub duration_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<PerformanceRequirements>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soundcheck: Option<Soundcheck>,
}

impl Performance {
    pub fn validate(&self) -> DomainResult<()> {
        if self.duration_minutes == 0 {
            return Err(DomainError::validation(
                "performance duration must be at least one minute",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn artist_requires_contact_email() {
        let artist = Artist {
            id: ArtistId::new(),
            name: "The Static Waves".to_string(),
            genre: Some("indie rock".to_string()),
            social_links: None,
            tech_rider: None,
            stage_layout: None,
            contact: ContactInfo {
                email: String::new(),
                phone: None,
            },
        };
        assert!(artist.validate().is_err());
    }

    #[test]
    fn performance_rejects_zero_duration() {
        let perf = Performance {
            id: PerformanceId::new(),
            artist_id: ArtistId::new(),
            set_time: Utc.with_ymd_and_hms(2024, 6, 1, 21, 0, 0).unwrap(),
            duration_minutes: 0,
            requirements: None,
            soundcheck: None,
        };
        assert!(perf.validate().is_err());
    }
}
