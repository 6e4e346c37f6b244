//! Data types for the realm status scraper
//!
//! This module contains the core data structures used throughout the library.
//! All types implement Serialize and Deserialize for JSON export.

use serde::{Deserialize, Serialize};

/// Online status of a realm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RealmStatus {
    /// Realm is online
    Up,
    /// Realm is offline
    Down,
    /// The status page reported a token other than "up" or "down";
    /// the raw token is kept verbatim
    Unrecognized(String),
}

impl RealmStatus {
    /// Map a raw status token to a status.
    ///
    /// Matching is case-sensitive against the literal lowercase tokens
    /// the status page uses; anything else is passed through unchanged.
    pub fn from_token(token: &str) -> Self {
        match token {
            "up" => RealmStatus::Up,
            "down" => RealmStatus::Down,
            other => RealmStatus::Unrecognized(other.to_string()),
        }
    }
}

/// Gameplay ruleset of a realm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RealmType {
    /// Player versus environment
    Pve,
    /// Player versus player
    Pvp,
    /// Roleplay
    Rp,
    /// Roleplay PvP
    RpPvp,
    /// A label the scraper doesn't know about, kept verbatim
    Other(String),
}

impl RealmType {
    /// Map an undecorated type label to a realm type.
    ///
    /// Unrecognized labels are passed through unchanged rather than rejected
    /// so the scraper keeps working when new realm types appear.
    pub fn from_label(label: &str) -> Self {
        match label {
            "PvE" => RealmType::Pve,
            "PvP" => RealmType::Pvp,
            "RP" => RealmType::Rp,
            "RP-PvP" => RealmType::RpPvp,
            other => RealmType::Other(other.to_string()),
        }
    }

    /// The label as it appears on the status page.
    pub fn as_str(&self) -> &str {
        match self {
            RealmType::Pve => "PvE",
            RealmType::Pvp => "PvP",
            RealmType::Rp => "RP",
            RealmType::RpPvp => "RP-PvP",
            RealmType::Other(label) => label,
        }
    }
}

/// One row of the realm status table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Realm {
    /// Display name of the realm; used as the lookup key
    pub name: String,
    /// Whether the realm is up or down
    pub status: RealmStatus,
    /// Gameplay ruleset (PvE, PvP, RP, RP-PvP)
    pub realm_type: RealmType,
    /// Population level as shown on the page (e.g. "Low", "Medium", "High")
    pub population: String,
    /// Locale of the realm (e.g. "United States")
    pub locale: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_token() {
        assert_eq!(RealmStatus::from_token("up"), RealmStatus::Up);
        assert_eq!(RealmStatus::from_token("down"), RealmStatus::Down);
    }

    #[test]
    fn test_status_from_token_unrecognized() {
        assert_eq!(
            RealmStatus::from_token("flagged"),
            RealmStatus::Unrecognized("flagged".to_string())
        );
        // Case-sensitive: "Up" is not "up"
        assert_eq!(
            RealmStatus::from_token("Up"),
            RealmStatus::Unrecognized("Up".to_string())
        );
    }

    #[test]
    fn test_realm_type_from_label() {
        assert_eq!(RealmType::from_label("PvE"), RealmType::Pve);
        assert_eq!(RealmType::from_label("PvP"), RealmType::Pvp);
        assert_eq!(RealmType::from_label("RP"), RealmType::Rp);
        assert_eq!(RealmType::from_label("RP-PvP"), RealmType::RpPvp);
        assert_eq!(
            RealmType::from_label("Hardcore"),
            RealmType::Other("Hardcore".to_string())
        );
    }

    #[test]
    fn test_realm_type_as_str_round_trip() {
        for label in ["PvE", "PvP", "RP", "RP-PvP", "Hardcore"] {
            assert_eq!(RealmType::from_label(label).as_str(), label);
        }
    }

    #[test]
    fn test_realm_serialization() {
        let realm = Realm {
            name: "Eitrigg".to_string(),
            status: RealmStatus::Up,
            realm_type: RealmType::Pve,
            population: "Medium".to_string(),
            locale: "United States".to_string(),
        };

        let json = serde_json::to_string(&realm).unwrap();
        let deserialized: Realm = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, realm);
    }
}
