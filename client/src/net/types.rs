//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server loads and serves these exact types, so the JSON shape seen by
//! the browser is the same one accepted from card data files. Field names are
//! camelCase on the wire.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Severity level of a safety card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    #[default]
    Low,
    Medium,
    High,
}

impl Category {
    /// All levels, lowest first.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Wire and badge label (`"HIGH"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }

    /// Parse a label case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "LOW" => Some(Self::Low),
            "MEDIUM" => Some(Self::Medium),
            "HIGH" => Some(Self::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the thirteen hazard kinds that mark an incident as high severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Hazard {
    SuspendedLoad,
    HighElevation,
    MobileEquipment,
    FastVehicles,
    RotatingEquipment,
    HotSubstances,
    SteamExposure,
    SustainedFire,
    Explosions,
    UnstableExcavations,
    HighVoltage,
    ArcFlash,
    ToxicChemicals,
}

impl Hazard {
    pub const ALL: [Self; 13] = [
        Self::SuspendedLoad,
        Self::HighElevation,
        Self::MobileEquipment,
        Self::FastVehicles,
        Self::RotatingEquipment,
        Self::HotSubstances,
        Self::SteamExposure,
        Self::SustainedFire,
        Self::Explosions,
        Self::UnstableExcavations,
        Self::HighVoltage,
        Self::ArcFlash,
        Self::ToxicChemicals,
    ];

    /// Wire name (`"ARC_FLASH"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuspendedLoad => "SUSPENDED_LOAD",
            Self::HighElevation => "HIGH_ELEVATION",
            Self::MobileEquipment => "MOBILE_EQUIPMENT",
            Self::FastVehicles => "FAST_VEHICLES",
            Self::RotatingEquipment => "ROTATING_EQUIPMENT",
            Self::HotSubstances => "HOT_SUBSTANCES",
            Self::SteamExposure => "STEAM_EXPOSURE",
            Self::SustainedFire => "SUSTAINED_FIRE",
            Self::Explosions => "EXPLOSIONS",
            Self::UnstableExcavations => "UNSTABLE_EXCAVATIONS",
            Self::HighVoltage => "HIGH_VOLTAGE",
            Self::ArcFlash => "ARC_FLASH",
            Self::ToxicChemicals => "TOXIC_CHEMICALS",
        }
    }

    /// Parse a wire name case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        let upper = raw.trim().to_ascii_uppercase();
        Self::ALL.into_iter().find(|hazard| hazard.as_str() == upper)
    }

    /// Human-readable label for badges and stats rows.
    pub fn label(self) -> &'static str {
        match self {
            Self::SuspendedLoad => "Suspended load",
            Self::HighElevation => "High elevation",
            Self::MobileEquipment => "Mobile equipment",
            Self::FastVehicles => "Fast vehicles",
            Self::RotatingEquipment => "Rotating equipment",
            Self::HotSubstances => "Hot substances",
            Self::SteamExposure => "Steam exposure",
            Self::SustainedFire => "Sustained fire",
            Self::Explosions => "Explosions",
            Self::UnstableExcavations => "Unstable excavations",
            Self::HighVoltage => "High voltage",
            Self::ArcFlash => "Arc flash",
            Self::ToxicChemicals => "Toxic chemicals",
        }
    }
}

/// A safety card: one evaluated incident report.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Identifier, unique within a card set.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Severity on a 0-100 scale.
    #[serde(deserialize_with = "deserialize_score")]
    pub severity_score: i64,
    pub category: Category,
    /// One-line summary shown as the card title.
    pub overview: String,
    pub description: String,
    /// Immediate remediation.
    pub solution: String,
    pub lesson: String,
    pub prevention: String,
    /// Incident date, `YYYY-MM-DD` or `MM/DD/YYYY`.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hazards: Vec<Hazard>,
}

impl Card {
    /// Date and time joined with a single space, or the date alone.
    pub fn datetime(&self) -> String {
        match self.time.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            Some(time) => format!("{} {time}", self.date),
            None => self.date.clone(),
        }
    }
}

/// Ids arrive as strings from files but as integers from some exporters.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}

fn deserialize_score<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float.round() as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("invalid severity score {s:?}"))),
        _ => Err(D::Error::custom("expected number")),
    }
}
