//! Enumerated advertising channels and sponsor labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the seven transparency channels an ad placement is sourced from.
///
/// The wire form is the SCREAMING_SNAKE token (`"TV_AD_ARCHIVE"` etc.), both
/// in JSON payloads and in the `ads.platform` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Platform {
    Facebook,
    Youtube,
    Fec,
    Opensecrets,
    Adimpact,
    TvAdArchive,
    AcluWatch,
}

/// All platform variants, in display order.
pub const ALL_PLATFORMS: [Platform; 7] = [
    Platform::Facebook,
    Platform::Youtube,
    Platform::Fec,
    Platform::Opensecrets,
    Platform::Adimpact,
    Platform::TvAdArchive,
    Platform::AcluWatch,
];

impl Platform {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Platform::Facebook => "FACEBOOK",
            Platform::Youtube => "YOUTUBE",
            Platform::Fec => "FEC",
            Platform::Opensecrets => "OPENSECRETS",
            Platform::Adimpact => "ADIMPACT",
            Platform::TvAdArchive => "TV_AD_ARCHIVE",
            Platform::AcluWatch => "ACLU_WATCH",
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::Youtube => "YouTube",
            Platform::Fec => "FEC",
            Platform::Opensecrets => "OpenSecrets",
            Platform::Adimpact => "AdImpact",
            Platform::TvAdArchive => "TV Ad Archive",
            Platform::AcluWatch => "ACLU Political Ad Watch",
        }
    }

    /// One-line description of the underlying data source.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Platform::Facebook => "Meta Ad Library - Political and Issue Ads",
            Platform::Youtube => "Google Transparency Report - Political Ads",
            Platform::Fec => "Federal Election Commission - Official Records",
            Platform::Opensecrets => "Center for Responsive Politics - Campaign Finance",
            Platform::Adimpact => "Political Ad Tracking and Analytics",
            Platform::TvAdArchive => "Internet Archive - Television Political Ads",
            Platform::AcluWatch => "ACLU - Political Advertising Monitoring",
        }
    }

    /// Accent color class used by dashboard frontends.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Platform::Facebook => "bg-blue-500",
            Platform::Youtube => "bg-red-500",
            Platform::Fec => "bg-green-500",
            Platform::Opensecrets => "bg-purple-500",
            Platform::Adimpact => "bg-orange-500",
            Platform::TvAdArchive => "bg-indigo-500",
            Platform::AcluWatch => "bg-pink-500",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FACEBOOK" => Ok(Platform::Facebook),
            "YOUTUBE" => Ok(Platform::Youtube),
            "FEC" => Ok(Platform::Fec),
            "OPENSECRETS" => Ok(Platform::Opensecrets),
            "ADIMPACT" => Ok(Platform::Adimpact),
            "TV_AD_ARCHIVE" => Ok(Platform::TvAdArchive),
            "ACLU_WATCH" => Ok(Platform::AcluWatch),
            other => Err(UnknownPlatform(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown platform: {0}")]
pub struct UnknownPlatform(pub String);

/// The ultimate financial sponsor behind a funding organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Funder {
    #[serde(rename = "OpenAI+a16z")]
    OpenAiA16z,
    Meta,
}

impl Funder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Funder::OpenAiA16z => "OpenAI+a16z",
            Funder::Meta => "Meta",
        }
    }
}

impl fmt::Display for Funder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Funder {
    type Err = UnknownFunder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OpenAI+a16z" => Ok(Funder::OpenAiA16z),
            "Meta" => Ok(Funder::Meta),
            other => Err(UnknownFunder(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown funder: {0}")]
pub struct UnknownFunder(pub String);

/// Lifecycle states of an ad sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SyncStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

impl SyncStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SyncStatus::Pending => "PENDING",
            SyncStatus::Running => "RUNNING",
            SyncStatus::Completed => "COMPLETED",
            SyncStatus::Failed => "FAILED",
        }
    }
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_wire_tokens_round_trip() {
        for platform in ALL_PLATFORMS {
            let parsed: Platform = platform.as_str().parse().expect("parse");
            assert_eq!(parsed, platform);
        }
    }

    #[test]
    fn platform_serde_uses_screaming_snake_tokens() {
        let json = serde_json::to_string(&Platform::TvAdArchive).expect("serialize");
        assert_eq!(json, "\"TV_AD_ARCHIVE\"");
        let parsed: Platform = serde_json::from_str("\"ACLU_WATCH\"").expect("deserialize");
        assert_eq!(parsed, Platform::AcluWatch);
    }

    #[test]
    fn unknown_platform_is_rejected() {
        assert!("TIKTOK".parse::<Platform>().is_err());
    }

    #[test]
    fn funder_labels_round_trip() {
        assert_eq!("OpenAI+a16z".parse::<Funder>().unwrap(), Funder::OpenAiA16z);
        assert_eq!("Meta".parse::<Funder>().unwrap(), Funder::Meta);
        assert_eq!(
            serde_json::to_string(&Funder::OpenAiA16z).expect("serialize"),
            "\"OpenAI+a16z\""
        );
    }
}
