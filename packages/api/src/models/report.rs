//! # SearchReport — the person-lookup result and its display form
//!
//! `POST /api/search` answers with one JSON document per lookup. The backend
//! aggregates whatever public sources it reaches, so every field on the entry
//! types is optional and absent or empty fields are routine. The raw document
//! is kept as [`SearchReport`]; nothing in the UI reads the category arrays
//! directly.
//!
//! ## View-model
//!
//! [`SearchReport::sections`] flattens the five category arrays into ordered
//! [`ReportSection`]s of uniform [`ReportItem`]s. Each entry type knows its own
//! field-precedence rules (e.g. a social hit is titled by `platform`, falling
//! back to `profile`), so the precedence lives here once and both the live
//! modal and the downloadable HTML render from the same items. Empty
//! categories produce no section, and the category order is fixed:
//!
//! | Category | Backend array | Item title | Item detail |
//! |----------|--------------|------------|-------------|
//! | [`ReportCategory::SocialMedia`] | `social_media` | `platform` → `profile` | `status` → `profile` → fixed fallback |
//! | [`ReportCategory::LegalRecords`] | `legal_records` | `type` → `title` | `description` → `title` |
//! | [`ReportCategory::Professional`] | `professional` | `type` → `company` | `details` → `company` |
//! | [`ReportCategory::FamilyInfo`] | `family_info` | `type` | `status` |
//! | [`ReportCategory::PublicRecords`] | `public_records` | `title` → `source` | `snippet` → `title` |
//!
//! An empty string counts as absent in every chain. The backend also attaches
//! per-entry `confidence` grades; they are not part of the rendered item.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Detail text when a social entry carries neither a status nor a profile.
const DETAIL_FALLBACK: &str = "No further information available";

/// Full search response for one subject.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchReport {
    pub name: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sources_searched: u32,
    #[serde(default)]
    pub profiles_found: u32,
    #[serde(default)]
    pub social_media: Vec<SocialEntry>,
    #[serde(default)]
    pub legal_records: Vec<LegalEntry>,
    #[serde(default)]
    pub professional: Vec<ProfessionalEntry>,
    #[serde(default)]
    pub family_info: Vec<FamilyEntry>,
    #[serde(default)]
    pub public_records: Vec<RecordEntry>,
    #[serde(default)]
    pub confidence_score: Option<u8>,
    #[serde(default)]
    pub risk_assessment: Option<String>,
    #[serde(default)]
    pub disclaimer: String,
}

impl SearchReport {
    /// Non-empty categories in display order, flattened to uniform items.
    pub fn sections(&self) -> Vec<ReportSection> {
        ReportCategory::ALL
            .into_iter()
            .filter_map(|category| {
                let items: Vec<ReportItem> = match category {
                    ReportCategory::SocialMedia => {
                        self.social_media.iter().map(SocialEntry::to_item).collect()
                    }
                    ReportCategory::LegalRecords => {
                        self.legal_records.iter().map(LegalEntry::to_item).collect()
                    }
                    ReportCategory::Professional => self
                        .professional
                        .iter()
                        .map(ProfessionalEntry::to_item)
                        .collect(),
                    ReportCategory::FamilyInfo => {
                        self.family_info.iter().map(FamilyEntry::to_item).collect()
                    }
                    ReportCategory::PublicRecords => {
                        self.public_records.iter().map(RecordEntry::to_item).collect()
                    }
                };
                (!items.is_empty()).then_some(ReportSection { category, items })
            })
            .collect()
    }
}

/// The five report categories, in the order sections are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportCategory {
    SocialMedia,
    LegalRecords,
    Professional,
    FamilyInfo,
    PublicRecords,
}

impl ReportCategory {
    /// Display order. [`SearchReport::sections`] iterates this.
    pub const ALL: [ReportCategory; 5] = [
        ReportCategory::SocialMedia,
        ReportCategory::LegalRecords,
        ReportCategory::Professional,
        ReportCategory::FamilyInfo,
        ReportCategory::PublicRecords,
    ];

    /// Section heading.
    pub fn label(self) -> &'static str {
        match self {
            ReportCategory::SocialMedia => "Social media",
            ReportCategory::LegalRecords => "Legal records",
            ReportCategory::Professional => "Business affiliations",
            ReportCategory::FamilyInfo => "Family information",
            ReportCategory::PublicRecords => "Other public records",
        }
    }

    /// CSS class suffix used by the live view (`section-social` etc.).
    pub fn css_class(self) -> &'static str {
        match self {
            ReportCategory::SocialMedia => "social",
            ReportCategory::LegalRecords => "legal",
            ReportCategory::Professional => "professional",
            ReportCategory::FamilyInfo => "family",
            ReportCategory::PublicRecords => "records",
        }
    }

    /// Accent color, inlined into the exported HTML.
    pub fn accent(self) -> &'static str {
        match self {
            ReportCategory::SocialMedia => "#4ade80",
            ReportCategory::LegalRecords => "#ff6b6b",
            ReportCategory::Professional => "#ffa500",
            ReportCategory::FamilyInfo => "#9b59b6",
            ReportCategory::PublicRecords => "#3498db",
        }
    }
}

/// One category's worth of items.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
    pub category: ReportCategory,
    pub items: Vec<ReportItem>,
}

/// One rendered entry, independent of which category it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportItem {
    pub title: String,
    pub detail: String,
    /// Name of the public source, shown as a "Source:" line when present.
    pub source: Option<String>,
    /// External profile link. Only `http(s)` URLs survive into rendered output.
    pub url: Option<String>,
    /// Backend guidance, e.g. "manual verification recommended".
    pub note: Option<String>,
}

/// Treats empty strings like missing fields, as the precedence chains require.
fn nonempty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// A social network hit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SocialEntry {
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl SocialEntry {
    pub fn to_item(&self) -> ReportItem {
        ReportItem {
            title: nonempty(&self.platform)
                .or(nonempty(&self.profile))
                .unwrap_or_default()
                .to_string(),
            detail: nonempty(&self.status)
                .or(nonempty(&self.profile))
                .unwrap_or(DETAIL_FALLBACK)
                .to_string(),
            source: None,
            url: nonempty(&self.url).map(str::to_string),
            note: nonempty(&self.note).map(str::to_string),
        }
    }
}

/// A court or litigation record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LegalEntry {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl LegalEntry {
    pub fn to_item(&self) -> ReportItem {
        ReportItem {
            title: nonempty(&self.kind)
                .or(nonempty(&self.title))
                .unwrap_or_default()
                .to_string(),
            detail: nonempty(&self.description)
                .or(nonempty(&self.title))
                .unwrap_or_default()
                .to_string(),
            source: nonempty(&self.source).map(str::to_string),
            url: None,
            note: nonempty(&self.note).map(str::to_string),
        }
    }
}

/// A company or employment affiliation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfessionalEntry {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl ProfessionalEntry {
    pub fn to_item(&self) -> ReportItem {
        ReportItem {
            title: nonempty(&self.kind)
                .or(nonempty(&self.company))
                .unwrap_or_default()
                .to_string(),
            detail: nonempty(&self.details)
                .or(nonempty(&self.company))
                .unwrap_or_default()
                .to_string(),
            source: nonempty(&self.source).map(str::to_string),
            url: None,
            note: nonempty(&self.note).map(str::to_string),
        }
    }
}

/// A family relationship hit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FamilyEntry {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl FamilyEntry {
    pub fn to_item(&self) -> ReportItem {
        ReportItem {
            title: nonempty(&self.kind).unwrap_or_default().to_string(),
            detail: nonempty(&self.status).unwrap_or_default().to_string(),
            source: None,
            url: None,
            note: nonempty(&self.note).map(str::to_string),
        }
    }
}

/// A government or transparency-portal record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecordEntry {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

impl RecordEntry {
    pub fn to_item(&self) -> ReportItem {
        ReportItem {
            title: nonempty(&self.title)
                .or(nonempty(&self.source))
                .unwrap_or_default()
                .to_string(),
            detail: nonempty(&self.snippet)
                .or(nonempty(&self.title))
                .unwrap_or_default()
                .to_string(),
            source: nonempty(&self.source).map(str::to_string),
            url: None,
            note: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend_fixture() -> SearchReport {
        serde_json::from_str(
            r#"{
                "name": "Maria Souza",
                "timestamp": "2025-06-10T14:00:00+00:00",
                "sources_searched": 6,
                "profiles_found": 2,
                "social_media": [
                    {
                        "platform": "LinkedIn",
                        "status": "Public profile found",
                        "confidence": "medium",
                        "note": "Manual verification recommended"
                    },
                    {
                        "profile": "instagram.com/maria",
                        "url": "https://instagram.com/maria"
                    }
                ],
                "professional": [
                    {
                        "type": "Company affiliation found",
                        "source": "Public company registry",
                        "confidence": "high",
                        "note": "Confirm with the federal registry"
                    }
                ],
                "legal_records": [],
                "education": [],
                "family_info": [],
                "public_records": [
                    {
                        "type": "Government record",
                        "source": "Transparency portal",
                        "confidence": "high",
                        "note": "Official source data"
                    }
                ],
                "confidence_score": 75,
                "risk_assessment": "low",
                "disclaimer": "Collected from public sources. Cross-check recommended."
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_decodes_backend_shape() {
        let report = backend_fixture();
        assert_eq!(report.name, "Maria Souza");
        assert_eq!(report.sources_searched, 6);
        assert_eq!(report.confidence_score, Some(75));
        assert_eq!(report.risk_assessment.as_deref(), Some("low"));
        assert!(report.timestamp.is_some());
        assert_eq!(report.social_media.len(), 2);
    }

    #[test]
    fn test_sections_skip_empty_categories_and_keep_order() {
        let report = backend_fixture();
        let sections = report.sections();

        let categories: Vec<ReportCategory> =
            sections.iter().map(|section| section.category).collect();
        assert_eq!(
            categories,
            vec![
                ReportCategory::SocialMedia,
                ReportCategory::Professional,
                ReportCategory::PublicRecords,
            ]
        );
        assert_eq!(sections[0].items.len(), 2);
        assert_eq!(sections[1].items.len(), 1);
    }

    #[test]
    fn test_social_titles_fall_back_to_profile() {
        let report = backend_fixture();
        let social = &report.sections()[0];
        assert_eq!(social.items[0].title, "LinkedIn");
        assert_eq!(social.items[0].detail, "Public profile found");
        assert_eq!(social.items[1].title, "instagram.com/maria");
        assert_eq!(social.items[1].detail, "instagram.com/maria");
        assert_eq!(social.items[1].url.as_deref(), Some("https://instagram.com/maria"));
    }

    #[test]
    fn test_social_detail_fallback_when_everything_missing() {
        let item = SocialEntry::default().to_item();
        assert_eq!(item.title, "");
        assert_eq!(item.detail, DETAIL_FALLBACK);
    }

    #[test]
    fn test_empty_strings_count_as_missing() {
        let entry = SocialEntry {
            platform: Some(String::new()),
            profile: Some("orkut.example/maria".into()),
            ..Default::default()
        };
        assert_eq!(entry.to_item().title, "orkut.example/maria");
    }

    #[test]
    fn test_legal_precedence() {
        let entry = LegalEntry {
            kind: None,
            title: Some("Case 0001234-55".into()),
            description: None,
            source: Some("State court".into()),
            note: None,
        };
        let item = entry.to_item();
        assert_eq!(item.title, "Case 0001234-55");
        assert_eq!(item.detail, "Case 0001234-55");
        assert_eq!(item.source.as_deref(), Some("State court"));
    }

    #[test]
    fn test_public_record_precedence() {
        let entry = RecordEntry {
            title: None,
            snippet: None,
            source: Some("Transparency portal".into()),
        };
        let item = entry.to_item();
        assert_eq!(item.title, "Transparency portal");
        assert_eq!(item.detail, "");
    }

    #[test]
    fn test_missing_arrays_decode_as_empty() {
        let report: SearchReport =
            serde_json::from_str(r#"{"name": "João"}"#).unwrap();
        assert!(report.sections().is_empty());
        assert_eq!(report.profiles_found, 0);
        assert!(report.timestamp.is_none());
    }
}
