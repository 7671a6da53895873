//! Communication entries as authored and persisted upstream.
//!
//! An entry is the source of truth for everything the calendar shows. This
//! crate never mutates or stores entries; it only reads them and projects them
//! into [`CalendarEvent`](crate::event::CalendarEvent)s.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CommsCalError, CommsCalResult};

/// Classification tag of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Event,
    NewsRelease,
    Tv,
    Radio,
    SocialMedia,
    Observance,
    Conference,
    Fyi,
    Placeholder,
    Other,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Event,
        Category::NewsRelease,
        Category::Tv,
        Category::Radio,
        Category::SocialMedia,
        Category::Observance,
        Category::Conference,
        Category::Fyi,
        Category::Placeholder,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Event => "event",
            Category::NewsRelease => "news release",
            Category::Tv => "tv",
            Category::Radio => "radio",
            Category::SocialMedia => "social media",
            Category::Observance => "observance",
            Category::Conference => "conference",
            Category::Fyi => "fyi",
            Category::Placeholder => "placeholder",
            Category::Other => "other",
        }
    }
}

/// Unrecognized labels fall back to `Other` instead of failing the whole list.
impl From<String> for Category {
    fn from(value: String) -> Self {
        let value = value.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.label() == value)
            .unwrap_or(Category::Other)
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How firm an entry's scheduled time is. Display-only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ScheduleStatus {
    #[default]
    Unknown,
    Tentative,
    Confirmed,
}

impl ScheduleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ScheduleStatus::Unknown => "unknown",
            ScheduleStatus::Tentative => "tentative",
            ScheduleStatus::Confirmed => "confirmed",
        }
    }
}

impl From<String> for ScheduleStatus {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tentative" => ScheduleStatus::Tentative,
            "confirmed" => ScheduleStatus::Confirmed,
            _ => ScheduleStatus::Unknown,
        }
    }
}

impl From<ScheduleStatus> for String {
    fn from(value: ScheduleStatus) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RelatedTo {
    Parent,
    Child,
    Related,
}

impl RelatedTo {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "parent" => Some(RelatedTo::Parent),
            "child" => Some(RelatedTo::Child),
            "related" => Some(RelatedTo::Related),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LeadOrganization {
    Federal,
    Provincial,
    CrownCorp,
    #[default]
    Other,
}

impl LeadOrganization {
    pub fn label(&self) -> &'static str {
        match self {
            LeadOrganization::Federal => "federal",
            LeadOrganization::Provincial => "provincial",
            LeadOrganization::CrownCorp => "crown corp",
            LeadOrganization::Other => "other",
        }
    }
}

impl From<String> for LeadOrganization {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "federal" => LeadOrganization::Federal,
            "provincial" => LeadOrganization::Provincial,
            "crown corp" => LeadOrganization::CrownCorp,
            _ => LeadOrganization::Other,
        }
    }
}

impl From<LeadOrganization> for String {
    fn from(value: LeadOrganization) -> Self {
        value.label().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CommsMaterial {
    #[serde(rename = "news release")]
    NewsRelease,
    #[serde(rename = "backgrounder")]
    Backgrounder,
    #[serde(rename = "speaking notes")]
    SpeakingNotes,
}

impl CommsMaterial {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "news release" => Some(CommsMaterial::NewsRelease),
            "backgrounder" => Some(CommsMaterial::Backgrounder),
            "speaking notes" => Some(CommsMaterial::SpeakingNotes),
            _ => None,
        }
    }
}

/// Communications contact responsible for an entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommsContact {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

/// Structured venue of an entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    pub address: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    pub country: String,
}

impl Location {
    /// Flattened "{city}, {province}" form used on calendar cards.
    pub fn display(&self) -> String {
        format!("{}, {}", self.city, self.province)
    }
}

/// A communication entry (event, news release, announcement, ...).
///
/// `start_date` and `end_date` are ISO-8601 strings exactly as stored. They
/// default to empty when absent so the normalizer can report the missing field
/// by name instead of failing the whole list at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationEntry {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: Vec<Category>,
    #[serde(
        default,
        deserialize_with = "known_related_to",
        skip_serializing_if = "Option::is_none"
    )]
    pub related_to: Option<RelatedTo>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub issue: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub significance: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lead_organization: LeadOrganization,

    // Planning
    #[serde(default, deserialize_with = "null_as_default")]
    pub comms_contact: CommsContact,
    #[serde(default, deserialize_with = "known_materials")]
    pub comms_material: Vec<CommsMaterial>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    // Schedule
    #[serde(default, deserialize_with = "null_as_default")]
    pub schedule_status: ScheduleStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub all_day: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduling_notes: Option<String>,

    // Event
    #[serde(default, deserialize_with = "null_as_default")]
    pub representatives: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    // Metadata
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

/// `null` reads as the field's default, like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Unrecognized relations read as absent.
fn known_related_to<'de, D>(deserializer: D) -> Result<Option<RelatedTo>, D::Error>
where
    D: Deserializer<'de>,
{
    let label: Option<String> = Option::deserialize(deserializer)?;
    Ok(label.as_deref().and_then(RelatedTo::from_label))
}

/// Unrecognized materials are dropped from the list.
fn known_materials<'de, D>(deserializer: D) -> Result<Vec<CommsMaterial>, D::Error>
where
    D: Deserializer<'de>,
{
    let labels: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(labels
        .unwrap_or_default()
        .iter()
        .filter_map(|l| CommsMaterial::from_label(l))
        .collect())
}

/// Parse a JSON array of entries.
pub fn load_entries(json: &str) -> CommsCalResult<Vec<CommunicationEntry>> {
    let entries: Vec<CommunicationEntry> =
        serde_json::from_str(json).map_err(|e| CommsCalError::EntryParse(e.to_string()))?;

    tracing::debug!(count = entries.len(), "loaded communication entries");

    Ok(entries)
}
