//! Portrait profile entity model
//!
//! `ProfileData` is the persisted document. Its field and section names are
//! the on-disk JSON contract, so they must not be renamed.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::categories::{
    Attire, Background, Lighting, Mood, Purpose, Vibe, DEFAULT_RESOLUTION, NOT_SPECIFIED,
};

pub const PROFILE_VERSION: &str = "2.0";
pub const PROFILE_PRODUCER: &str = "APEX Portrait Generator";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Required categorical choices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub purpose: Purpose,
    pub attire: Attire,
    pub background: Background,
    pub vibe: Vibe,
}

/// Optional settings, each with a fixed default
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancedSettings {
    pub lighting: Lighting,
    pub mood: Mood,
    pub age_range: String,
    pub gender: String,
    pub ethnicity: String,
    pub resolution: String,
}

impl Default for AdvancedSettings {
    fn default() -> Self {
        Self {
            lighting: Lighting::default(),
            mood: Mood::default(),
            age_range: NOT_SPECIFIED.to_string(),
            gender: NOT_SPECIFIED.to_string(),
            ethnicity: NOT_SPECIFIED.to_string(),
            resolution: DEFAULT_RESOLUTION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalInfo {
    /// Only records whether a photo was supplied; photo bytes are never kept.
    #[serde(default, with = "reference_photo_flag")]
    pub reference_photo: bool,
    pub custom_notes: Option<String>,
    pub preset_used: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub timestamp: String,
    pub version: String,
    pub created_by: String,
}

impl Metadata {
    /// Metadata stamped with the current local time.
    pub fn new() -> Self {
        Self::at(Local::now())
    }

    pub fn at(instant: DateTime<Local>) -> Self {
        Self {
            timestamp: instant.format(TIMESTAMP_FORMAT).to_string(),
            version: PROFILE_VERSION.to_string(),
            created_by: PROFILE_PRODUCER.to_string(),
        }
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete profile document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileData {
    pub basic_info: BasicInfo,
    pub advanced_settings: AdvancedSettings,
    pub additional_info: AdditionalInfo,
    pub metadata: Metadata,
    #[serde(default)]
    pub generated_prompt: Option<String>,
}

impl ProfileData {
    /// A profile that has not been through prompt synthesis yet.
    pub fn new(
        basic_info: BasicInfo,
        advanced_settings: AdvancedSettings,
        additional_info: AdditionalInfo,
        metadata: Metadata,
    ) -> Self {
        Self {
            basic_info,
            advanced_settings,
            additional_info,
            metadata,
            generated_prompt: None,
        }
    }

    /// Returns a new profile carrying `prompt`; `self` is consumed, never edited.
    pub fn with_prompt(self, prompt: impl Into<String>) -> Self {
        Self {
            generated_prompt: Some(prompt.into()),
            ..self
        }
    }

    /// Converts a stored profile back into raw form values for re-editing.
    pub fn to_fields(&self) -> (BasicFields, AdvancedFields, AdditionalFields) {
        let basic = BasicFields {
            purpose: Some(self.basic_info.purpose.to_string()),
            attire: Some(self.basic_info.attire.to_string()),
            background: Some(self.basic_info.background.to_string()),
            vibe: Some(self.basic_info.vibe.to_string()),
        };
        let advanced = AdvancedFields {
            lighting: Some(self.advanced_settings.lighting.to_string()),
            mood: Some(self.advanced_settings.mood.to_string()),
            age_range: Some(self.advanced_settings.age_range.clone()),
            gender: Some(self.advanced_settings.gender.clone()),
            ethnicity: Some(self.advanced_settings.ethnicity.clone()),
            resolution: Some(self.advanced_settings.resolution.clone()),
        };
        let additional = AdditionalFields {
            reference_photo: self.additional_info.reference_photo,
            custom_notes: self.additional_info.custom_notes.clone(),
            preset_name: self.additional_info.preset_used.clone(),
        };
        (basic, advanced, additional)
    }
}

/// Raw required values as they arrive from a form
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BasicFields {
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub attire: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub vibe: Option<String>,
}

impl BasicFields {
    pub fn new(
        purpose: impl Into<String>,
        attire: impl Into<String>,
        background: impl Into<String>,
        vibe: impl Into<String>,
    ) -> Self {
        Self {
            purpose: Some(purpose.into()),
            attire: Some(attire.into()),
            background: Some(background.into()),
            vibe: Some(vibe.into()),
        }
    }
}

/// Raw optional values; blanks fall back to the `AdvancedSettings` defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AdvancedFields {
    #[serde(default)]
    pub lighting: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub age_range: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub ethnicity: Option<String>,
    #[serde(default)]
    pub resolution: Option<String>,
}

impl AdvancedFields {
    pub fn into_settings(self) -> AdvancedSettings {
        let defaults = AdvancedSettings::default();
        AdvancedSettings {
            lighting: non_blank(self.lighting)
                .map(Lighting::from)
                .unwrap_or(defaults.lighting),
            mood: non_blank(self.mood).map(Mood::from).unwrap_or(defaults.mood),
            age_range: non_blank(self.age_range).unwrap_or(defaults.age_range),
            gender: non_blank(self.gender).unwrap_or(defaults.gender),
            ethnicity: non_blank(self.ethnicity).unwrap_or(defaults.ethnicity),
            resolution: non_blank(self.resolution).unwrap_or(defaults.resolution),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AdditionalFields {
    #[serde(default)]
    pub reference_photo: bool,
    #[serde(default)]
    pub custom_notes: Option<String>,
    #[serde(default)]
    pub preset_name: Option<String>,
}

impl AdditionalFields {
    /// Notes are trimmed; notes that are blank after trimming are dropped.
    pub fn into_info(self) -> AdditionalInfo {
        AdditionalInfo {
            reference_photo: self.reference_photo,
            custom_notes: self
                .custom_notes
                .map(|notes| notes.trim().to_string())
                .filter(|notes| !notes.is_empty()),
            preset_used: non_blank(self.preset_name),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Persists the photo flag as `"uploaded"` / `null`. On load, `null`,
/// `false` and `""` all read as no photo.
mod reference_photo_flag {
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    const UPLOADED: &str = "uploaded";

    pub fn serialize<S: Serializer>(present: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        if *present {
            serializer.serialize_some(UPLOADED)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let present = match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) | Some(Value::Bool(false)) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(_) => true,
        };
        Ok(present)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_profile() -> ProfileData {
        ProfileData::new(
            BasicInfo {
                purpose: Purpose::LinkedIn,
                attire: Attire::BusinessFormal,
                background: Background::CorporateOffice,
                vibe: Vibe::Confident,
            },
            AdvancedSettings::default(),
            AdditionalInfo {
                reference_photo: true,
                custom_notes: Some("round glasses".to_string()),
                preset_used: None,
            },
            Metadata::at(Local.with_ymd_and_hms(2024, 3, 5, 9, 7, 2).unwrap()),
        )
    }

    #[test]
    fn test_advanced_defaults() {
        let settings = AdvancedSettings::default();
        assert_eq!(settings.lighting, Lighting::ProfessionalFlash);
        assert_eq!(settings.mood, Mood::Professional);
        assert_eq!(settings.age_range, "Not Specified");
        assert_eq!(settings.gender, "Not Specified");
        assert_eq!(settings.ethnicity, "Not Specified");
        assert_eq!(settings.resolution, "1024x1024 (Standard)");
    }

    #[test]
    fn test_metadata_format() {
        let profile = sample_profile();
        assert_eq!(profile.metadata.timestamp, "2024-03-05 09:07:02");
        assert_eq!(profile.metadata.version, "2.0");
        assert_eq!(profile.metadata.created_by, "APEX Portrait Generator");
    }

    #[test]
    fn test_prompt_absent_until_attached() {
        let profile = sample_profile();
        assert!(profile.generated_prompt.is_none());

        let with_prompt = profile.clone().with_prompt("a prompt");
        assert_eq!(with_prompt.generated_prompt.as_deref(), Some("a prompt"));
        assert_eq!(with_prompt.basic_info, profile.basic_info);
    }

    #[test]
    fn test_json_section_order_and_names() {
        let json = serde_json::to_string(&sample_profile()).unwrap();
        let positions: Vec<usize> = [
            "\"basic_info\"",
            "\"advanced_settings\"",
            "\"additional_info\"",
            "\"metadata\"",
            "\"generated_prompt\"",
        ]
        .iter()
        .map(|key| json.find(key).expect("section present"))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_reference_photo_persists_as_marker() {
        let value = serde_json::to_value(sample_profile()).unwrap();
        assert_eq!(value["additional_info"]["reference_photo"], "uploaded");
        assert_eq!(value["basic_info"]["attire"], "Business Formal");
        assert!(value["generated_prompt"].is_null());

        let mut without = sample_profile();
        without.additional_info.reference_photo = false;
        let value = serde_json::to_value(&without).unwrap();
        assert!(value["additional_info"]["reference_photo"].is_null());

        let parsed: ProfileData = serde_json::from_value(value).unwrap();
        assert!(!parsed.additional_info.reference_photo);
    }

    #[test]
    fn test_reference_photo_false_or_blank_reads_as_absent() {
        let stored = serde_json::to_value(sample_profile()).unwrap();
        for (marker, expected) in [
            (serde_json::json!(false), false),
            (serde_json::json!(""), false),
            (serde_json::json!(true), true),
            (serde_json::json!("uploaded"), true),
        ] {
            let mut value = stored.clone();
            value["additional_info"]["reference_photo"] = marker.clone();
            let parsed: ProfileData = serde_json::from_value(value).unwrap();
            assert_eq!(parsed.additional_info.reference_photo, expected, "{marker}");
        }
    }

    #[test]
    fn test_blank_advanced_fields_use_defaults() {
        let settings = AdvancedFields {
            lighting: Some("  ".to_string()),
            mood: Some("Calm".to_string()),
            resolution: Some("2048x2048 (High-Res)".to_string()),
            ..Default::default()
        }
        .into_settings();
        assert_eq!(settings.lighting, Lighting::ProfessionalFlash);
        assert_eq!(settings.mood, Mood::Calm);
        assert_eq!(settings.gender, "Not Specified");
        assert_eq!(settings.resolution, "2048x2048 (High-Res)");
    }

    #[test]
    fn test_custom_notes_trimmed() {
        let info = AdditionalFields {
            custom_notes: Some("  beard  \n".to_string()),
            ..Default::default()
        }
        .into_info();
        assert_eq!(info.custom_notes.as_deref(), Some("beard"));

        let blank = AdditionalFields {
            custom_notes: Some("   ".to_string()),
            ..Default::default()
        }
        .into_info();
        assert_eq!(blank.custom_notes, None);
    }

    #[test]
    fn test_to_fields_restores_form_values() {
        let (basic, advanced, additional) = sample_profile().to_fields();
        assert_eq!(
            basic,
            BasicFields::new("LinkedIn", "Business Formal", "Corporate Office", "Confident")
        );
        assert_eq!(advanced.lighting.as_deref(), Some("Professional Flash"));
        assert!(additional.reference_photo);
        assert_eq!(additional.custom_notes.as_deref(), Some("round glasses"));
    }
}
