//! Preset catalog
//!
//! Named bundles that pre-fill the required choices and custom notes of a
//! form. Applying a preset never builds a profile by itself.

use serde::Serialize;

use super::profile::{AdditionalFields, BasicFields};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub purpose: &'static str,
    pub attire: &'static str,
    pub background: &'static str,
    pub vibe: &'static str,
    pub custom_notes: &'static str,
}

impl Preset {
    pub fn basic_fields(&self) -> BasicFields {
        BasicFields::new(self.purpose, self.attire, self.background, self.vibe)
    }

    /// Additional fields with the preset's notes and name filled in.
    pub fn additional_fields(&self) -> AdditionalFields {
        AdditionalFields {
            reference_photo: false,
            custom_notes: Some(self.custom_notes.to_string()),
            preset_name: Some(self.name.to_string()),
        }
    }
}

const PRESETS: &[Preset] = &[
    Preset {
        name: "LinkedIn Professional",
        purpose: "LinkedIn",
        attire: "Business Formal",
        background: "Corporate Office",
        vibe: "Confident",
        custom_notes: "Professional headshot for LinkedIn profile with clean, corporate appearance",
    },
    Preset {
        name: "Creative Portfolio",
        purpose: "Personal Branding",
        attire: "Creative Professional",
        background: "Creative Space",
        vibe: "Creative",
        custom_notes: "Artistic and creative portrait showcasing personality and creativity",
    },
    Preset {
        name: "Academic Professional",
        purpose: "Corporate Website",
        attire: "Academic",
        background: "Library/Academic",
        vibe: "Sophisticated",
        custom_notes: "Professional academic portrait for university or research profile",
    },
    Preset {
        name: "Startup Founder",
        purpose: "Personal Branding",
        attire: "Smart Casual",
        background: "Creative Space",
        vibe: "Approachable",
        custom_notes: "Modern, approachable portrait for startup founder or entrepreneur",
    },
    Preset {
        name: "Executive Portrait",
        purpose: "Corporate Website",
        attire: "Business Formal",
        background: "Corporate Office",
        vibe: "Authoritative",
        custom_notes: "High-level executive portrait conveying leadership and authority",
    },
];

/// All presets in catalog order.
pub fn list_presets() -> &'static [Preset] {
    PRESETS
}

pub fn preset_names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|preset| preset.name)
}

/// Looks up a preset by exact name. Unknown names yield `None`.
pub fn apply_preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.name == name)
}
