//! Categorical portrait attributes
//!
//! Each category is a closed set of labels shown in the form, plus an
//! `Unrecognized` branch that keeps whatever label the caller sent. Every
//! label maps to the phrase fragment used by the prompt synthesizer; an
//! unrecognized label maps to the category's generic fallback fragment.

use serde::{Deserialize, Serialize};

macro_rules! categorical {
    (
        $(#[$meta:meta])*
        $name:ident, fallback = $fallback:literal {
            $($variant:ident => $label:literal : $fragment:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            /// A label outside the closed set, kept verbatim.
            Unrecognized(String),
        }

        impl $name {
            /// Fragment used when the label is not in the table.
            pub const FALLBACK: &'static str = $fallback;

            /// Known labels in display order.
            pub const LABELS: &'static [&'static str] = &[$($label),+];

            pub fn from_label(label: &str) -> Self {
                match label {
                    $($label => Self::$variant,)+
                    other => Self::Unrecognized(other.to_string()),
                }
            }

            pub fn label(&self) -> &str {
                match self {
                    $(Self::$variant => $label,)+
                    Self::Unrecognized(label) => label,
                }
            }

            pub fn fragment(&self) -> &'static str {
                match self {
                    $(Self::$variant => $fragment,)+
                    Self::Unrecognized(_) => Self::FALLBACK,
                }
            }

            pub fn is_recognized(&self) -> bool {
                !matches!(self, Self::Unrecognized(_))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl From<&str> for $name {
            fn from(label: &str) -> Self {
                Self::from_label(label)
            }
        }

        impl From<String> for $name {
            fn from(label: String) -> Self {
                Self::from_label(&label)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Unrecognized(label) => label,
                    known => known.label().to_string(),
                }
            }
        }
    };
}

categorical! {
    /// What the portrait will be used for
    Purpose, fallback = "professional portrait" {
        LinkedIn => "LinkedIn": "professional headshot optimized for social media",
        Resume => "Resume": "formal professional portrait for career applications",
        CorporateWebsite => "Corporate Website": "executive-level corporate portrait",
        PersonalBranding => "Personal Branding": "distinctive personal brand portrait",
        BusinessCard => "Business Card": "compact professional headshot",
        Other => "Other": "professional portrait",
    }
}

categorical! {
    /// Preferred clothing style
    Attire, fallback = "professional attire" {
        BusinessFormal => "Business Formal": "sharp business suit, professional tie, polished appearance",
        BusinessCasual => "Business Casual": "smart blazer, dress shirt, refined casual look",
        SmartCasual => "Smart Casual": "stylish casual wear, modern professional appearance",
        CreativeProfessional => "Creative Professional": "fashionable, artistic professional attire",
        Academic => "Academic": "scholarly attire, professional academic dress",
        Other => "Other": "appropriate professional clothing",
    }
}

categorical! {
    /// Scene behind the subject
    Background, fallback = "professional background" {
        CorporateOffice => "Corporate Office": "modern office environment, soft bokeh, professional lighting",
        PlainColor => "Plain Color": "clean gradient background, studio lighting",
        Outdoor => "Outdoor": "natural outdoor setting, soft natural lighting",
        StudioLike => "Studio-like": "professional studio setup, controlled lighting",
        LibraryAcademic => "Library/Academic": "scholarly environment, books, academic setting",
        CreativeSpace => "Creative Space": "artistic workspace, creative elements, modern aesthetic",
        Other => "Other": "appropriate professional background",
    }
}

categorical! {
    /// Expression and presence the subject should convey
    Vibe, fallback = "professional demeanor" {
        Confident => "Confident": "confident expression, direct gaze, strong posture",
        Friendly => "Friendly": "warm smile, approachable demeanor, friendly eyes",
        Approachable => "Approachable": "gentle smile, open expression, welcoming appearance",
        Authoritative => "Authoritative": "commanding presence, serious expression, leadership aura",
        Creative => "Creative": "artistic expression, creative energy, innovative look",
        Sophisticated => "Sophisticated": "refined elegance, intellectual appearance, polished style",
        Warm => "Warm": "genuine warmth, kind expression, compassionate presence",
    }
}

categorical! {
    Lighting, fallback = "professional lighting" {
        NaturalLight => "Natural Light": "soft natural lighting, window light",
        StudioLighting => "Studio Lighting": "professional studio lighting setup",
        SoftLighting => "Soft Lighting": "gentle, diffused lighting",
        DramaticLighting => "Dramatic Lighting": "dramatic shadows and highlights",
        GoldenHour => "Golden Hour": "warm golden hour lighting",
        ProfessionalFlash => "Professional Flash": "professional flash photography lighting",
    }
}

categorical! {
    Mood, fallback = "professional demeanor" {
        Professional => "Professional": "professional demeanor",
        Casual => "Casual": "relaxed, casual atmosphere",
        Serious => "Serious": "serious, focused expression",
        Energetic => "Energetic": "dynamic, energetic presence",
        Calm => "Calm": "calm, peaceful demeanor",
        Inspiring => "Inspiring": "inspiring, motivational presence",
    }
}

impl Default for Lighting {
    fn default() -> Self {
        Self::ProfessionalFlash
    }
}

impl Default for Mood {
    fn default() -> Self {
        Self::Professional
    }
}

/// Sentinel for demographic fields the user left open.
pub const NOT_SPECIFIED: &str = "Not Specified";

pub const DEFAULT_RESOLUTION: &str = "1024x1024 (Standard)";

pub const AGE_RANGES: &[&str] = &["20-30", "30-40", "40-50", "50-60", "60+", NOT_SPECIFIED];

pub const GENDERS: &[&str] = &["Male", "Female", "Non-binary", NOT_SPECIFIED];

pub const ETHNICITIES: &[&str] = &[
    "Asian",
    "Black",
    "Caucasian",
    "Hispanic",
    "Middle Eastern",
    "Mixed",
    NOT_SPECIFIED,
];

pub const RESOLUTIONS: &[&str] = &[
    DEFAULT_RESOLUTION,
    "1536x1024 (Wide)",
    "1024x1536 (Portrait)",
    "2048x2048 (High-Res)",
];

/// Every option list a form needs to render its dropdowns.
#[derive(Debug, Clone, Serialize)]
pub struct OptionCatalog {
    pub purpose: &'static [&'static str],
    pub attire: &'static [&'static str],
    pub background: &'static [&'static str],
    pub vibe: &'static [&'static str],
    pub lighting: &'static [&'static str],
    pub mood: &'static [&'static str],
    pub age_range: &'static [&'static str],
    pub gender: &'static [&'static str],
    pub ethnicity: &'static [&'static str],
    pub resolution: &'static [&'static str],
}

impl OptionCatalog {
    pub fn new() -> Self {
        Self {
            purpose: Purpose::LABELS,
            attire: Attire::LABELS,
            background: Background::LABELS,
            vibe: Vibe::LABELS,
            lighting: Lighting::LABELS,
            mood: Mood::LABELS,
            age_range: AGE_RANGES,
            gender: GENDERS,
            ethnicity: ETHNICITIES,
            resolution: RESOLUTIONS,
        }
    }
}

impl Default for OptionCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_resolve_to_variants() {
        assert_eq!(Purpose::from_label("LinkedIn"), Purpose::LinkedIn);
        assert_eq!(Background::from_label("Studio-like"), Background::StudioLike);
        assert_eq!(
            Background::from_label("Library/Academic"),
            Background::LibraryAcademic
        );
        assert_eq!(Lighting::default().label(), "Professional Flash");
        assert_eq!(Mood::default().label(), "Professional");
    }

    #[test]
    fn test_every_label_round_trips() {
        for label in Purpose::LABELS {
            let purpose = Purpose::from_label(label);
            assert!(purpose.is_recognized());
            assert_eq!(purpose.label(), *label);
        }
        for label in Vibe::LABELS {
            assert!(Vibe::from_label(label).is_recognized());
        }
    }

    #[test]
    fn test_unrecognized_label_falls_back() {
        let vibe = Vibe::from_label("Mysterious");
        assert_eq!(vibe, Vibe::Unrecognized("Mysterious".to_string()));
        assert!(!vibe.is_recognized());
        assert_eq!(vibe.label(), "Mysterious");
        assert_eq!(vibe.fragment(), "professional demeanor");

        assert_eq!(Purpose::from_label("Dating App").fragment(), "professional portrait");
        assert_eq!(Attire::from_label("").fragment(), "professional attire");
        assert_eq!(Lighting::from_label("Neon").fragment(), "professional lighting");
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        assert!(!Purpose::from_label("linkedin").is_recognized());
    }

    #[test]
    fn test_serializes_as_plain_label() {
        let json = serde_json::to_string(&Attire::BusinessFormal).unwrap();
        assert_eq!(json, "\"Business Formal\"");

        let unknown: Mood = serde_json::from_str("\"Whimsical\"").unwrap();
        assert_eq!(unknown, Mood::Unrecognized("Whimsical".to_string()));
        assert_eq!(serde_json::to_string(&unknown).unwrap(), "\"Whimsical\"");
    }

    #[test]
    fn test_option_catalog_lists_defaults() {
        let catalog = OptionCatalog::new();
        assert!(catalog.age_range.contains(&NOT_SPECIFIED));
        assert_eq!(catalog.resolution[0], DEFAULT_RESOLUTION);
        assert_eq!(catalog.vibe.len(), 7);
    }
}
