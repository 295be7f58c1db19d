//! Prompt synthesis
//!
//! Builds the generation prompt from categorical choices using the phrase
//! tables in `domain::categories`. Output depends only on the inputs.

use crate::domain::{
    AdvancedSettings, Attire, Background, BasicInfo, Lighting, Mood, ProfileData, Purpose, Vibe,
};

const LEAD_QUALIFIER: &str = "Ultra-realistic";

const PHOTOGRAPHY_TERMS: &str = "professional photography, high resolution, cinematic lighting, \
     sharp focus, professional color grading, detailed facial features";

pub const QUALITY_SUFFIX: &str = "masterpiece, best quality, highly detailed, photorealistic";

pub const NEGATIVE_PROMPT: &str = "blurry, low quality, pixelated, distorted, ugly, deformed, \
     bad anatomy, bad proportions, extra limbs, mutation, \
     low resolution, jpeg artifacts, watermark, signature, \
     cartoon, anime, painting, illustration, 3d render";

/// Borrowed view of the fields that drive synthesis
#[derive(Debug, Clone, Copy)]
pub struct PromptFields<'a> {
    pub purpose: &'a Purpose,
    pub attire: &'a Attire,
    pub background: &'a Background,
    pub vibe: &'a Vibe,
    pub lighting: &'a Lighting,
    pub mood: &'a Mood,
    pub custom_notes: Option<&'a str>,
}

impl<'a> PromptFields<'a> {
    pub fn new(
        basic: &'a BasicInfo,
        advanced: &'a AdvancedSettings,
        custom_notes: Option<&'a str>,
    ) -> Self {
        Self {
            purpose: &basic.purpose,
            attire: &basic.attire,
            background: &basic.background,
            vibe: &basic.vibe,
            lighting: &advanced.lighting,
            mood: &advanced.mood,
            custom_notes,
        }
    }
}

impl<'a> From<&'a ProfileData> for PromptFields<'a> {
    fn from(profile: &'a ProfileData) -> Self {
        Self::new(
            &profile.basic_info,
            &profile.advanced_settings,
            profile.additional_info.custom_notes.as_deref(),
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PromptSynthesizer;

impl PromptSynthesizer {
    pub fn new() -> Self {
        Self
    }

    pub fn synthesize(&self, fields: &PromptFields<'_>) -> String {
        let mut prompt = format!(
            "{LEAD_QUALIFIER} {}, featuring {}, set against {}, with {}, {}, {}, {PHOTOGRAPHY_TERMS}",
            fields.purpose.fragment(),
            fields.attire.fragment(),
            fields.background.fragment(),
            fields.vibe.fragment(),
            fields.lighting.fragment(),
            fields.mood.fragment(),
        );

        if let Some(notes) = fields.custom_notes.map(str::trim).filter(|n| !n.is_empty()) {
            prompt.push_str(", ");
            prompt.push_str(notes);
        }

        prompt.push_str(", ");
        prompt.push_str(QUALITY_SUFFIX);

        let recognized = fields.purpose.is_recognized()
            && fields.attire.is_recognized()
            && fields.background.is_recognized()
            && fields.vibe.is_recognized();
        tracing::debug!(
            purpose = %fields.purpose,
            recognized,
            length = prompt.len(),
            "Synthesized prompt"
        );

        prompt
    }

    /// Fixed list of artifacts to steer away from; independent of any profile.
    pub fn negative_prompt(&self) -> &'static str {
        NEGATIVE_PROMPT
    }
}
