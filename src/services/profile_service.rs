//! Profile service
//!
//! Validate, build, synthesize and optionally persist a profile in one call.
//! A failed save is reported next to the computed profile instead of
//! discarding it.

use std::path::PathBuf;

use crate::config::ProfileConfig;
use crate::domain::{AdditionalFields, AdvancedFields, BasicFields, Metadata, ProfileData};
use crate::error::ValidationError;
use crate::services::prompt::{PromptFields, PromptSynthesizer};
use crate::services::repository::ProfileRepository;

pub const SUCCESS_MESSAGE: &str = "✅ Advanced style profile generated successfully!";

/// What happened to the persistence step of a build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persistence {
    Skipped,
    Saved(PathBuf),
    Failed(String),
}

/// A successfully computed profile, whatever happened when saving it
#[derive(Debug, Clone)]
pub struct BuiltProfile {
    pub profile: ProfileData,
    pub prompt: String,
    pub negative_prompt: &'static str,
    pub persistence: Persistence,
}

impl BuiltProfile {
    pub fn saved_path(&self) -> Option<&PathBuf> {
        match &self.persistence {
            Persistence::Saved(path) => Some(path),
            _ => None,
        }
    }

    /// Save failure message, if the save was attempted and failed.
    pub fn warning(&self) -> Option<&str> {
        match &self.persistence {
            Persistence::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn status(&self) -> String {
        match &self.persistence {
            Persistence::Skipped => SUCCESS_MESSAGE.to_string(),
            Persistence::Saved(path) => {
                format!("{SUCCESS_MESSAGE} | 💾 Saved to: {}", path.display())
            }
            Persistence::Failed(reason) => format!("{SUCCESS_MESSAGE} | ⚠️ Save failed: {reason}"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ProfileOutcome {
    /// Validation failed; nothing was built or saved.
    Rejected(ValidationError),
    Built(Box<BuiltProfile>),
}

impl ProfileOutcome {
    pub fn status(&self) -> String {
        match self {
            Self::Rejected(err) => err.to_string(),
            Self::Built(built) => built.status(),
        }
    }

    pub fn built(&self) -> Option<&BuiltProfile> {
        match self {
            Self::Built(built) => Some(&**built),
            Self::Rejected(_) => None,
        }
    }

    /// The four strings a form displays: profile JSON, status, prompt and
    /// saved path. Empty strings stand in for absent values.
    pub fn form_output(&self) -> (String, String, String, String) {
        match self {
            Self::Rejected(err) => (String::new(), err.to_string(), String::new(), String::new()),
            Self::Built(built) => (
                serde_json::to_string_pretty(&built.profile).unwrap_or_default(),
                built.status(),
                built.prompt.clone(),
                built
                    .saved_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProfileService {
    repository: ProfileRepository,
    synthesizer: PromptSynthesizer,
    auto_save: bool,
}

impl ProfileService {
    pub fn new(config: &ProfileConfig) -> Self {
        let repository = ProfileRepository::new(config.profiles_dir.clone());
        if let Err(e) = repository.ensure_storage() {
            tracing::warn!(error = %e, "Profile storage unavailable; saves will be retried per request");
        }

        Self {
            repository,
            synthesizer: PromptSynthesizer::new(),
            auto_save: config.auto_save,
        }
    }

    pub fn repository(&self) -> &ProfileRepository {
        &self.repository
    }

    pub fn synthesizer(&self) -> &PromptSynthesizer {
        &self.synthesizer
    }

    pub fn auto_save(&self) -> bool {
        self.auto_save
    }

    pub fn build_profile(
        &self,
        basic: BasicFields,
        advanced: AdvancedFields,
        additional: AdditionalFields,
        persist: bool,
    ) -> ProfileOutcome {
        let basic_info = match basic.validate() {
            Ok(info) => info,
            Err(err) => {
                tracing::debug!(error = %err, "Profile rejected");
                return ProfileOutcome::Rejected(err);
            }
        };

        let profile = ProfileData::new(
            basic_info,
            advanced.into_settings(),
            additional.into_info(),
            Metadata::new(),
        );
        let prompt = self.synthesizer.synthesize(&PromptFields::from(&profile));
        let profile = profile.with_prompt(prompt.clone());

        let persistence = if persist {
            match self.repository.save(&profile, None) {
                Ok(path) => Persistence::Saved(path),
                Err(e) => {
                    tracing::warn!(error = %e, "Profile built but not saved");
                    Persistence::Failed(e.to_string())
                }
            }
        } else {
            Persistence::Skipped
        };

        ProfileOutcome::Built(Box::new(BuiltProfile {
            profile,
            prompt,
            negative_prompt: self.synthesizer.negative_prompt(),
            persistence,
        }))
    }
}
