use anyhow::Result;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }

    pub fn is_prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

/// Settings consumed by the profile engine itself
#[derive(Debug, Clone)]
pub struct ProfileConfig {
    pub profiles_dir: PathBuf,
    /// Persist built profiles when a request does not say otherwise.
    pub auto_save: bool,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            profiles_dir: PathBuf::from("data/profiles"),
            auto_save: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PromptConfig {
    pub include_negative_prompt: bool,
    pub max_custom_notes_len: usize,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            include_negative_prompt: true,
            max_custom_notes_len: 1000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,
    pub server_addr: String,

    // CORS
    pub cors_allow_origins: Vec<String>,

    pub profile: ProfileConfig,
    pub prompt: PromptConfig,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_source(|key| env::var(key).ok()))
    }

    /// Builds settings from any key lookup; missing or unparseable values
    /// fall back to defaults.
    pub fn from_source(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let env = Environment::from_str(&lookup("ENV").unwrap_or_else(|| "dev".to_string()));
        let server_addr = lookup("SERVER_ADDR").unwrap_or_else(|| "127.0.0.1:7860".to_string());

        // CORS
        let cors_allow_origins = lookup("CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        // Profiles
        let profile_defaults = ProfileConfig::default();
        let profiles_dir = lookup("APEX_PROFILES_DIR")
            .map(PathBuf::from)
            .unwrap_or(profile_defaults.profiles_dir);
        let auto_save = lookup("APEX_AUTO_SAVE")
            .map(|s| parse_flag(&s))
            .unwrap_or(profile_defaults.auto_save);

        // Prompts
        let prompt_defaults = PromptConfig::default();
        let include_negative_prompt = lookup("APEX_INCLUDE_NEGATIVE_PROMPT")
            .map(|s| parse_flag(&s))
            .unwrap_or(prompt_defaults.include_negative_prompt);
        let max_custom_notes_len = lookup("APEX_MAX_NOTES_LENGTH")
            .and_then(|s| s.parse().ok())
            .unwrap_or(prompt_defaults.max_custom_notes_len);

        Settings {
            env,
            server_addr,
            cors_allow_origins,
            profile: ProfileConfig {
                profiles_dir,
                auto_save,
            },
            prompt: PromptConfig {
                include_negative_prompt,
                max_custom_notes_len,
            },
        }
    }
}

/// Only a case-insensitive "true" enables a flag.
fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(pairs: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_source(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let settings = settings_from(&[]);
        assert_eq!(settings.env, Environment::Dev);
        assert_eq!(settings.server_addr, "127.0.0.1:7860");
        assert_eq!(settings.cors_allow_origins, vec!["http://localhost:3000"]);
        assert_eq!(settings.profile.profiles_dir, PathBuf::from("data/profiles"));
        assert!(settings.profile.auto_save);
        assert!(settings.prompt.include_negative_prompt);
        assert_eq!(settings.prompt.max_custom_notes_len, 1000);
    }

    #[test]
    fn test_overrides() {
        let settings = settings_from(&[
            ("ENV", "production"),
            ("APEX_PROFILES_DIR", "/var/lib/apex"),
            ("APEX_AUTO_SAVE", "FALSE"),
            ("APEX_MAX_NOTES_LENGTH", "250"),
            ("CORS_ALLOW_ORIGINS", "https://a.example, ,https://b.example"),
        ]);
        assert!(settings.env.is_prod());
        assert_eq!(settings.profile.profiles_dir, PathBuf::from("/var/lib/apex"));
        assert!(!settings.profile.auto_save);
        assert_eq!(settings.prompt.max_custom_notes_len, 250);
        assert_eq!(
            settings.cors_allow_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn test_flag_parsing() {
        assert!(settings_from(&[("APEX_AUTO_SAVE", "True")]).profile.auto_save);
        assert!(!settings_from(&[("APEX_AUTO_SAVE", "yes")]).profile.auto_save);
        assert_eq!(
            settings_from(&[("APEX_MAX_NOTES_LENGTH", "lots")])
                .prompt
                .max_custom_notes_len,
            1000
        );
    }
}
