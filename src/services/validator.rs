//! Profile validation
//!
//! Required choices are checked in a fixed order and the first missing one
//! wins. The supplemental checks below do not gate profile building; the
//! HTTP layer applies them to incoming requests.

use crate::domain::categories::RESOLUTIONS;
use crate::domain::{BasicFields, BasicInfo};
use crate::error::{RequiredField, ValidationError};

pub const VALID_MESSAGE: &str = "✅ All inputs valid";

/// Checks that all four required choices are present and non-blank.
pub fn validate(
    purpose: Option<&str>,
    attire: Option<&str>,
    background: Option<&str>,
    vibe: Option<&str>,
) -> Result<&'static str, ValidationError> {
    let values = [purpose, attire, background, vibe];
    for (field, value) in RequiredField::ORDER.into_iter().zip(values) {
        if value.map_or(true, |v| v.trim().is_empty()) {
            return Err(ValidationError::MissingField(field));
        }
    }
    Ok(VALID_MESSAGE)
}

impl BasicFields {
    /// Validates the raw values and turns them into categorical `BasicInfo`.
    pub fn validate(&self) -> Result<BasicInfo, ValidationError> {
        validate(
            self.purpose.as_deref(),
            self.attire.as_deref(),
            self.background.as_deref(),
            self.vibe.as_deref(),
        )?;

        // validate() guarantees every field is Some
        let field = |value: &Option<String>| value.as_deref().unwrap_or_default().to_string();
        Ok(BasicInfo {
            purpose: field(&self.purpose).into(),
            attire: field(&self.attire).into(),
            background: field(&self.background).into(),
            vibe: field(&self.vibe).into(),
        })
    }
}

pub fn validate_resolution(resolution: &str) -> Result<(), ValidationError> {
    if RESOLUTIONS.contains(&resolution) {
        Ok(())
    } else {
        Err(ValidationError::UnsupportedResolution(resolution.to_string()))
    }
}

/// Trimmed notes may hold at most `max` characters.
pub fn validate_custom_notes_length(notes: &str, max: usize) -> Result<(), ValidationError> {
    if notes.trim().chars().count() <= max {
        Ok(())
    } else {
        Err(ValidationError::NotesTooLong { max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Attire, Purpose, Vibe};

    const FULL: [Option<&str>; 4] = [
        Some("LinkedIn"),
        Some("Business Formal"),
        Some("Corporate Office"),
        Some("Confident"),
    ];

    fn run(values: [Option<&str>; 4]) -> Result<&'static str, ValidationError> {
        validate(values[0], values[1], values[2], values[3])
    }

    #[test]
    fn test_valid_inputs() {
        assert_eq!(run(FULL), Ok("✅ All inputs valid"));
    }

    #[test]
    fn test_each_missing_field_is_reported() {
        for (index, field) in RequiredField::ORDER.into_iter().enumerate() {
            let mut absent = FULL;
            absent[index] = None;
            assert_eq!(run(absent), Err(ValidationError::MissingField(field)));

            let mut empty = FULL;
            empty[index] = Some("");
            let err = run(empty).unwrap_err();
            assert_eq!(err, ValidationError::MissingField(field));
            assert!(err.to_string().contains(field.name()));
        }
    }

    #[test]
    fn test_first_missing_field_wins() {
        assert_eq!(
            run([None, None, None, None]),
            Err(ValidationError::MissingField(RequiredField::Purpose))
        );
        assert_eq!(
            run([Some("LinkedIn"), None, None, Some("")]),
            Err(ValidationError::MissingField(RequiredField::Attire))
        );
        assert_eq!(
            run([Some("LinkedIn"), Some("Academic"), Some(" "), None]),
            Err(ValidationError::MissingField(RequiredField::Background))
        );
    }

    #[test]
    fn test_unknown_labels_pass_validation() {
        let fields = BasicFields::new("Dating App", "Hoodie", "Beach", "Mysterious");
        let info = fields.validate().unwrap();
        assert_eq!(info.purpose, Purpose::Unrecognized("Dating App".to_string()));
        assert!(!info.vibe.is_recognized());
    }

    #[test]
    fn test_basic_fields_validate_into_info() {
        let info = BasicFields::new("LinkedIn", "Business Formal", "Corporate Office", "Confident")
            .validate()
            .unwrap();
        assert_eq!(info.purpose, Purpose::LinkedIn);
        assert_eq!(info.attire, Attire::BusinessFormal);
        assert_eq!(info.vibe, Vibe::Confident);

        let missing = BasicFields {
            vibe: None,
            ..BasicFields::new("LinkedIn", "Business Formal", "Corporate Office", "")
        };
        assert_eq!(
            missing.validate(),
            Err(ValidationError::MissingField(RequiredField::Vibe))
        );
    }

    #[test]
    fn test_resolution_check() {
        assert!(validate_resolution("1536x1024 (Wide)").is_ok());
        assert_eq!(
            validate_resolution("800x600"),
            Err(ValidationError::UnsupportedResolution("800x600".to_string()))
        );
    }

    #[test]
    fn test_notes_length_check() {
        assert!(validate_custom_notes_length("  short  ", 5).is_ok());
        assert_eq!(
            validate_custom_notes_length("too long", 5),
            Err(ValidationError::NotesTooLong { max: 5 })
        );
        assert!(validate_custom_notes_length(&"é".repeat(1000), 1000).is_ok());
    }
}
