//! Domain types
//!
//! Portrait profile entities, categorical attributes and the preset catalog.

pub mod categories;
pub mod presets;
pub mod profile;

pub use categories::{Attire, Background, Lighting, Mood, OptionCatalog, Purpose, Vibe};
pub use presets::{apply_preset, list_presets, Preset};
pub use profile::{
    AdditionalFields, AdditionalInfo, AdvancedFields, AdvancedSettings, BasicFields, BasicInfo,
    Metadata, ProfileData,
};
