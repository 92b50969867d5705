pub mod config;
pub mod convert;
pub mod skills;

pub use config::Config;
pub use convert::{Conversion, ConversionReport, EntryStatus, convert_agent, convert_content, run, verify};
pub use skills::{Skill, SkillMetadata, load_skill};
