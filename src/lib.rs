// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod frequency;
pub mod persistence;
pub mod pipeline;
pub mod source;

pub use crate::config::BuildConfig;
pub use crate::core::merger::{build_dictionary, BuildReport};
pub use crate::core::types::{Dictionary, DictionaryEntry, SourceRow};
pub use crate::error::BuildError;
pub use crate::frequency::{AllowList, FrequencySource, RankedListFile, StaticWordList};
