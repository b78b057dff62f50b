#![doc = include_str!("../README.md")]

pub use crate::error::{Error, Result};
pub use crate::plan::{ScanResult, Spacing, plan_polygon, plan_rectangle};
pub use crate::types::*;
pub use crate::writer::{MissionDocuments, MissionWriter};

mod error;
mod plan;
mod types;
pub mod wpml;
mod writer;
