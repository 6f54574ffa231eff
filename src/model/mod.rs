// File: src/model/mod.rs
pub mod adapter;
pub mod annotate;
pub mod date;
pub mod segment;

pub use segment::segment;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One all-day menu event extracted from a source document.
///
/// The title is shared by every event of the document; the date always names
/// a real calendar day; the description is the annotated lines joined by line
/// breaks. Created by the segmenter and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEvent {
    pub title: String,
    pub date: NaiveDate,
    pub description: String,
}
