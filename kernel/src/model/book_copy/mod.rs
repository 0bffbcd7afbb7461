use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::id::{BookCopyId, BookId};

pub mod event;

#[derive(Debug, Clone)]
pub struct BookCopy {
    pub id: BookCopyId,
    pub book: CopyBook,
    pub imprint: String,
    pub status: CopyStatus,
    pub due_back: DateTime<Utc>,
}

/// Book fields a copy rendering needs.
#[derive(Debug, Clone)]
pub struct CopyBook {
    pub id: BookId,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum CopyStatus {
    Available,
    #[default]
    Maintenance,
    Loaned,
    Reserved,
}

impl CopyStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CopyStatus::Available => "Available",
            CopyStatus::Maintenance => "Maintenance",
            CopyStatus::Loaned => "Loaned",
            CopyStatus::Reserved => "Reserved",
        }
    }
}

impl std::fmt::Display for CopyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CopyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(CopyStatus::Available),
            "Maintenance" => Ok(CopyStatus::Maintenance),
            "Loaned" => Ok(CopyStatus::Loaned),
            "Reserved" => Ok(CopyStatus::Reserved),
            other => Err(format!("unknown copy status: {other}")),
        }
    }
}
