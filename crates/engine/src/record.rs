//! Versioned sheet record - the explicit schema handed across the
//! persistence boundary.
//!
//! The record is a tagged enum so the stored shape always names its
//! version; future schema changes add a variant and migrate
//! deterministically in [`SheetRecord::latest`] instead of guessing at
//! loosely-typed blobs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sheetkeeper_domain::{Investigator, UserId};

use crate::context::SessionContext;

/// A stored investigator sheet, tagged with its schema version.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "version")]
pub enum SheetRecord {
    #[serde(rename = "1")]
    V1(SheetRecordV1),
}

/// Version 1 of the stored sheet shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetRecordV1 {
    pub investigator: Investigator,
    pub saved_by: UserId,
    pub saved_at: DateTime<Utc>,
}

impl SheetRecord {
    /// Build a current-version record stamped with the session context.
    pub fn v1(investigator: Investigator, ctx: &SessionContext, now: DateTime<Utc>) -> Self {
        Self::V1(SheetRecordV1 {
            investigator,
            saved_by: ctx.user_id(),
            saved_at: now,
        })
    }

    /// Migrate any stored version up to the newest shape.
    pub fn latest(self) -> SheetRecordV1 {
        match self {
            Self::V1(record) => record,
        }
    }

    /// The schema version carried by this record.
    pub fn version(&self) -> u32 {
        match self {
            Self::V1(_) => 1,
        }
    }
}
