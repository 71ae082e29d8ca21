//! SheetKeeper engine - the mutation surface around one investigator sheet.
//!
//! The engine owns exactly one [`sheetkeeper_domain::Investigator`] per
//! controller instance, re-derives the computed block after every relevant
//! mutation, and hands the finished sheet out as a versioned record. It is
//! fully synchronous; a server reusing it to validate submitted sheets must
//! scope one controller per request.

pub mod context;
pub mod controller;
pub mod record;

pub use context::SessionContext;
pub use controller::{IdentityField, InvestigatorStateController, SheetError, SkillFieldChange};
pub use record::{SheetRecord, SheetRecordV1};
