//! Samplest editor state: tabs of request/response sample fixtures.
//!
//! - [`field`]: registry of form fields and their control behaviour
//! - [`aggregate`]: the [`Workspace`] of tabs and the active-tab tracker
//! - [`view`]: control state rendered for the current tab
//! - [`gather`]: nested sample documents built from tab records
//! - [`archive`]: zip export of all samples
//! - [`snapshot`]: persistence of the workspace as one JSON object

pub mod aggregate;
pub mod archive;
pub mod field;
pub mod gather;
pub mod snapshot;
pub mod view;

pub use aggregate::{FormRecord, RenameOutcome, Tab, TabId, Workspace, WorkspaceError};
pub use field::{Control, FieldDescriptor, FieldKind, FieldValue, FIELDS};
pub use gather::{GatherError, Samplest};
pub use view::{render, ViewState};
