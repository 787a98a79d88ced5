pub mod catalog;
pub mod classifier;
pub mod domain;
pub mod error;
pub mod index;
pub mod layout;
pub mod planner;
pub mod ports;
pub mod sync;
pub mod writer;

#[cfg(test)]
pub(crate) mod test_support;

pub use catalog::CatalogReader;
pub use domain::{Difficulty, ProblemMetadata, SessionToken, StarterTemplate, SubmissionRecord,
    SubmissionStatus, SyncIndexEntry};
pub use error::{SyncError, SyncResult};
pub use layout::{ArchiveLayout, LanguageTable};
pub use planner::{Completeness, PlanOptions};
pub use ports::{CatalogService, PortError, PortResult, SessionProvider, StatementRenderer,
    SubmissionPage};
pub use sync::{ProblemOutcome, SyncEngine, SyncOptions, SyncReport};
pub use writer::ArchiveWriter;
