// Process-experience canonicalization.
// Implements: the closed seven-stage taxonomy and the sparse-records →
// complete-ordered-table normalization shared by the editor and the public
// portfolio page.

pub mod canonicalize;
pub mod taxonomy;

pub use canonicalize::{canonicalize, CanonicalProcessEntry, DEFAULT_DESCRIPTION};
pub use taxonomy::ProcessType;
