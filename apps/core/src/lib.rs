//! folio-core — resolution and canonicalization core of the folio portfolio client.
//!
//! The editor UI and the public portfolio page both feed raw collaborator data
//! (icon identifier strings, process-experience records, date strings) through
//! this crate and render whatever comes back. Everything else — REST calls,
//! auth, forms, routing — lives outside and never reaches in deeper than the
//! typed rows in [`models`].

pub mod config;
pub mod errors;
pub mod history;
pub mod icon;
pub mod models;
pub mod portfolio;
pub mod process;

// Re-export the surface consumed by the presentation layer.
pub use config::{Config, IconSources};
pub use errors::CoreError;
pub use icon::{normalize, resolve, IconClass, IconRegistry, IconResolution, ResolvedIcon};
pub use portfolio::{build_portfolio_view, PortfolioView};
pub use process::{canonicalize, CanonicalProcessEntry, ProcessType};
