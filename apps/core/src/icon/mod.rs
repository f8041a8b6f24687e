// Icon identifier resolution.
// Implements: token classification, bundled-component lookup, devicon CDN
// variant fallback. The renderer reports image load failures back via
// `IconResolution::on_load_error`; everything else is pure.

pub mod normalize;
pub mod registry;
pub mod resolve;

// Re-export the public API consumed by other modules (portfolio, callers).
pub use normalize::{normalize, IconClass, NormalizedToken};
pub use registry::{IconComponent, IconRegistry};
pub use resolve::{advance, resolve, FallbackState, IconResolution, ResolvedIcon, CDN_VARIANTS};
