//! Icon source resolution.
//!
//! Turns a raw icon token into a render instruction. Direct URLs and media
//! paths resolve to a single image attempt; symbolic keys resolve to a
//! bundled component or, failing that, walk the devicon CDN variant chain.
//! The renderer drives the chain by reporting image load failures back via
//! [`IconResolution::on_load_error`]; every degradation path terminates in a
//! placeholder glyph. Resolution never fails and never panics.

use tracing::{debug, warn};

use crate::config::IconSources;
use crate::icon::normalize::{normalize, IconClass};
use crate::icon::registry::{IconComponent, IconRegistry};

/// Devicon variant suffixes, tried in exactly this order.
pub const CDN_VARIANTS: &[&str] = &[
    "original",
    "plain",
    "line",
    "plain-wordmark",
    "original-wordmark",
];

// ────────────────────────────────────────────────────────────────────────────
// Render instructions and fallback state machine
// ────────────────────────────────────────────────────────────────────────────

/// Render instruction handed to the presentation layer. Exactly one variant
/// is active per render; `Image` may re-resolve to another `Image` or to
/// `Placeholder` as load failures come in.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ResolvedIcon {
    Component { component: IconComponent },
    Image { url: String },
    Placeholder { glyph: String },
}

/// Cursor over an ordered list of candidate image URLs.
///
/// `Placeholder` is terminal: no transition leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackState {
    Trying(usize),
    Placeholder,
}

/// Pure load-failure transition: `Trying(i)` steps to `Trying(i + 1)`, or to
/// `Placeholder` once the candidate list of length `attempts` is exhausted.
pub fn advance(state: FallbackState, attempts: usize) -> FallbackState {
    match state {
        FallbackState::Trying(cursor) if cursor + 1 < attempts => {
            FallbackState::Trying(cursor + 1)
        }
        _ => FallbackState::Placeholder,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Per-instance resolution state
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum ResolutionKind {
    /// Bundled component — nothing to load, nothing to degrade.
    Component(IconComponent),
    /// Candidate image URLs tried front to back, then the placeholder.
    /// Direct/media images carry one candidate; CDN chains carry five.
    ImageChain {
        urls: Vec<String>,
        glyph: String,
        state: FallbackState,
    },
}

/// Resolution state owned by a single render instance.
///
/// Each rendered icon owns its own `IconResolution`; instances never share
/// cursor state, and a disposed instance ignores late load-error callbacks.
#[derive(Debug, Clone)]
pub struct IconResolution {
    kind: ResolutionKind,
    disposed: bool,
}

impl IconResolution {
    /// The render instruction for the current state.
    pub fn current(&self) -> ResolvedIcon {
        match &self.kind {
            ResolutionKind::Component(component) => ResolvedIcon::Component {
                component: *component,
            },
            ResolutionKind::ImageChain { urls, glyph, state } => match state {
                FallbackState::Trying(cursor) => match urls.get(*cursor) {
                    Some(url) => ResolvedIcon::Image { url: url.clone() },
                    None => ResolvedIcon::Placeholder {
                        glyph: glyph.clone(),
                    },
                },
                FallbackState::Placeholder => ResolvedIcon::Placeholder {
                    glyph: glyph.clone(),
                },
            },
        }
    }

    /// Advances the fallback machine after an image load failure and returns
    /// the next render instruction.
    ///
    /// Returns `None` when there is nothing to update: the instance was
    /// disposed, renders a component, or already sits on the terminal
    /// placeholder.
    pub fn on_load_error(&mut self) -> Option<ResolvedIcon> {
        if self.disposed {
            debug!("icon load error ignored: instance disposed");
            return None;
        }
        let ResolutionKind::ImageChain { urls, glyph, state } = &mut self.kind else {
            return None;
        };
        let FallbackState::Trying(cursor) = *state else {
            return None;
        };

        *state = advance(FallbackState::Trying(cursor), urls.len());
        match *state {
            FallbackState::Trying(next) => {
                debug!(cursor = next, total = urls.len(), "icon fallback advanced");
            }
            FallbackState::Placeholder => {
                warn!(glyph = %glyph, attempts = urls.len(), "icon fallback exhausted");
            }
        }
        Some(self.current())
    }

    /// Marks the owning render instance as torn down. Idempotent; later
    /// load-error callbacks become no-ops.
    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static resolution
// ────────────────────────────────────────────────────────────────────────────

/// Resolves a raw icon token against the bundled-component table and the
/// configured sources. Total: every token shape yields a usable resolution.
pub fn resolve(token: &str, registry: &IconRegistry, sources: &IconSources) -> IconResolution {
    let normalized = normalize(token);
    let glyph = placeholder_glyph(&normalized.value);

    let kind = match normalized.class {
        IconClass::AbsoluteUrl => ResolutionKind::ImageChain {
            urls: vec![normalized.value],
            glyph,
            state: FallbackState::Trying(0),
        },
        IconClass::MediaPath => ResolutionKind::ImageChain {
            urls: vec![join_url(&sources.media_base_url, &normalized.value)],
            glyph,
            state: FallbackState::Trying(0),
        },
        IconClass::SymbolicKey => match registry.get(&normalized.value) {
            Some(component) => ResolutionKind::Component(component),
            None => ResolutionKind::ImageChain {
                urls: cdn_candidates(&sources.icon_cdn_base, &normalized.value),
                glyph,
                state: FallbackState::Trying(0),
            },
        },
    };

    IconResolution {
        kind,
        disposed: false,
    }
}

/// `{base}/{key}/{key}-{variant}.svg` for each variant, in fallback order.
fn cdn_candidates(cdn_base: &str, key: &str) -> Vec<String> {
    let base = cdn_base.trim_end_matches('/');
    CDN_VARIANTS
        .iter()
        .map(|variant| format!("{base}/{key}/{key}-{variant}.svg"))
        .collect()
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// First two characters of the normalized value.
fn placeholder_glyph(value: &str) -> String {
    value.chars().take(2).collect()
}
