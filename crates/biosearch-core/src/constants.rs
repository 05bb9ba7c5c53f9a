/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// On-disk format version for cached artifacts. Bump when a layout changes;
/// older artifacts are then treated as absent and rebuilt.
pub const CACHE_FORMAT_VERSION: u32 = 1;

/// Minimum analyzed token length (in chars) for the lexical vocabulary.
pub const MIN_LEXICAL_TERM_CHARS: usize = 2;

/// Scaled score used for every document when dense similarities are degenerate.
pub const DEGENERATE_SCALED_SCORE: f64 = 0.0;
