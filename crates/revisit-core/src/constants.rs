/// Expansion bound constants shared across crates
pub const DEFAULT_PREVIEW_CAP: usize = 8;

/// Multiplier applied to the effective emission limit to bound the
/// expansion loop; exhausting the ceiling truncates the sequence silently.
pub const SAFETY_CEILING_FACTOR: usize = 10;
