use crate::types::{NamedPhase, OutputMode};

/// Renders a phase as its English name or as a moon glyph.
pub fn format(phase: NamedPhase, mode: OutputMode) -> &'static str {
    match mode {
        OutputMode::Plaintext => phase.name(),
        OutputMode::Symbolic => phase.glyph(),
    }
}
