use crate::cursor::MAX_NESTING_DEPTH;

/// Wie der Decoder mit der Ziel-Message umgeht.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeMode {
    /// Values are written straight into the destination. On error the
    /// message is left partially updated.
    #[default]
    InPlace,
    /// Decodes into a copy and commits it only on success.
    Staged,
}

/// Decoder-Konfiguration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeConfig {
    pub mode: DecodeMode,
    /// Nesting limit of the balanced-brace pre-pass, at most
    /// [`MAX_NESTING_DEPTH`].
    pub max_depth: usize,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            mode: DecodeMode::InPlace,
            max_depth: MAX_NESTING_DEPTH,
        }
    }
}

impl DecodeConfig {
    pub fn with_mode(mut self, mode: DecodeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Setzt das Nesting-Limit (wird auf [`MAX_NESTING_DEPTH`] begrenzt).
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_NESTING_DEPTH);
        self
    }
}
