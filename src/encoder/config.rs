use crate::writer::DEFAULT_FLOAT_PRECISION;

/// Encoder-Konfiguration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeConfig {
    /// Decimals for `Float`/`Double` fields (default 6, like `%f`).
    pub float_precision: usize,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            float_precision: DEFAULT_FLOAT_PRECISION,
        }
    }
}

impl EncodeConfig {
    pub fn with_float_precision(mut self, precision: usize) -> Self {
        self.float_precision = precision;
        self
    }
}
