//! Lookup key synthesis for the environment and database sources.

/// How a field path is turned into a source key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyConvention {
    /// `PREFIX_SEGMENT1_SEGMENT2`, segments upper-cased.
    Env { prefix: String },
    /// `segment1.segment2`, segments lower-cased.
    Database,
}

impl KeyConvention {
    /// Environment convention with `prefix` stripped of surrounding underscores.
    pub fn env(prefix: &str) -> Self {
        Self::Env {
            prefix: prefix.trim_matches('_').to_string(),
        }
    }

    pub fn synthesize(&self, path: &[&str]) -> String {
        match self {
            Self::Env { prefix } => {
                let joined = path
                    .iter()
                    .map(|segment| segment.to_uppercase())
                    .collect::<Vec<_>>()
                    .join("_");
                if prefix.is_empty() {
                    joined
                } else {
                    format!("{prefix}_{joined}")
                }
            }
            Self::Database => path
                .iter()
                .map(|segment| segment.to_lowercase())
                .collect::<Vec<_>>()
                .join("."),
        }
    }
}
