use serde::{Deserialize, Serialize};

fn default_use_embedded() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ConjugationConfig {
    /// Load the table shipped with the crate before any extra paths
    #[serde(default = "default_use_embedded")]
    pub use_embedded: bool,
    /// Extra table files, loaded in order; later rows win
    #[serde(default)]
    pub table_paths: Vec<String>,
    /// Column delimiter. Inferred from the file extension when unset
    #[serde(default)]
    pub delimiter: Option<char>,
}

impl Default for ConjugationConfig {
    fn default() -> Self {
        Self {
            use_embedded: default_use_embedded(),
            table_paths: vec![],
            delimiter: None,
        }
    }
}
