use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    /// Sequence number, unique per process.
    pub id: u64,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct NameQuery {
    #[serde(default = "default_name")]
    pub name: String,
}

fn default_name() -> String {
    "World".to_string()
}
