use serde::Deserialize;

/// Query parameters for paginated listings.
#[derive(Deserialize)]
pub struct PaginationParam {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}
