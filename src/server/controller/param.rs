use serde::Deserialize;

const DEFAULT_ENTRIES: u64 = 10;
const MAX_ENTRIES: u64 = 100;

/// `?page=&entries=` query parameters shared by list endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationParam {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    DEFAULT_ENTRIES
}

impl PaginationParam {
    /// Entries per page, clamped to `1..=100`.
    pub fn per_page(&self) -> u64 {
        self.entries.clamp(1, MAX_ENTRIES)
    }
}
