use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque identifier of a collection item.
///
/// The backend is not consistent about whether IDs are numbers or strings,
/// so both are accepted and kept in their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => ItemId(s),
            RawId::Number(n) => ItemId(n.to_string()),
        })
    }
}

/// Anything the loader can accumulate. The ID is used to drop duplicates
/// when the server shifts items between pages.
pub trait FeedItem {
    fn item_id(&self) -> &ItemId;
}

/// The selector currently scoping a collection view
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FilterKey {
    #[default]
    All,
    Category(String),
}

impl FilterKey {
    /// Value for the `category` query parameter, `None` for the unfiltered view
    pub fn as_query(&self) -> Option<&str> {
        match self {
            FilterKey::All => None,
            FilterKey::Category(id) => Some(id.as_str()),
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterKey::All => write!(f, "all"),
            FilterKey::Category(id) => write!(f, "{}", id),
        }
    }
}

/// A single outstanding page fetch.
///
/// `generation` is captured when the request is issued and compared on
/// completion; a mismatch means the filter changed in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub filter: FilterKey,
    pub page: u32,
    pub page_size: u32,
    pub generation: u64,
}

/// One page of results as handed to the loader
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: Option<u64>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: Option<u64>) -> Self {
        Self { items, total }
    }
}

/// Response body of a collection endpoint.
///
/// Paginated endpoints answer `{"results": [...], "total": N}` (some use
/// `count`), older ones answer with a bare array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PageResponse<T> {
    Paged {
        results: Vec<T>,
        #[serde(default, alias = "count")]
        total: Option<u64>,
    },
    Bare(Vec<T>),
}

impl<T> PageResponse<T> {
    pub fn into_page(self) -> Page<T> {
        match self {
            PageResponse::Paged { results, total } => Page::new(results, total),
            PageResponse::Bare(items) => Page::new(items, None),
        }
    }

    pub fn into_items(self) -> Vec<T> {
        self.into_page().items
    }
}

/// Current activity of a collection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    /// Last fetch failed; data loaded so far is kept
    Failed(String),
}
