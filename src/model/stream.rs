use crate::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::model::feed::FeedItem;
use pretty_simple_display::DebugPretty;
use serde::{Deserialize, Serialize};

/// Sort order for a tag stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamSort {
    /// Every item in chronological order
    All,
    /// Best-rated items first
    Best,
}

impl StreamSort {
    /// Wire representation of the sort order
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamSort::All => "all",
            StreamSort::Best => "best",
        }
    }
}

/// Item type filter for a tag stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamType {
    /// No filtering
    All,
    /// Items authored under the tag
    Author,
    /// Link submissions only
    Link,
    /// Short-form entries only
    Entry,
}

impl StreamType {
    /// Wire representation of the type filter
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamType::All => "all",
            StreamType::Author => "author",
            StreamType::Link => "link",
            StreamType::Entry => "entry",
        }
    }
}

/// Query parameters for the `/tags/{tag}/stream` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagStreamQuery {
    /// Page number to fetch
    pub page: u32,
    /// Number of items per page
    pub limit: u32,
    /// Sort order
    pub sort: StreamSort,
    /// Item type filter
    #[serde(rename = "type")]
    pub kind: StreamType,
    /// Restrict results to a year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    /// Restrict results to a month within the year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u8>,
}

impl Default for TagStreamQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_SIZE,
            sort: StreamSort::Best,
            kind: StreamType::All,
            year: None,
            month: None,
        }
    }
}

impl TagStreamQuery {
    /// Expands the query into ordered key/value pairs.
    ///
    /// `year` and `month` are included only when set; a supplied zero is
    /// sent verbatim rather than being treated as absent.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
            ("sort".to_string(), self.sort.as_str().to_string()),
            ("type".to_string(), self.kind.as_str().to_string()),
        ];
        if let Some(year) = self.year {
            pairs.push(("year".to_string(), year.to_string()));
        }
        if let Some(month) = self.month {
            pairs.push(("month".to_string(), month.to_string()));
        }
        pairs
    }
}

/// Response envelope of the `/tags/{tag}/stream` endpoint
#[derive(DebugPretty, Clone, Serialize, Deserialize, Default)]
pub struct TagStreamResponse {
    /// Stream items in response order
    pub data: Vec<FeedItem>,
}

impl TagStreamResponse {
    /// Returns the number of items in the response
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the response contains no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
