//! Records returned from tag streams.
//!
//! A stream mixes two item shapes: long-form [`Link`] submissions and
//! short-form [`Entry`] posts. The API does not tag them; a link is
//! recognized by its required `description` field.

use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Position of a user in the site-wide ranking
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct Rank {
    /// Ranking position
    pub position: Option<u32>,
    /// Ranking trend since the previous period
    pub trend: Option<i32>,
}

/// Author information attached to feed items
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct User {
    /// Display name of the user
    pub username: Option<String>,
    /// Whether this is a company account
    pub company: Option<bool>,
    /// Avatar URL
    pub avatar: Option<String>,
    /// Whether the user is currently online
    pub online: Option<bool>,
    /// Whether the account is verified
    pub verified: Option<bool>,
    /// Ranking information
    pub rank: Option<Rank>,
}

/// A photo attached to a feed item
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct Photo {
    /// Storage key of the photo
    pub key: Option<String>,
    /// Optional label
    pub label: Option<String>,
    /// Public URL of the photo
    pub url: Option<String>,
    /// MIME type reported by the API
    pub mime_type: Option<String>,
    /// Size in bytes
    pub size: Option<u64>,
    /// Width in pixels
    pub width: Option<u32>,
    /// Height in pixels
    pub height: Option<u32>,
}

/// Media attachments of a feed item
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct Media {
    /// Attached photo, if any
    pub photo: Option<Photo>,
}

/// Vote counts for a feed item
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct Votes {
    /// Number of upvotes
    pub up: Option<u32>,
    /// Number of downvotes
    pub down: Option<u32>,
}

/// A long-form link submission
///
/// `description` is the only required field; its presence is what
/// distinguishes a link from an entry in a stream payload.
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct Link {
    /// Unique identifier of the link
    pub id: u64,
    /// Description of the linked content
    pub description: String,
    /// Title of the linked content
    pub title: Option<String>,
    /// Target URL of the submission
    pub source_url: Option<String>,
    /// URL-friendly slug
    pub slug: Option<String>,
    /// Author of the submission
    pub author: Option<User>,
    /// Attached media
    pub media: Option<Media>,
    /// Vote counts
    pub votes: Option<Votes>,
    /// Whether the link is on the hot list
    pub hot: Option<bool>,
    /// Creation timestamp as reported by the API
    pub created_at: Option<String>,
    /// Tags attached to the submission
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A short-form post
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct Entry {
    /// Unique identifier of the entry
    pub id: u64,
    /// Text content of the post
    pub content: Option<String>,
    /// Author of the post
    pub author: Option<User>,
    /// Attached media
    pub media: Option<Media>,
    /// Vote counts
    pub votes: Option<Votes>,
    /// Creation timestamp as reported by the API
    pub created_at: Option<String>,
    /// Tags attached to the post
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A single item in a tag stream
///
/// Decoding attempts `Link` first; a payload without the required
/// `description` field falls through to `Entry`. A `description` that is
/// present but `null` is treated as absent.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(untagged)]
pub enum FeedItem {
    /// Long-form link submission
    Link(Link),
    /// Short-form post
    Entry(Entry),
}

impl FeedItem {
    /// Returns the identifier of the underlying record
    #[must_use]
    pub fn id(&self) -> u64 {
        match self {
            FeedItem::Link(link) => link.id,
            FeedItem::Entry(entry) => entry.id,
        }
    }

    /// Returns true if this item is a link submission
    #[must_use]
    pub fn is_link(&self) -> bool {
        matches!(self, FeedItem::Link(_))
    }

    /// Returns true if this item is a short-form entry
    #[must_use]
    pub fn is_entry(&self) -> bool {
        matches!(self, FeedItem::Entry(_))
    }
}
