//! Content-type registry.
//!
//! Every soft-deletable content type is described once here. The lifecycle
//! and trash repositories dispatch on [`ContentType`] and read table names and
//! protection defaults from its [`ContentTypeDescriptor`], so the
//! delete/restore/purge logic is written a single time for all five types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The five content types managed by the back office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Articles,
    Shows,
    Episodes,
    Events,
    Resources,
}

/// Static metadata for one content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentTypeDescriptor {
    /// URL / JSON tag (e.g. `"articles"`).
    pub tag: &'static str,
    /// Backing table name.
    pub table: &'static str,
    /// Singular name used in error messages.
    pub entity_name: &'static str,
    /// Whether new items of this type are protected unless stated otherwise.
    pub protected_default: bool,
}

const REGISTRY: [ContentTypeDescriptor; 5] = [
    ContentTypeDescriptor {
        tag: "articles",
        table: "articles",
        entity_name: "Article",
        protected_default: false,
    },
    // Shows are the station's flagship programmes.
    ContentTypeDescriptor {
        tag: "shows",
        table: "shows",
        entity_name: "Show",
        protected_default: true,
    },
    ContentTypeDescriptor {
        tag: "episodes",
        table: "episodes",
        entity_name: "Episode",
        protected_default: false,
    },
    ContentTypeDescriptor {
        tag: "events",
        table: "events",
        entity_name: "Event",
        protected_default: false,
    },
    ContentTypeDescriptor {
        tag: "resources",
        table: "resources",
        entity_name: "Resource",
        protected_default: false,
    },
];

impl ContentType {
    /// All content types in canonical order. Grouped outputs follow this order.
    pub const ALL: [ContentType; 5] = [
        ContentType::Articles,
        ContentType::Shows,
        ContentType::Episodes,
        ContentType::Events,
        ContentType::Resources,
    ];

    pub fn descriptor(self) -> &'static ContentTypeDescriptor {
        let idx = match self {
            ContentType::Articles => 0,
            ContentType::Shows => 1,
            ContentType::Episodes => 2,
            ContentType::Events => 3,
            ContentType::Resources => 4,
        };
        &REGISTRY[idx]
    }

    pub fn as_str(self) -> &'static str {
        self.descriptor().tag
    }

    pub fn table(self) -> &'static str {
        self.descriptor().table
    }

    pub fn entity_name(self) -> &'static str {
        self.descriptor().entity_name
    }

    pub fn protected_default(self) -> bool {
        self.descriptor().protected_default
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentType::ALL
            .into_iter()
            .find(|ct| ct.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown content type: {s}")))
    }
}
