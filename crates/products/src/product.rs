//! Product records and the page-request vocabulary.

use core::str::FromStr;

use catalog_core::ProductId;
use thiserror::Error;

/// A persisted product record.
///
/// Always carries an id; the store assigns one on insert and it never
/// changes afterwards. Values that have not been persisted yet exist only
/// as [`ProductDraft`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: f64,
}

impl Product {
    /// Assemble a record from an id and its field values.
    ///
    /// Used by stores when assigning a fresh id and by updates re-applying
    /// field values onto an existing id.
    pub fn new(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

/// Field values for a product, without an identity.
///
/// What `create_product` consumes and what `update_product` applies as its
/// patch. All three fields are written in full on every use; there is no
/// sparse-merge reading of a draft.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Raised when a string names no sortable product attribute.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown sort field: {0}")]
pub struct UnknownSortField(String);

/// Product attributes a page can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Description,
    Price,
}

impl FromStr for SortField {
    type Err = UnknownSortField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "description" => Ok(Self::Description),
            "price" => Ok(Self::Price),
            _ => Err(UnknownSortField(s.to_string())),
        }
    }
}

/// Direction of a sorted page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Read a caller-supplied direction string.
    ///
    /// Exactly `"desc"` (any casing) selects descending. Every other value,
    /// `"ascending"` and `"descending"` included, falls back to ascending;
    /// direction strings are never rejected.
    pub fn from_param(s: &str) -> Self {
        if s.eq_ignore_ascii_case("desc") {
            Self::Descending
        } else {
            Self::Ascending
        }
    }
}

/// One page worth of query parameters, constructed per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Requested page, 1-indexed (caller-facing).
    pub page: u32,
    /// Maximum number of records on the page.
    pub size: u32,
    /// Attribute the page is sorted by.
    pub sort: SortField,
    /// Sort direction.
    pub direction: SortDirection,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            size: 10,
            sort: SortField::Name,
            direction: SortDirection::Ascending,
        }
    }
}

impl PageRequest {
    /// Build a request from caller-supplied values, normalizing as needed.
    ///
    /// Missing values take the defaults (page 1, size 10, sorted ascending
    /// by name); `page` and `size` are floored at 1.
    pub fn new(
        page: Option<u32>,
        size: Option<u32>,
        sort: Option<SortField>,
        direction: Option<SortDirection>,
    ) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            size: size.unwrap_or(10).max(1),
            sort: sort.unwrap_or(SortField::Name),
            direction: direction.unwrap_or_default(),
        }
    }

    /// Zero-indexed page offset, as stores count pages.
    pub fn offset(&self) -> u32 {
        self.page.saturating_sub(1)
    }
}
