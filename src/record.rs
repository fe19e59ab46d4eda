//! Search record schema shared between the snapshot producer and the engine.

use serde::{Deserialize, Serialize};

/// One indexed unit of documentation content.
///
/// A record maps a searchable fragment (a page, a section under an anchor, or
/// a documented symbol) to the metadata the renderer needs to build a link:
/// `location` + `page` for navigation, `title`/`text` for the snippet.
///
/// Records are immutable once loaded; the store hands out shared references
/// and never mutates a record in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    /// URL fragment identifying the record's anchor. Empty for page-level
    /// landing records (the page itself is the target).
    pub location: String,
    /// Human-readable page name. Many records share one page.
    pub page: String,
    /// Heading text of the fragment. Empty for prose-only records.
    pub title: String,
    /// Plain-text content of the fragment, the primary match field. Empty
    /// for section-header-only records.
    pub text: String,
    /// Structural kind of the fragment, used for ranking boosts.
    pub category: Category,
}

/// Semantic tag distinguishing structural kinds of documentation entries.
///
/// The vocabulary mirrors what documentation generators emit. Tags the
/// producer adds later deserialize as [`Category::Other`] rather than
/// failing the load, and rank with a neutral weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// A whole rendered page.
    Page,
    /// A heading-delimited section within a page.
    Section,
    /// A documented type definition.
    Type,
    /// A documented method.
    Method,
    /// A documented free function.
    Function,
    /// A documented module.
    Module,
    /// A documented macro.
    Macro,
    /// A documented constant.
    Constant,
    /// A language keyword entry.
    Keyword,
    /// Any tag outside the known vocabulary.
    #[serde(other)]
    Other,
}

impl Category {
    /// Whether this category names a code symbol rather than prose.
    ///
    /// Symbol entries get a ranking boost: a query like `RocketModule` is
    /// almost always after the symbol's own entry, not a page that happens
    /// to mention it.
    pub fn is_symbol(self) -> bool {
        matches!(
            self,
            Self::Type | Self::Method | Self::Function | Self::Module | Self::Macro | Self::Constant
        )
    }
}
