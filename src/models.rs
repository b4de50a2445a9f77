//! Domain models for the menu. These mirror the JSON data contract used by the
//! menu feed, so field names are camelCase on the wire and snake_case in Rust.
//! The types stay plain data holders; ordering and visibility rules live in the
//! render engine.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for categories and items. Feeds use either integers or strings,
/// so both are accepted. Ids that read as integers (`7` or `"7"`) compare
/// numerically and sort before all other strings, which compare
/// lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Int(i64),
    Text(String),
}

impl Id {
    /// Numeric value when the id is an integer or an integer-looking string.
    fn as_number(&self) -> Option<i64> {
        match self {
            Id::Int(value) => Some(*value),
            Id::Text(value) => value.trim().parse().ok(),
        }
    }
}

impl Ord for Id {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| match (self, other) {
                // `7` and `"7"` are distinct ids; keep the order total.
                (Id::Int(_), Id::Text(_)) => Ordering::Less,
                (Id::Text(_), Id::Int(_)) => Ordering::Greater,
                (Id::Text(a), Id::Text(b)) => a.cmp(b),
                (Id::Int(_), Id::Int(_)) => Ordering::Equal,
            }),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.to_string().cmp(&other.to_string()),
        }
    }
}

impl PartialOrd for Id {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Int(value) => write!(f, "{value}"),
            Id::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for Id {
    fn from(value: i64) -> Self {
        Id::Int(value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Id::Text(value.to_string())
    }
}

/// A named grouping of menu items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Id,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ascending sort key among categories.
    pub display_order: f64,
    /// Inactive categories are never rendered.
    pub is_active: bool,
}

/// A sellable entry on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: Id,
    pub category_id: Id,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price_euro: f64,
    /// Ascending sort key among items of the same category.
    pub display_order: f64,
    /// Unavailable items are never rendered, in any mode.
    pub is_available: bool,
}

impl MenuItem {
    /// Price as shown to guests, e.g. `3.5` becomes `€3.50`.
    pub fn display_price(&self) -> String {
        format_price(self.price_euro)
    }

    /// Case-insensitive substring match over name and description. `needle`
    /// must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// The whole menu as delivered by the data source.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuData {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,
}

impl MenuData {
    pub fn category(&self, id: &Id) -> Option<&Category> {
        self.categories.iter().find(|category| &category.id == id)
    }
}

/// Format a euro amount with exactly two decimals and a `€` prefix. Half
/// cents round away from zero, so `4.125` shows as `€4.13`.
pub fn format_price(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    format!("€{rounded:.2}")
}

/// Total ordering for float sort keys.
pub(crate) fn cmp_order(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}
