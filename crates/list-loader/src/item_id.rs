//! Item Identifiers
//!
//! Rendered items carry their numeric id inside the element id
//! (`<div class="card mb-3" id="post17">`).

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ItemId {
    /// Extract the id from an element id of the form `<prefix><digits>`.
    /// The first occurrence of `prefix` followed by at least one digit wins.
    pub fn from_element_id(element_id: &str, prefix: &str) -> Option<Self> {
        if prefix.is_empty() {
            return None;
        }
        element_id.match_indices(prefix).find_map(|(start, _)| {
            let rest = &element_id[start + prefix.len()..];
            let end = rest
                .char_indices()
                .find(|(_, c)| !c.is_ascii_digit())
                .map_or(rest.len(), |(i, _)| i);
            rest[..end].parse().ok().map(ItemId)
        })
    }

    /// Element id of the rendered item.
    pub fn element_id(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.0)
    }
}
