//! Item reference parsing.

/// An item name, optionally qualified by the store it belongs to.
///
/// Written as `name` or `store:name`. Only the first `:` separates the two
/// parts, so `a:b:c` names the item `b:c` in store `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemReference<'a> {
    pub store: Option<&'a str>,
    pub name: &'a str,
}

impl<'a> ItemReference<'a> {
    pub fn parse(item: &'a str) -> Self {
        match item.split_once(':') {
            Some((store, name)) => Self {
                store: Some(store),
                name,
            },
            None => Self {
                store: None,
                name: item,
            },
        }
    }
}
