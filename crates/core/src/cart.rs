//! The quote cart model.
//!
//! An ordered list of [`LineItem`]s (insertion order is display order). The
//! item title is the natural key: adding a title that is already present
//! merges quantities instead of appending a duplicate. Quantities are always
//! at least 1; an item whose quantity would drop to 0 is removed, never
//! stored at 0.
//!
//! Mutations never panic and never return errors. Each operation reports a
//! [`CartOp`] outcome so callers can tell "did nothing" apart from
//! "succeeded" - a stale index from an outdated view must not crash the
//! request, but it should be observable.

use serde::{Deserialize, Serialize};

/// One service entry in the quote cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Image URL for display. Opaque to the model, never validated.
    pub image: String,
    /// Display name; the natural key for merge-on-add.
    pub title: String,
    /// Requested quantity, always >= 1.
    pub quantity: u32,
}

/// Outcome of a cart mutation.
///
/// Operations are total: invalid input leaves the cart unchanged and is
/// reported here instead of raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOp {
    /// A new line item was appended.
    Added,
    /// An existing line item absorbed the added quantity.
    Merged,
    /// A line item's quantity was set.
    Updated,
    /// A line item was removed.
    Removed,
    /// The index was outside `[0, len)`; nothing changed.
    OutOfRange,
    /// The quantity was 0; nothing changed.
    InvalidQuantity,
}

impl CartOp {
    /// Whether the operation mutated the cart.
    #[must_use]
    pub const fn changed(self) -> bool {
        !matches!(self, Self::OutOfRange | Self::InvalidQuantity)
    }
}

/// The quote cart: an ordered sequence of [`LineItem`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Rebuild a cart from persisted line items, restoring the invariants
    /// best-effort: zero-quantity items are dropped and duplicate titles are
    /// merged into the first occurrence.
    #[must_use]
    pub fn hydrate(items: Vec<LineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if item.quantity == 0 {
                continue;
            }
            cart.add_or_merge(&item.title, &item.image, item.quantity);
        }
        cart
    }

    /// Add a line item, merging quantities when the title already exists.
    ///
    /// Merging keeps the existing item's image and position. There is no
    /// upper bound on the merged quantity. A quantity of 0 is rejected as
    /// [`CartOp::InvalidQuantity`].
    pub fn add_or_merge(&mut self, title: &str, image: &str, quantity: u32) -> CartOp {
        if quantity == 0 {
            return CartOp::InvalidQuantity;
        }

        if let Some(existing) = self.items.iter_mut().find(|item| item.title == title) {
            existing.quantity += quantity;
            return CartOp::Merged;
        }

        self.items.push(LineItem {
            image: image.to_owned(),
            title: title.to_owned(),
            quantity,
        });
        CartOp::Added
    }

    /// Remove the line item at `index`, keeping the relative order of the
    /// remaining items. Out-of-range indices leave the cart unchanged.
    pub fn remove(&mut self, index: usize) -> CartOp {
        if index >= self.items.len() {
            return CartOp::OutOfRange;
        }
        self.items.remove(index);
        CartOp::Removed
    }

    /// Set the quantity of the line item at `index`.
    ///
    /// A quantity of 0 is rejected: the decrement control in the view is
    /// expected to refuse to go below 1, and removal goes through
    /// [`Self::remove`].
    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> CartOp {
        if quantity == 0 {
            return CartOp::InvalidQuantity;
        }
        match self.items.get_mut(index) {
            Some(item) => {
                item.quantity = quantity;
                CartOp::Updated
            }
            None => CartOp::OutOfRange,
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of all line item quantities; 0 for an empty cart.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The line items in display order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(title: &str, quantity: u32) -> LineItem {
        LineItem {
            image: format!("/static/images/services/{title}.svg"),
            title: title.to_owned(),
            quantity,
        }
    }

    #[test]
    fn test_add_distinct_titles() {
        let mut cart = Cart::new();
        assert_eq!(cart.add_or_merge("Logo", "/img/logo.svg", 2), CartOp::Added);
        assert_eq!(
            cart.add_or_merge("Site Básico", "/img/site.svg", 1),
            CartOp::Added
        );

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_merge_on_same_title() {
        let mut cart = Cart::new();
        cart.add_or_merge("Logo", "/img/logo.svg", 2);
        assert_eq!(cart.add_or_merge("Logo", "/img/other.svg", 3), CartOp::Merged);

        assert_eq!(cart.len(), 1);
        let only = cart.items().first().unwrap();
        assert_eq!(only.title, "Logo");
        assert_eq!(only.quantity, 5);
        // Merging keeps the original image
        assert_eq!(only.image, "/img/logo.svg");
    }

    #[test]
    fn test_add_zero_quantity_is_rejected() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.add_or_merge("Logo", "/img/logo.svg", 0),
            CartOp::InvalidQuantity
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut cart = Cart::hydrate(vec![item("a", 1), item("b", 2), item("c", 3)]);

        assert_eq!(cart.remove(1), CartOp::Removed);

        let titles: Vec<&str> = cart.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["a", "c"]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut cart = Cart::hydrate(vec![item("a", 1), item("b", 2)]);
        let before = cart.clone();

        assert_eq!(cart.remove(2), CartOp::OutOfRange);
        assert_eq!(cart.remove(usize::MAX), CartOp::OutOfRange);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = Cart::hydrate(vec![item("a", 1)]);

        assert_eq!(cart.set_quantity(0, 7), CartOp::Updated);
        assert_eq!(cart.items().first().unwrap().quantity, 7);
    }

    #[test]
    fn test_set_quantity_zero_is_noop() {
        let mut cart = Cart::hydrate(vec![item("a", 4)]);

        assert_eq!(cart.set_quantity(0, 0), CartOp::InvalidQuantity);
        assert_eq!(cart.items().first().unwrap().quantity, 4);
    }

    #[test]
    fn test_set_quantity_out_of_range_is_noop() {
        let mut cart = Cart::hydrate(vec![item("a", 4)]);

        assert_eq!(cart.set_quantity(1, 2), CartOp::OutOfRange);
        assert_eq!(cart.items().first().unwrap().quantity, 4);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::hydrate(vec![item("a", 2), item("b", 1)]);
        assert_eq!(cart.total_quantity(), 3);

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn test_hydrate_sanitizes_persisted_items() {
        let cart = Cart::hydrate(vec![
            item("a", 2),
            item("b", 0), // dropped
            item("a", 3), // merged into the first entry
        ]);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_quantity(), 5);
    }
}
