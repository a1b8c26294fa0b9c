use super::{Price, Product};
use chrono::{DateTime, Utc};
use paged_feed::ItemId;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    pub fn total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// Shopping cart held for the session
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.lines.iter().any(|line| &line.product.id == id)
    }

    /// Add one unit, merging with an existing line for the same product
    pub fn add(&mut self, product: Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
            return;
        }
        self.lines.push(CartLine {
            product,
            quantity: 1,
            added_at: Utc::now(),
        });
    }

    pub fn increment(&mut self, id: &ItemId) {
        if let Some(line) = self.lines.iter_mut().find(|l| &l.product.id == id) {
            line.quantity += 1;
        }
    }

    /// Remove one unit; the line disappears at zero
    pub fn decrement(&mut self, id: &ItemId) {
        if let Some(pos) = self.lines.iter().position(|l| &l.product.id == id) {
            if self.lines[pos].quantity <= 1 {
                self.lines.remove(pos);
            } else {
                self.lines[pos].quantity -= 1;
            }
        }
    }

    pub fn remove(&mut self, id: &ItemId) {
        self.lines.retain(|l| &l.product.id != id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Number of units across all lines
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLine::total).sum()
    }
}

/// Items the shopper liked during this session
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Favorites {
    liked: HashSet<ItemId>,
}

impl Favorites {
    pub fn is_liked(&self, id: &ItemId) -> bool {
        self.liked.contains(id)
    }

    /// Flip the flag; returns whether the item is liked afterwards
    pub fn toggle(&mut self, id: &ItemId) -> bool {
        if self.liked.remove(id) {
            false
        } else {
            self.liked.insert(id.clone());
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: &str) -> Product {
        serde_json::from_str(&format!(
            r#"{{"id": "{}", "name": "Item {}", "price": "{}"}}"#,
            id, id, price
        ))
        .unwrap()
    }

    #[test]
    fn test_add_merges_lines() {
        let mut cart = Cart::default();
        cart.add(product("a", "100.00"));
        cart.add(product("a", "100.00"));
        cart.add(product("b", "49.50"));
        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.subtotal(), Price::from_cents(24_950));
    }

    #[test]
    fn test_decrement_removes_at_zero() {
        let mut cart = Cart::default();
        let id = ItemId::from("a");
        cart.add(product("a", "10"));
        cart.increment(&id);
        cart.decrement(&id);
        assert_eq!(cart.item_count(), 1);
        cart.decrement(&id);
        assert!(cart.is_empty());
        assert!(!cart.contains(&id));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = Cart::default();
        cart.add(product("a", "10"));
        cart.add(product("b", "20"));
        cart.remove(&ItemId::from("a"));
        assert_eq!(cart.subtotal(), Price::from_cents(2000));
        cart.clear();
        assert_eq!(cart.subtotal(), Price::default());
    }

    #[test]
    fn test_favorites_toggle() {
        let mut fav = Favorites::default();
        let id = ItemId::from("r1");
        assert!(fav.toggle(&id));
        assert!(fav.is_liked(&id));
        assert!(!fav.toggle(&id));
        assert!(!fav.is_liked(&id));
    }
}
