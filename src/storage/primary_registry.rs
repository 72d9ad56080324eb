use crate::account::{AccountNumber, AccountRecord};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    item: T,
    next: Link<T>,
}

/// Singly linked list of accounts, kept in insertion order.
pub struct PrimaryRegistry<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Default for PrimaryRegistry<T> {
    fn default() -> Self {
        Self { head: None, len: 0 }
    }
}

impl<T: AccountRecord> PrimaryRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends at the tail.
    pub fn add(&mut self, item: T) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node { item, next: None }));
        self.len += 1;
    }

    /// First match wins, so a later duplicate number is shadowed.
    pub fn find(&self, account_number: AccountNumber) -> Option<&T> {
        self.iter()
            .find(|item| item.account_number() == account_number)
    }

    /// Unlinks the first node holding `account_number` and hands its record back.
    pub fn delete(&mut self, account_number: AccountNumber) -> Option<T> {
        let mut link = &mut self.head;
        while link
            .as_ref()
            .is_some_and(|node| node.item.account_number() != account_number)
        {
            link = &mut link.as_mut()?.next;
        }
        let removed = link.take()?;
        *link = removed.next;
        self.len -= 1;
        Some(removed.item)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Drop for PrimaryRegistry<T> {
    // Iterative, so long lists don't recurse through Box drops.
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.item
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::{Decimal, prelude::FromPrimitive};

    use crate::account::Account;

    use super::*;

    fn account(number: AccountNumber, name: &str) -> Account {
        Account::new(number, name, Decimal::from_i32(number).unwrap())
    }

    fn numbers(registry: &PrimaryRegistry<Account>) -> Vec<AccountNumber> {
        registry.iter().map(Account::number).collect()
    }

    #[test]
    fn add_keeps_insertion_order() {
        let mut registry = PrimaryRegistry::new();
        assert!(registry.is_empty());
        for n in [3, 1, 2] {
            registry.add(account(n, "x"));
        }
        assert_eq!(numbers(&registry), vec![3, 1, 2]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn find_returns_first_match() {
        let mut registry = PrimaryRegistry::new();
        registry.add(account(1, "Alice"));
        registry.add(account(2, "Bob"));
        registry.add(account(1, "Shadowed"));

        assert_eq!(registry.find(1).unwrap().name(), "Alice");
        assert_eq!(registry.find(2).unwrap().name(), "Bob");
        assert!(registry.find(42).is_none());
    }

    #[test]
    fn delete_head_middle_tail() {
        let mut registry = PrimaryRegistry::new();
        for n in 1..=5 {
            registry.add(account(n, "x"));
        }
        assert_eq!(registry.delete(1).unwrap().number(), 1);
        assert_eq!(numbers(&registry), vec![2, 3, 4, 5]);
        assert_eq!(registry.delete(4).unwrap().number(), 4);
        assert_eq!(numbers(&registry), vec![2, 3, 5]);
        assert_eq!(registry.delete(5).unwrap().number(), 5);
        assert_eq!(numbers(&registry), vec![2, 3]);
        assert!(registry.delete(5).is_none());
        assert_eq!(registry.len(), 2);

        // tail append still works after the tail was removed
        registry.add(account(6, "x"));
        assert_eq!(numbers(&registry), vec![2, 3, 6]);
    }

    #[test]
    fn delete_unshadows_duplicate() {
        let mut registry = PrimaryRegistry::new();
        registry.add(account(1, "Alice"));
        registry.add(account(1, "Second"));
        assert_eq!(registry.delete(1).unwrap().name(), "Alice");
        assert_eq!(registry.find(1).unwrap().name(), "Second");
        assert_eq!(registry.delete(1).unwrap().name(), "Second");
        assert!(registry.is_empty());
        assert!(registry.delete(1).is_none());
    }
}
