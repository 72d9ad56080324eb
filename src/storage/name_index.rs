use std::cmp::Ordering;

use tracing::warn;

use crate::account::{AccountNumber, AccountRecord};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    item: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn leaf(item: T) -> Box<Self> {
        Box::new(Self {
            item,
            left: None,
            right: None,
        })
    }
}

/// Binary search tree ordered by customer name.
///
/// Lookups and deletes by account number descend the same tree comparing
/// account numbers instead of names. They only find what they are looking
/// for when the name order happens to agree with the number order along the
/// path; the tree is never reshaped to make that true.
pub struct NameIndex<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for NameIndex<T> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<T: AccountRecord> NameIndex<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when a node with the same name already exists. The
    /// record is dropped in that case and never becomes reachable here.
    pub fn insert(&mut self, item: T) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match item.name().cmp(node.item.name()) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    warn!(
                        account_number = item.account_number(),
                        name = item.name(),
                        "name already indexed, record dropped from name index"
                    );
                    return false;
                }
            };
        }
        *link = Some(Node::leaf(item));
        self.len += 1;
        true
    }

    pub fn find_by_account_number(&self, account_number: AccountNumber) -> Option<&T> {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match account_number.cmp(&node.item.account_number()) {
                Ordering::Equal => return Some(&node.item),
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
            };
        }
        None
    }

    /// Locates the node with the account-number descent and unlinks it.
    pub fn delete(&mut self, account_number: AccountNumber) -> Option<T> {
        let mut link = &mut self.root;
        loop {
            let ordering = account_number.cmp(&link.as_ref()?.item.account_number());
            link = match ordering {
                Ordering::Less => &mut link.as_mut()?.left,
                Ordering::Greater => &mut link.as_mut()?.right,
                Ordering::Equal => break,
            };
        }
        let mut removed = link.take()?;
        *link = match (removed.left.take(), removed.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                let mut successor = Self::take_min(&mut right)?;
                successor.left = Some(left);
                successor.right = right;
                Some(successor)
            }
        };
        self.len -= 1;
        Some(removed.item)
    }

    /// Detaches the leftmost node of the subtree, lifting its right child
    /// into its place.
    fn take_min(mut link: &mut Link<T>) -> Option<Box<Node<T>>> {
        while link.as_ref()?.left.is_some() {
            link = &mut link.as_mut()?.left;
        }
        let mut min = link.take()?;
        *link = min.right.take();
        Some(min)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// In-order (ascending name) walk. Each call starts a fresh traversal.
    pub fn iter(&self) -> InOrder<'_, T> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }
}

impl<T> Drop for NameIndex<T> {
    // Iterative, so a degenerate (sorted input) tree doesn't recurse through Box drops.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    fn push_left(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(&node.item)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::account::Account;

    use super::*;

    fn index_of(entries: &[(AccountNumber, &str)]) -> NameIndex<Account> {
        let mut index = NameIndex::new();
        for &(number, name) in entries {
            index.insert(Account::new(number, name, Decimal::ZERO));
        }
        index
    }

    fn names(index: &NameIndex<Account>) -> Vec<String> {
        index.iter().map(|acc| acc.name().to_string()).collect()
    }

    #[test]
    fn in_order_is_dictionary_order() {
        let index = index_of(&[(1, "Bob"), (2, "Alice"), (3, "Carol")]);
        assert_eq!(names(&index), ["Alice", "Bob", "Carol"]);
        // restartable
        assert_eq!(names(&index), ["Alice", "Bob", "Carol"]);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let index = index_of(&[(1, "bob"), (2, "Bob"), (3, "alice")]);
        assert_eq!(names(&index), ["Bob", "alice", "bob"]);
    }

    #[test]
    fn duplicate_name_is_dropped() {
        let mut index = index_of(&[(1, "Alice")]);
        assert!(!index.insert(Account::new(2, "Alice", Decimal::ONE)));
        assert_eq!(index.len(), 1);
        let all: Vec<AccountNumber> = index.iter().map(Account::number).collect();
        assert_eq!(all, vec![1]);
        assert!(index.find_by_account_number(2).is_none());
    }

    #[test]
    fn number_lookup_when_orders_agree() {
        // names and numbers share the same order, so descent works
        let index = index_of(&[(20, "M"), (10, "F"), (30, "T"), (5, "B"), (25, "P")]);
        for n in [5, 10, 20, 25, 30] {
            assert_eq!(index.find_by_account_number(n).unwrap().number(), n);
        }
        assert!(index.find_by_account_number(11).is_none());
    }

    #[test]
    fn number_lookup_misses_when_orders_disagree() {
        // "Alice" sits left of "Bob" but has the larger number
        let index = index_of(&[(1, "Bob"), (2, "Alice")]);
        assert_eq!(index.find_by_account_number(1).unwrap().name(), "Bob");
        assert!(index.find_by_account_number(2).is_none());
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn delete_leaf_one_child_two_children() {
        let mut index = index_of(&[
            (50, "M"),
            (30, "F"),
            (70, "T"),
            (20, "C"),
            (40, "H"),
            (60, "P"),
            (80, "W"),
            (65, "R"),
        ]);

        // leaf
        assert_eq!(index.delete(20).unwrap().name(), "C");
        assert_eq!(names(&index), ["F", "H", "M", "P", "R", "T", "W"]);

        // one child ("P" has only "R")
        assert_eq!(index.delete(60).unwrap().name(), "P");
        assert_eq!(names(&index), ["F", "H", "M", "R", "T", "W"]);

        // two children at the root; successor "R" is not the direct right child
        assert_eq!(index.delete(50).unwrap().name(), "M");
        assert_eq!(names(&index), ["F", "H", "R", "T", "W"]);
        assert_eq!(index.len(), 5);
        for n in [30, 40, 65, 70, 80] {
            assert!(index.find_by_account_number(n).is_some());
        }

        assert!(index.delete(50).is_none());
        assert_eq!(index.len(), 5);
    }

    #[test]
    fn delete_may_miss_existing_record() {
        let mut index = index_of(&[(1, "Bob"), (2, "Alice")]);
        assert!(index.delete(2).is_none());
        assert_eq!(names(&index), ["Alice", "Bob"]);
        assert_eq!(index.delete(1).unwrap().name(), "Bob");
        assert_eq!(names(&index), ["Alice"]);
    }

    #[test]
    fn deep_sorted_tree() {
        // sorted names degrade the tree into a single right spine
        let mut index = NameIndex::new();
        for n in 0..20_000 {
            assert!(index.insert(Account::new(n, format!("{n:07}"), Decimal::ZERO)));
        }
        assert_eq!(index.len(), 20_000);
        assert!(!index.insert(Account::new(-1, "0000000", Decimal::ZERO)));
        // numbers follow the name order here, so the descent reaches the bottom
        assert_eq!(index.find_by_account_number(19_999).unwrap().name(), "0019999");
        assert_eq!(index.delete(19_999).unwrap().number(), 19_999);
        assert_eq!(index.iter().count(), 19_999);
        drop(index);
    }

    #[test]
    fn delete_down_to_empty() {
        let mut index = index_of(&[(1, "A")]);
        assert!(index.delete(1).is_some());
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert_eq!(index.iter().count(), 0);
    }
}
