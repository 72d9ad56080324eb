use crate::account::{AccountNumber, AccountRecord};

struct Node<T> {
    item: T,
    next: usize,
}

/// Circular singly linked list over a node arena. `next` fields are arena
/// slots; `head` is the most recently inserted live node and its successor
/// is the oldest, so there is no terminator to look for.
pub struct CircularRegistry<T> {
    nodes: Vec<Node<T>>,
    head: Option<usize>,
    size: usize,
}

impl<T> Default for CircularRegistry<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            size: 0,
        }
    }
}

impl<T: AccountRecord> CircularRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Splices the new node right after `head` and makes it the new head.
    pub fn add(&mut self, item: T) {
        let slot = self.nodes.len();
        let next = match self.head {
            Some(head) => std::mem::replace(&mut self.nodes[head].next, slot),
            None => slot,
        };
        self.nodes.push(Node { item, next });
        self.head = Some(slot);
        self.size += 1;
    }

    /// Scans from `head.next` round to `head`, then checks `head` last.
    pub fn find(&self, account_number: AccountNumber) -> Option<&T> {
        let head = self.head?;
        let mut current = self.nodes[head].next;
        while current != head {
            let node = &self.nodes[current];
            if node.item.account_number() == account_number {
                return Some(&node.item);
            }
            current = node.next;
        }
        let node = &self.nodes[head];
        (node.item.account_number() == account_number).then_some(&node.item)
    }

    /// Same visiting order as [`find`](Self::find). Removing the head hands
    /// the role to its predecessor; removing the last node empties the list.
    pub fn delete(&mut self, account_number: AccountNumber) -> Option<T> {
        let head = self.head?;
        let mut previous = head;
        let mut current = self.nodes[head].next;
        while current != head {
            if self.nodes[current].item.account_number() == account_number {
                self.nodes[previous].next = self.nodes[current].next;
                return Some(self.release(current));
            }
            previous = current;
            current = self.nodes[current].next;
        }
        // `previous` now links to `head`
        if self.nodes[head].item.account_number() != account_number {
            return None;
        }
        if self.size == 1 {
            self.head = None;
        } else {
            self.nodes[previous].next = self.nodes[head].next;
            self.head = Some(previous);
        }
        Some(self.release(head))
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Visits `head.next` first and `head` last.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            current: self.head.map(|head| self.nodes[head].next),
            remaining: self.size,
        }
    }

    /// Drops an already unlinked slot. The arena stays dense: the last slot
    /// moves into the hole and whoever pointed at it is rewired.
    fn release(&mut self, slot: usize) -> T {
        let last = self.nodes.len() - 1;
        let removed = self.nodes.swap_remove(slot);
        if slot != last {
            for node in &mut self.nodes {
                if node.next == last {
                    node.next = slot;
                }
            }
            if self.head == Some(last) {
                self.head = Some(slot);
            }
        }
        self.size -= 1;
        removed.item
    }
}

pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    current: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.current?];
        self.current = Some(node.next);
        self.remaining -= 1;
        Some(&node.item)
    }
}
