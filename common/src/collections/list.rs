use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;

/// Handle to a node slot inside one [`LinkedList`]
///
/// Handles stay valid until the node they name is removed. After that the
/// slot may be reused by a later append.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Slot index inside the arena
    pub fn index(self) -> usize {
        self.0
    }
}

/// One element plus its navigation links
#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// Doubly-linked list backed by a slot arena.
///
/// Nodes live in a `Vec` of optional slots and point at each other through
/// [`NodeId`] handles, so the list never stores a raw pointer. The list owns
/// every node: removing a node drops its value, and dropping the list drops
/// whatever is left.
///
/// # Invariants
///
/// - `head` is `None` exactly when `tail` is `None` and `len == 0`.
/// - Following `next` from `head` reaches `tail` in `len - 1` steps.
/// - For every node with a successor, `successor.prev` names the node.
///
/// Freed slots are kept on a free list and handed to the next append, which
/// keeps [`LinkedList::append`] O(1) amortized.
pub struct LinkedList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<NodeId>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Creates an empty list without allocating
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of elements in the list
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Handle of the first node
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// Handle of the last node
    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|id| self.get(id))
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|id| self.get(id))
    }

    /// Value stored in the node named by `id`, if that node is still linked
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(|node| &node.value)
    }

    pub fn next_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|node| node.next)
    }

    pub fn prev_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|node| node.prev)
    }

    /// Appends `value` after the current tail.
    ///
    /// On an empty list the new node becomes both head and tail.
    pub fn append(&mut self, value: T) -> NodeId {
        let id = self.alloc_slot(Node {
            value,
            prev: self.tail,
            next: None,
        });

        match self.tail {
            Some(tail) => {
                if let Some(node) = self.node_mut(tail) {
                    node.next = Some(id);
                }
            }
            None => self.head = Some(id),
        }

        self.tail = Some(id);
        self.len += 1;
        id
    }

    /// Removes the node at zero-based `position`, counted from the head.
    ///
    /// Negative positions and positions at or past the end are ignored.
    /// Removing the last node updates the tail, whichever position it was
    /// reached through.
    pub fn remove_at(&mut self, position: isize) {
        if position < 0 {
            return;
        }

        let Some(id) = self.nth(position as usize) else {
            return;
        };

        // The value is dropped here; nothing leaves the list.
        let _ = self.unlink(id);
    }

    /// First element equal to `needle`, borrowed from the list
    pub fn search(&self, needle: &T) -> Option<&T>
    where
        T: PartialEq,
    {
        self.iter().find(|value| *value == needle)
    }

    /// Sorts the values in ascending order.
    ///
    /// See [`LinkedList::sort_by`].
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp);
    }

    /// Sorts the values by the key extracted with `key`
    pub fn sort_by_key<K, F>(&mut self, mut key: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_by(|a, b| key(a).cmp(&key(b)));
    }

    /// Sorts the values with `compare`.
    ///
    /// Values are moved into a scratch vector, sorted (stable), then written
    /// back into the existing nodes in traversal order. Node handles and links
    /// do not change; only the values move between nodes.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let order: Vec<NodeId> = self.node_ids().collect();
        let mut links = Vec::with_capacity(order.len());
        let mut values = Vec::with_capacity(order.len());

        for id in &order {
            if let Some(node) = self.slots[id.0].take() {
                links.push((node.prev, node.next));
                values.push(node.value);
            }
        }

        values.sort_by(compare);

        for ((id, (prev, next)), value) in order.into_iter().zip(links).zip(values) {
            self.slots[id.0] = Some(Node { value, prev, next });
        }
    }

    /// Calls `visit` on every value from head to tail
    pub fn traverse<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(visit);
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Drops every value and resets the list to empty
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /* ---------------- Internal helpers ---------------- */

    fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots.get(id.0).and_then(|slot| slot.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.slots.get_mut(id.0).and_then(|slot| slot.as_mut())
    }

    /// Stores `node` in a recycled slot, or grows the arena by one
    fn alloc_slot(&mut self, node: Node<T>) -> NodeId {
        if let Some(id) = self.free.pop() {
            self.slots[id.0] = Some(node);
            return id;
        }

        let id = NodeId(self.slots.len());
        self.slots.push(Some(node));
        id
    }

    /// Handle of the node `index` steps after the head
    fn nth(&self, index: usize) -> Option<NodeId> {
        if index >= self.len {
            return None;
        }
        self.node_ids().nth(index)
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        core::iter::successors(self.head, move |id| self.next_of(*id))
    }

    /// Splices the node out of the chain and releases its slot.
    ///
    /// Returns the value that was stored in the node.
    fn unlink(&mut self, id: NodeId) -> Option<T> {
        let node = self.slots.get_mut(id.0)?.take()?;

        match node.prev {
            Some(prev) => {
                if let Some(prev) = self.node_mut(prev) {
                    prev.next = node.next;
                }
            }
            None => self.head = node.next,
        }

        match node.next {
            Some(next) => {
                if let Some(next) = self.node_mut(next) {
                    next.prev = node.prev;
                }
            }
            None => self.tail = node.prev,
        }

        self.free.push(id);
        self.len -= 1;
        Some(node.value)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders the chain as `a -> b -> nullptr`
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self {
            write!(f, "{} -> ", value)?;
        }
        f.write_str("nullptr")
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over a [`LinkedList`], head to tail
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let list: &'a LinkedList<T> = self.list;
        let node = list.node(self.cursor?)?;
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
