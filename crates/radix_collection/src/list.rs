use std::fmt;
use std::iter::FusedIterator;

const NIL: usize = usize::MAX;

/// Stable handle to a node of a [`LinkedSeq`].
///
/// A handle stays valid while its node is in the sequence; relinking,
/// including sorting, never invalidates it. Once the node is removed its slot
/// may be reused by a later insertion.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Clone)]
struct Node<T> {
    value: Option<T>,
    prev: usize,
    next: usize,
}

/// Arena-backed doubly-linked sequence.
///
/// Nodes never move in memory order when the sequence is reordered; only
/// the `prev`/`next` links change.
#[derive(Clone)]
pub struct LinkedSeq<T> {
    nodes: Vec<Node<T>>,
    free: Vec<usize>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> Default for LinkedSeq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedSeq<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn front_id(&self) -> Option<NodeId> {
        (self.head != NIL).then_some(NodeId(self.head))
    }

    #[inline]
    pub fn back_id(&self) -> Option<NodeId> {
        (self.tail != NIL).then_some(NodeId(self.tail))
    }

    pub fn front(&self) -> Option<&T> {
        self.front_id().and_then(|id| self.get(id))
    }

    pub fn back(&self) -> Option<&T> {
        self.back_id().and_then(|id| self.get(id))
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id.0)?.value.as_ref()
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id.0)?.value.as_mut()
    }

    /// Successor of `id` in the current order.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        let node = self.live(id.0)?;
        (node.next != NIL).then_some(NodeId(node.next))
    }

    /// Predecessor of `id` in the current order.
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        let node = self.live(id.0)?;
        (node.prev != NIL).then_some(NodeId(node.prev))
    }

    pub fn push_back(&mut self, value: T) -> NodeId {
        let idx = self.alloc(value);
        self.link_after_tail(idx);
        self.len += 1;
        NodeId(idx)
    }

    pub fn push_front(&mut self, value: T) -> NodeId {
        let idx = self.alloc(value);
        let head = self.head;
        self.nodes[idx].next = head;
        if head == NIL {
            self.tail = idx;
        } else {
            self.nodes[head].prev = idx;
        }
        self.head = idx;
        self.len += 1;
        NodeId(idx)
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let id = self.front_id()?;
        self.remove(id)
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.back_id()?;
        self.remove(id)
    }

    /// Unlinks `id` and returns its value, or `None` for a stale handle.
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        let idx = id.0;
        self.live(idx)?;
        self.unlink_range(idx, idx);
        self.free.push(idx);
        self.len -= 1;
        self.nodes[idx].value.take()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = NIL;
        self.tail = NIL;
        self.len = 0;
    }

    /// Detaches the block `first..=last` and re-attaches it at the back, in
    /// constant time.
    ///
    /// `last` must be reachable from `first` by following `next` links.
    pub fn splice_back(&mut self, first: NodeId, last: NodeId) {
        let (first, last) = (first.0, last.0);
        debug_assert!(self.is_forward_run(first, last));
        if last == self.tail {
            return;
        }
        self.unlink_range(first, last);

        let tail = self.tail;
        self.nodes[tail].next = first;
        self.nodes[first].prev = tail;
        self.nodes[last].next = NIL;
        self.tail = last;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Like [`iter`](Self::iter), with each value's handle.
    pub fn iter_with_ids(&self) -> impl Iterator<Item = (NodeId, &T)> + '_ {
        self.ids().map(move |id| (id, self.value_at(id.0)))
    }

    pub fn ids(&self) -> Ids<'_, T> {
        Ids {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    #[inline]
    fn live(&self, idx: usize) -> Option<&Node<T>> {
        self.nodes.get(idx).filter(|node| node.value.is_some())
    }

    #[inline]
    fn value_at(&self, idx: usize) -> &T {
        match &self.nodes[idx].value {
            Some(value) => value,
            None => unreachable!("linked node {idx} holds no value"),
        }
    }

    fn alloc(&mut self, value: T) -> usize {
        let node = Node {
            value: Some(value),
            prev: NIL,
            next: NIL,
        };
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn link_after_tail(&mut self, idx: usize) {
        let tail = self.tail;
        self.nodes[idx].prev = tail;
        self.nodes[idx].next = NIL;
        if tail == NIL {
            self.head = idx;
        } else {
            self.nodes[tail].next = idx;
        }
        self.tail = idx;
    }

    // Leaves the inner links of first..=last intact.
    fn unlink_range(&mut self, first: usize, last: usize) {
        let before = self.nodes[first].prev;
        let after = self.nodes[last].next;
        if before == NIL {
            self.head = after;
        } else {
            self.nodes[before].next = after;
        }
        if after == NIL {
            self.tail = before;
        } else {
            self.nodes[after].prev = before;
        }
    }

    fn is_forward_run(&self, first: usize, last: usize) -> bool {
        let mut cursor = first;
        while cursor != NIL {
            if cursor == last {
                return true;
            }
            cursor = self.nodes[cursor].next;
        }
        false
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedSeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedSeq<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedSeq<T> {}

impl<T> FromIterator<T> for LinkedSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedSeq<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

pub struct Iter<'a, T> {
    list: &'a LinkedSeq<T>,
    cursor: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == NIL {
            return None;
        }
        let idx = self.cursor;
        self.cursor = self.list.nodes[idx].next;
        self.remaining -= 1;
        Some(self.list.value_at(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

pub struct Ids<'a, T> {
    list: &'a LinkedSeq<T>,
    cursor: usize,
    remaining: usize,
}

impl<T> Iterator for Ids<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == NIL {
            return None;
        }
        let idx = self.cursor;
        self.cursor = self.list.nodes[idx].next;
        self.remaining -= 1;
        Some(NodeId(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Ids<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedSeq<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct IntoIter<T> {
    list: LinkedSeq<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedSeq<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}
