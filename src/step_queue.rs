use std::collections::VecDeque;

use crate::dataset::WalkthroughItem;

/// FIFO of the steps that have not been shown yet.
///
/// Items leave in exactly the order they were pushed. `pop` returning `None`
/// is the normal end-of-walkthrough signal, not an error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepQueue {
    items: VecDeque<WalkthroughItem>,
}

impl StepQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Builds a queue by pushing each item in order.
    pub fn from_items(items: &[WalkthroughItem]) -> Self {
        let mut queue = Self {
            items: VecDeque::with_capacity(items.len()),
        };
        for item in items {
            queue.push(item.clone());
        }
        queue
    }

    /// Adds an item at the tail.
    pub fn push(&mut self, item: WalkthroughItem) {
        self.items.push_back(item);
    }

    /// Removes and returns the head item, or `None` once the queue is drained.
    pub fn pop(&mut self) -> Option<WalkthroughItem> {
        self.items.pop_front()
    }

    /// The item the next `pop` would return.
    pub fn peek(&self) -> Option<&WalkthroughItem> {
        self.items.front()
    }

    /// Number of items still queued.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Checks if no items are left.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Extend<WalkthroughItem> for StepQueue {
    fn extend<I: IntoIterator<Item = WalkthroughItem>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl FromIterator<WalkthroughItem> for StepQueue {
    fn from_iter<I: IntoIterator<Item = WalkthroughItem>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Rect, Size};

    fn item(text: &str) -> WalkthroughItem {
        WalkthroughItem::new(
            text,
            Rect::new(Point::new(0.0, 0.0), Size::new(20.0, 20.0)),
        )
    }

    #[test]
    fn pops_in_push_order() {
        let mut queue = StepQueue::new();
        queue.push(item("a"));
        queue.push(item("b"));
        queue.push(item("c"));

        assert_eq!(queue.count(), 3);
        assert_eq!(queue.pop().unwrap().description_text, "a");
        assert_eq!(queue.pop().unwrap().description_text, "b");
        assert_eq!(queue.count(), 1);
        assert_eq!(queue.pop().unwrap().description_text, "c");
        assert!(queue.pop().is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn empty_pop_is_repeatable() {
        let mut queue = StepQueue::new();
        assert!(queue.pop().is_none());
        assert!(queue.pop().is_none());
        assert_eq!(queue.count(), 0);
    }

    #[test]
    fn from_items_keeps_duplicates_and_order() {
        let items = vec![item("x"), item("y"), item("x")];
        let mut queue = StepQueue::from_items(&items);
        assert_eq!(queue.peek().unwrap().description_text, "x");

        let drained: Vec<_> = std::iter::from_fn(|| queue.pop())
            .map(|item| item.description_text)
            .collect();
        assert_eq!(drained, ["x", "y", "x"]);
    }

    #[test]
    fn collects_from_iterator() {
        let queue: StepQueue = ["1", "2"].into_iter().map(item).collect();
        assert_eq!(queue.count(), 2);
        assert_eq!(queue.peek().unwrap().description_text, "1");
    }
}
