//! Deferred Tasks
//!
//! FIFO queue of continuations that must run after the originating event
//! has fully returned, on the same UI task. The host drains it through
//! [`crate::WebView::pump`] once per loop turn.

use std::collections::VecDeque;

use crate::input::{ContextMenuReason, Point};

/// A continuation scheduled on the cooperative queue
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    /// Re-raise a context-menu event captured earlier. Deferral breaks out
    /// of the original event's call context so engine-internal menu
    /// suppression has already taken effect when this runs.
    RaiseContextMenu {
        position: Point,
        reason: ContextMenuReason,
    },
}

/// Zero-delay FIFO task queue
#[derive(Debug, Default)]
pub struct TaskQueue {
    tasks: VecDeque<Task>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a task to run on the next pump
    pub fn post(&mut self, task: Task) {
        self.tasks.push_back(task);
    }

    /// Take the next task, oldest first
    pub fn pop(&mut self) -> Option<Task> {
        self.tasks.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = TaskQueue::new();
        assert!(queue.is_empty());

        queue.post(Task::RaiseContextMenu {
            position: Point::new(1.0, 1.0),
            reason: ContextMenuReason::Mouse,
        });
        queue.post(Task::RaiseContextMenu {
            position: Point::new(2.0, 2.0),
            reason: ContextMenuReason::Keyboard,
        });

        assert_eq!(queue.len(), 2);
        assert!(!queue.is_empty());
        match queue.pop() {
            Some(Task::RaiseContextMenu { position, .. }) => assert_eq!(position.x, 1.0),
            other => panic!("unexpected task {other:?}"),
        }
        match queue.pop() {
            Some(Task::RaiseContextMenu { position, .. }) => assert_eq!(position.x, 2.0),
            other => panic!("unexpected task {other:?}"),
        }
        assert!(queue.pop().is_none());
    }
}
