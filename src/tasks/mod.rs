//! Task partitions over a combined sample set.
//!
//! A [`Task`] is a contiguous half-open index range over the vector axis;
//! a [`TaskGroup`] is an ordered collection of tasks whose append order
//! defines task indexing.

use std::ops::Range;
use std::slice;

use crate::error::{Error, Result};

/// A contiguous range of vector indices `[start, end)` belonging to one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    start: usize,
    end: usize,
}

impl Task {
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(Task { start, end })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn indices(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// An ordered collection of tasks partitioning a vector range.
#[derive(Debug, Clone, Default)]
pub struct TaskGroup {
    tasks: Vec<Task>,
}

impl TaskGroup {
    pub fn new() -> Self {
        TaskGroup { tasks: Vec::new() }
    }

    /// Append a task; its index is the number of tasks appended before it.
    pub fn append_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn num_tasks(&self) -> usize {
        self.tasks.len()
    }

    pub fn task(&self, index: usize) -> Result<&Task> {
        self.tasks.get(index).ok_or(Error::InvalidTask {
            index,
            num_tasks: self.tasks.len(),
        })
    }

    pub fn iter(&self) -> slice::Iter<Task> {
        self.tasks.iter()
    }

    /// Largest index covered by any task.
    pub fn span(&self) -> usize {
        self.tasks.iter().map(|t| t.end).max().unwrap_or(0)
    }

    /// Whether the tasks, in order, tile `[0, n)` without gaps or overlap.
    pub fn is_partition_of(&self, n: usize) -> bool {
        let mut next = 0;
        for task in &self.tasks {
            if task.start != next {
                return false;
            }
            next = task.end;
        }
        next == n
    }
}

#[test]
fn task_is_half_open() {
    let t = Task::new(2, 5).unwrap();
    assert_eq!(t.len(), 3);
    assert_eq!(t.indices().collect::<Vec<_>>(), vec![2, 3, 4]);
}

#[test]
fn task_rejects_reversed_range() {
    match Task::new(5, 2) {
        Err(Error::InvalidRange { start: 5, end: 2 }) => {}
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn group_keeps_append_order() {
    let mut group = TaskGroup::new();
    group.append_task(Task::new(0, 4).unwrap());
    group.append_task(Task::new(4, 8).unwrap());
    assert_eq!(group.num_tasks(), 2);
    assert_eq!(group.task(0).unwrap().indices(), 0..4);
    assert_eq!(group.task(1).unwrap().indices(), 4..8);
    assert_eq!(group.span(), 8);
}

#[test]
fn group_rejects_out_of_range_index() {
    let mut group = TaskGroup::new();
    group.append_task(Task::new(0, 2).unwrap());
    match group.task(1) {
        Err(Error::InvalidTask {
            index: 1,
            num_tasks: 1,
        }) => {}
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn partition_check() {
    let mut group = TaskGroup::new();
    group.append_task(Task::new(0, 3).unwrap());
    group.append_task(Task::new(3, 6).unwrap());
    assert!(group.is_partition_of(6));
    assert!(!group.is_partition_of(7));

    let mut gap = TaskGroup::new();
    gap.append_task(Task::new(0, 2).unwrap());
    gap.append_task(Task::new(3, 6).unwrap());
    assert!(!gap.is_partition_of(6));

    let mut overlap = TaskGroup::new();
    overlap.append_task(Task::new(0, 4).unwrap());
    overlap.append_task(Task::new(2, 6).unwrap());
    assert!(!overlap.is_partition_of(6));
}
