//! Sort-key assignment for tasks within a status column.
//!
//! Task `order` values are sparse: appends land [`ORDER_GAP`] above the
//! current maximum, so a later insert-between has room without touching its
//! neighbours. Structural changes (a deletion, or a task arriving from
//! another column) renumber the affected column back to `0, GAP, 2 * GAP, ...`
//! while preserving its relative order.

use super::{Section, Task, TaskId};

/// Spacing between neighbouring task sort keys.
pub const ORDER_GAP: i64 = 1000;

/// Returns the sort key for a task appended to `status`.
///
/// An empty column behaves as if its maximum were `-1`, so the first task
/// receives `ORDER_GAP - 1`.
#[must_use]
pub fn next_task_order(tasks: &[Task], status: &str) -> i64 {
    tasks
        .iter()
        .filter(|task| task.status() == status)
        .map(Task::order)
        .fold(-1, i64::max)
        .saturating_add(ORDER_GAP)
}

/// Renumbers every task in `status` to `index * ORDER_GAP`.
///
/// The column is stably sorted by its current `order` first, so ties keep
/// their storage order. The task named by `excluding` is neither counted nor
/// modified.
pub fn renumber_column(tasks: &mut [Task], status: &str, excluding: Option<TaskId>) {
    let mut column: Vec<&mut Task> = tasks
        .iter_mut()
        .filter(|task| task.status() == status && Some(task.id()) != excluding)
        .collect();
    column.sort_by_key(|task| task.order());

    for (task, order) in column.into_iter().zip(gap_sequence()) {
        task.set_order(order);
    }
}

/// Returns the tasks in `status` in display order.
#[must_use]
pub fn column_in_display_order<'a>(tasks: &'a [Task], status: &str) -> Vec<&'a Task> {
    let mut column: Vec<&Task> = tasks.iter().filter(|task| task.status() == status).collect();
    column.sort_by_key(|task| task.order());
    column
}

/// Returns the display position for a section appended to the board.
#[must_use]
pub fn next_section_order(sections: &[Section]) -> i64 {
    sections
        .iter()
        .map(Section::order)
        .fold(-1, i64::max)
        .saturating_add(1)
}

fn gap_sequence() -> impl Iterator<Item = i64> {
    (0_i64..).map(|index| index.saturating_mul(ORDER_GAP))
}
