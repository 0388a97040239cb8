use nest_calendar::{GridCell, MonthGrid};

use super::Task;

/// One grid cell with the tasks scheduled on that day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaDay {
    pub cell: GridCell,
    pub tasks: Vec<Task>,
}

/// A month grid where every visible day carries its tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthAgenda {
    pub month: u8,
    pub year: i32,
    pub days: Vec<AgendaDay>,
}

impl MonthAgenda {
    /// Distributes `tasks` over the grid cells using `day_of` to find each
    /// task's calendar day. Tasks outside the grid are dropped.
    pub fn assemble<F>(grid: &MonthGrid, tasks: Vec<Task>, day_of: F) -> Self
    where
        F: Fn(&Task) -> nest_calendar::CalendarDate,
    {
        let mut days: Vec<AgendaDay> = grid
            .cells()
            .iter()
            .map(|cell| AgendaDay {
                cell: *cell,
                tasks: Vec::new(),
            })
            .collect();

        for task in tasks {
            if let Some(index) = grid.index_of(&day_of(&task)) {
                days[index].tasks.push(task);
            }
        }

        for day in &mut days {
            day.tasks.sort_by_key(|task| task.scheduled_at);
        }

        Self {
            month: grid.month(),
            year: grid.year(),
            days,
        }
    }

    pub fn task_count(&self) -> usize {
        self.days.iter().map(|day| day.tasks.len()).sum()
    }

    pub fn open_task_count(&self) -> usize {
        self.days
            .iter()
            .flat_map(|day| &day.tasks)
            .filter(|task| !task.is_completed)
            .count()
    }
}
