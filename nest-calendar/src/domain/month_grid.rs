use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::{CalendarDate, Weekday};
use crate::engine::{self, days_in_month};
use crate::error::Result;

/// Number of cells in a month grid: six weeks of seven days.
pub const GRID_CELLS: usize = 42;
pub const DAYS_PER_WEEK: usize = 7;

/// Where a grid cell sits relative to the requested month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthPosition {
    Previous,
    Current,
    Next,
}

/// Controls how many days of the previous month lead the grid.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GridLayout {
    /// Months starting Sunday through Wednesday get a full extra leading
    /// week, so the previous month's tail is always visible.
    #[default]
    Balanced,
    /// The grid starts on the Sunday on or before the 1st.
    Compact,
}

impl GridLayout {
    fn leading_days(self, first: Weekday) -> u8 {
        let weekday = first.index();
        match self {
            GridLayout::Balanced if weekday <= 3 => weekday + 7,
            _ => weekday,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub date: CalendarDate,
    pub weekday: Weekday,
    pub position: MonthPosition,
}

impl GridCell {
    pub fn in_month(&self) -> bool {
        self.position == MonthPosition::Current
    }
}

/// Six display weeks for one month, padded with the neighbouring months.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    month: u8,
    year: i32,
    cells: Vec<GridCell>,
}

impl MonthGrid {
    /// Zero-based month the grid was built for.
    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell]> + '_ {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// The contiguous run of cells belonging to the requested month.
    pub fn current_month(&self) -> &[GridCell] {
        let start = self
            .cells
            .iter()
            .position(GridCell::in_month)
            .unwrap_or(0);
        let len = self.cells[start..]
            .iter()
            .take_while(|cell| cell.in_month())
            .count();
        &self.cells[start..start + len]
    }

    /// First visible date.
    pub fn first_date(&self) -> CalendarDate {
        self.cells[0].date
    }

    /// Last visible date.
    pub fn last_date(&self) -> CalendarDate {
        self.cells[GRID_CELLS - 1].date
    }

    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.index_of(date).is_some()
    }

    pub fn index_of(&self, date: &CalendarDate) -> Option<usize> {
        self.cells.binary_search_by(|cell| cell.date.cmp(date)).ok()
    }
}

/// Builds the 42-cell grid for a zero-based `month` using the balanced layout.
pub fn build_month_grid(month: u8, year: i32) -> Result<MonthGrid> {
    build_month_grid_with(month, year, GridLayout::Balanced)
}

pub fn build_month_grid_with(month: u8, year: i32, layout: GridLayout) -> Result<MonthGrid> {
    let days = i32::from(days_in_month(month, year)?);
    let (prev_month, prev_year) = engine::previous_month(month, year)?;
    let (next_month, next_year) = engine::next_month(month, year)?;
    let prev_days = i32::from(days_in_month(prev_month, prev_year)?);

    let offset = i32::from(layout.leading_days(engine::zeller(1, month + 1, year)));

    let cells = (0..GRID_CELLS as i32)
        .map(|i| {
            let day_num = i - offset + 1;
            let (date, position) = if day_num < 1 {
                (
                    CalendarDate::new((prev_days + day_num) as u8, prev_month, prev_year)?,
                    MonthPosition::Previous,
                )
            } else if day_num > days {
                (
                    CalendarDate::new((day_num - days) as u8, next_month, next_year)?,
                    MonthPosition::Next,
                )
            } else {
                (
                    CalendarDate::new(day_num as u8, month, year)?,
                    MonthPosition::Current,
                )
            };

            Ok(GridCell {
                weekday: date.weekday(),
                date,
                position,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(MonthGrid { month, year, cells })
}
