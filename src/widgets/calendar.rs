//! Booking calendar.
//!
//! Renders a Sunday-first month grid and classifies every day as booked,
//! pending or available from static day-of-month lists. Navigation only
//! moves the month cursor; nothing is persisted.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Weekday column headers, Sunday first.
pub const DAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Availability of a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Booked,
    Pending,
    Available,
}

impl DayStatus {
    /// CSS class of the day cell.
    pub fn class(&self) -> &'static str {
        match self {
            DayStatus::Booked => "booked",
            DayStatus::Pending => "pending",
            DayStatus::Available => "available",
        }
    }

    /// Marker shown after the day number in text output.
    pub fn mark(&self) -> char {
        match self {
            DayStatus::Booked => 'x',
            DayStatus::Pending => '?',
            DayStatus::Available => ' ',
        }
    }
}

/// Day-of-month lists used to classify days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Availability {
    pub booked: Vec<u32>,
    pub pending: Vec<u32>,
}

impl Default for Availability {
    fn default() -> Self {
        Self {
            booked: vec![5, 12, 18, 25],
            pending: vec![8, 15, 22],
        }
    }
}

impl Availability {
    /// Booked wins over pending when a day is in both lists.
    pub fn status(&self, day: u32) -> DayStatus {
        if self.booked.contains(&day) {
            DayStatus::Booked
        } else if self.pending.contains(&day) {
            DayStatus::Pending
        } else {
            DayStatus::Available
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub day: u32,
    pub status: DayStatus,
}

/// A rendered month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarGrid {
    /// e.g. "October 2026"
    pub title: String,
    /// Empty cells before day 1 (weekday of day 1, Sunday = 0)
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

impl CalendarGrid {
    /// Rows of seven optional cells, blanks as `None`.
    pub fn weeks(&self) -> Vec<Vec<Option<DayCell>>> {
        let cells: Vec<Option<DayCell>> = (0..self.leading_blanks)
            .map(|_| None)
            .chain(self.days.iter().copied().map(Some))
            .collect();
        cells.chunks(7).map(|week| week.to_vec()).collect()
    }

    /// Plain-text grid: title, weekday headers, then one line per week.
    ///
    /// Each day is its number followed by its [`DayStatus::mark`].
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n{}\n", self.title, DAY_HEADERS.join(" "));
        for week in self.weeks() {
            let line = week
                .iter()
                .map(|cell| match cell {
                    Some(cell) => format!("{:>2}{}", cell.day, cell.status.mark()),
                    None => "   ".to_string(),
                })
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

/// The month currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    first: NaiveDate,
}

impl MonthCursor {
    /// Cursor on the month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    /// Cursor on `month` (1-12) of `year`, if that is a valid month.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// Number of days in this month.
    pub fn days_in_month(&self) -> u32 {
        self.first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .map(|last| last.day())
            .unwrap_or(31)
    }

    pub fn prev_month(&mut self) {
        if let Some(first) = self.first.checked_sub_months(Months::new(1)) {
            self.first = first;
        }
    }

    pub fn next_month(&mut self) {
        if let Some(first) = self.first.checked_add_months(Months::new(1)) {
            self.first = first;
        }
    }

    pub fn render(&self, availability: &Availability) -> CalendarGrid {
        CalendarGrid {
            title: self.first.format("%B %Y").to_string(),
            leading_blanks: self.first.weekday().num_days_from_sunday(),
            days: (1..=self.days_in_month())
                .map(|day| DayCell {
                    day,
                    status: availability.status(day),
                })
                .collect(),
        }
    }
}

/// Calendar widget: a month cursor plus the availability lists.
#[derive(Debug, Clone)]
pub struct Calendar {
    cursor: MonthCursor,
    availability: Availability,
}

impl Calendar {
    pub fn new(today: NaiveDate, availability: Availability) -> Self {
        Self {
            cursor: MonthCursor::containing(today),
            availability,
        }
    }

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub fn prev_month(&mut self) {
        self.cursor.prev_month();
    }

    pub fn next_month(&mut self) {
        self.cursor.next_month();
    }

    pub fn render(&self) -> CalendarGrid {
        self.cursor.render(&self.availability)
    }
}
