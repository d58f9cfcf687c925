//! Column sorting of the task list.

use crate::task::domain::Task;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sortable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    /// Title, compared case-insensitively.
    Title,
    /// Wire status name, compared case-insensitively.
    Status,
    /// Parsed due date; tasks without one sort as the epoch.
    DueDate,
    /// Task number, falling back to the id.
    TaskNum,
}

impl SortField {
    /// Returns the column name accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Status => "status",
            Self::DueDate => "due-date",
            Self::TaskNum => "tasknum",
        }
    }

    fn compare(self, left: &Task, right: &Task) -> Ordering {
        match self {
            Self::Title => left.title().to_lowercase().cmp(&right.title().to_lowercase()),
            Self::Status => left
                .status()
                .as_str()
                .to_lowercase()
                .cmp(&right.status().as_str().to_lowercase()),
            Self::DueDate => due_key(left).cmp(&due_key(right)),
            Self::TaskNum => left.sort_number().cmp(&right.sort_number()),
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "title" => Ok(Self::Title),
            "status" => Ok(Self::Status),
            "due-date" | "duedate" | "due" => Ok(Self::DueDate),
            "tasknum" | "number" | "id" => Ok(Self::TaskNum),
            _ => Err(format!("unknown sort field '{value}'")),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn due_key(task: &Task) -> i64 {
    task.due_at().map_or(0, |due| due.timestamp_millis())
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec {
    field: SortField,
    direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::ascending(SortField::DueDate)
    }
}

impl SortSpec {
    /// Creates an ascending sort on `field`.
    #[must_use]
    pub const fn ascending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    /// Creates a sort with an explicit direction.
    #[must_use]
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Returns the sorted column.
    #[must_use]
    pub const fn field(self) -> SortField {
        self.field
    }

    /// Returns the direction.
    #[must_use]
    pub const fn direction(self) -> SortDirection {
        self.direction
    }

    /// Applies a click on the `field` column header: the active column flips
    /// direction, any other column becomes active in ascending order.
    #[must_use]
    pub fn toggle(self, field: SortField) -> Self {
        if self.field == field {
            Self::new(field, self.direction.flipped())
        } else {
            Self::ascending(field)
        }
    }

    /// Sorts `tasks` in place. Equal keys keep their input order.
    pub fn sort(self, tasks: &mut [Task]) {
        tasks.sort_by(|left, right| {
            let ordering = self.field.compare(left, right);
            match self.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    /// Returns `tasks` sorted.
    #[must_use]
    pub fn sorted(self, mut tasks: Vec<Task>) -> Vec<Task> {
        self.sort(&mut tasks);
        tasks
    }
}
