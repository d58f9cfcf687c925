//! Plain-text rendering of command results.

use std::io::{self, Write};
use taskdesk::task::dashboard::{Page, TaskStats};
use taskdesk::task::domain::{StatusCatalog, Task};
use taskdesk::task::presentation::{format_date, format_date_time, status_label};

const TITLE_WIDTH: usize = 40;

pub fn task_table(out: &mut impl Write, tasks: &[Task]) -> io::Result<()> {
    if tasks.is_empty() {
        return writeln!(out, "No tasks found");
    }

    writeln!(out, "{:>6}  {:<TITLE_WIDTH$}  {:<12}  {:<10}", "#", "Title", "Status", "Due")?;
    for task in tasks {
        writeln!(
            out,
            "{:>6}  {:<TITLE_WIDTH$}  {:<12}  {:<10}",
            task.sort_number(),
            clip(task.title(), TITLE_WIDTH),
            status_label(task.status()),
            format_date(task.due_date()),
        )?;
    }
    Ok(())
}

pub fn task_page(out: &mut impl Write, page: &Page<Task>) -> io::Result<()> {
    task_table(out, &page.items)?;
    if page.has_multiple_pages() {
        let window = page
            .window()
            .iter()
            .map(|number| {
                if *number == page.number {
                    format!("[{number}]")
                } else {
                    number.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{}  pages: {window} of {}", page.summary(), page.total_pages)?;
    }
    Ok(())
}

pub fn task_detail(out: &mut impl Write, task: &Task) -> io::Result<()> {
    writeln!(out, "Task #{} (id {})", task.sort_number(), task.id())?;
    writeln!(out, "Title:       {}", task.title())?;
    writeln!(out, "Status:      {}", status_label(task.status()))?;
    writeln!(out, "Due:         {}", format_date_time(task.due_date()))?;
    writeln!(out, "Description: {}", task.description().unwrap_or("-"))?;
    if let Some(created) = task.created_at() {
        writeln!(out, "Created:     {}", format_date_time(Some(created)))?;
    }
    if let Some(updated) = task.updated_at() {
        writeln!(out, "Updated:     {}", format_date_time(Some(updated)))?;
    }
    Ok(())
}

pub fn statuses(out: &mut impl Write, catalog: &StatusCatalog) -> io::Result<()> {
    for status in catalog.statuses() {
        writeln!(out, "{:<12}  {}", status.as_str(), status_label(*status))?;
    }
    Ok(())
}

pub fn stats(out: &mut impl Write, stats: &TaskStats) -> io::Result<()> {
    writeln!(out, "Total Tasks  {}", stats.total)?;
    writeln!(out, "New          {}", stats.new)?;
    writeln!(out, "In Progress  {}", stats.in_progress)?;
    writeln!(out, "Completed    {}", stats.completed)?;
    writeln!(out, "Overdue      {}", stats.overdue)
}

fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_owned();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(3)).collect();
    clipped.push_str("...");
    clipped
}
