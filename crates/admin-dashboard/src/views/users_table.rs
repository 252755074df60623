use crate::data_slice::DataState;
use crate::model::User;
use crate::operations::{DataOperation, DataService};
use slice_framework::SliceClient;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::task::JoinHandle;
use tracing::debug;

const TITLE: &str = "Users";
const HEADERS: [&str; 4] = ["USERS ID", "USERNAME", "EMAIL", "CREATED_AT"];
const COLUMN_GAP: &str = " | ";

/// Read-only table of the store's users.
///
/// The first [`mount`](Self::mount) starts a users fetch; [`render`](Self::render)
/// always reflects the users currently in the store.
pub struct UsersTable {
    store: SliceClient<DataState>,
    service: DataService,
    mounted: AtomicBool,
}

impl UsersTable {
    pub fn new(store: SliceClient<DataState>, service: DataService) -> Self {
        Self {
            store,
            service,
            mounted: AtomicBool::new(false),
        }
    }

    /// Starts the users fetch on first mount and returns its task.
    ///
    /// Later calls return `None`; the table never re-fetches on its own.
    pub fn mount(&self) -> Option<JoinHandle<()>> {
        if self.mounted.swap(true, Ordering::SeqCst) {
            debug!("Users table already mounted");
            return None;
        }
        Some(self.service.spawn(&self.store, DataOperation::FetchUsers))
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    /// Renders the users currently in the store.
    pub fn render(&self) -> String {
        self.store.with_state(|state| render_users(&state.users))
    }
}

/// Renders `users` as a titled text table.
///
/// Each column is as wide as its widest cell. Rows are separated by a dashed line, with
/// none after the last row.
pub fn render_users(users: &[User]) -> String {
    let rows: Vec<[&str; 4]> = users
        .iter()
        .map(|u| [u.id.as_str(), u.username.as_str(), u.email.as_str(), u.created_at.as_str()])
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator = "-".repeat(widths.iter().sum::<usize>() + COLUMN_GAP.len() * (widths.len() - 1));

    let mut lines = vec![TITLE.to_string(), format_row(&HEADERS, &widths)];
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            lines.push(separator.clone());
        }
        lines.push(format_row(row, &widths));
    }
    lines.join("\n")
}

fn format_row(cells: &[&str; 4], widths: &[usize; 4]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_has_title_and_header_only() {
        let rendered = render_users(&[]);
        assert_eq!(rendered, "Users\nUSERS ID | USERNAME | EMAIL | CREATED_AT");
    }

    #[test]
    fn test_single_row_has_no_separator() {
        let users = [User::new("1", "alice", "a@x.com", "2024-01-01")];
        let lines: Vec<String> = render_users(&users).lines().map(String::from).collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "1        | alice    | a@x.com | 2024-01-01");
        assert!(!lines.iter().any(|l| l.starts_with('-')));
    }

    #[test]
    fn test_separator_between_rows_only() {
        let users = [
            User::new("1", "alice", "a@x.com", "t1"),
            User::new("2", "bob", "b@x.com", "t2"),
            User::new("3", "carol", "c@x.com", "t3"),
        ];
        let rendered = render_users(&users);
        let lines: Vec<&str> = rendered.lines().collect();

        // title, header, 3 rows, 2 separators
        assert_eq!(lines.len(), 7);
        assert!(lines[3].chars().all(|c| c == '-'));
        assert!(lines[5].chars().all(|c| c == '-'));
        assert!(lines[6].starts_with("3 "));
        assert_eq!(lines[3].len(), lines[1].len());
    }

    #[test]
    fn test_columns_widen_to_longest_cell() {
        let users = [User::new("a-very-long-id", "x", "y", "z")];
        let rendered = render_users(&users);
        let header = rendered.lines().nth(1).unwrap();
        assert!(header.starts_with("USERS ID       | USERNAME"));
    }
}
