//! Text views over the data slice.

pub mod users_table;

pub use users_table::{render_users, UsersTable};
