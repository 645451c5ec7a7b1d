pub mod check;
pub mod expand;
pub mod list;

pub use check::check_command;
pub use expand::expand_command;
pub use list::list_command;
