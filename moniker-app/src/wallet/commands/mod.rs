pub mod forget;
pub mod list;
pub mod rename;
pub mod show;
