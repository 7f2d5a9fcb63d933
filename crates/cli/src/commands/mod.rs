pub mod bet;
pub mod bid;
pub mod create;
pub mod list;
pub mod offline;
pub mod status;
pub mod watch;
