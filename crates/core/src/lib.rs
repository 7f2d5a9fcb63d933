pub mod betting;
pub mod client;
pub mod error;
pub mod execute;
pub mod gateway;
pub mod listing;
pub mod pricing;
pub mod projection;
pub mod quote;
pub mod types;
pub mod units;
pub mod validation;
pub mod watch;

pub use betting::*;
pub use client::*;
pub use error::*;
pub use execute::*;
pub use gateway::*;
pub use listing::*;
pub use projection::*;
pub use quote::*;
pub use types::*;
pub use validation::*;
