pub mod metadata;
pub mod traits;
pub mod wallet;

pub use metadata::*;
pub use traits::*;
pub use wallet::*;
