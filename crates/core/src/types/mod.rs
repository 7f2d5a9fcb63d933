pub mod bid;
pub mod draft;
pub mod params;
pub mod primitives;
pub mod state;
pub mod thresholds;
pub mod view;

pub use bid::*;
pub use draft::*;
pub use params::*;
pub use primitives::*;
pub use state::*;
pub use thresholds::*;
pub use view::*;
