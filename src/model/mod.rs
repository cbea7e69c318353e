pub mod calendar;
pub mod display;
pub mod dutch;
pub mod filter;
pub mod navigator;
pub mod preferences;
pub mod raw;
pub mod team;
pub mod uri;
pub mod week;

pub use calendar::*;
pub use display::*;
pub use dutch::*;
pub use filter::*;
pub use navigator::*;
pub use preferences::*;
pub use raw::*;
pub use team::*;
pub use uri::*;
pub use week::*;
