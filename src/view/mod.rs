pub mod leaders;
pub mod page;
pub mod scoreboard;
pub mod standings;
pub mod teams;
pub mod types;
pub mod utils;

pub use leaders::*;
pub use page::*;
pub use scoreboard::*;
pub use standings::*;
pub use teams::*;
pub use types::*;
pub use utils::*;
