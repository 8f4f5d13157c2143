pub mod artist;
pub mod filter;
pub mod search;

pub use artist::*;
pub use filter::*;
pub use search::*;
