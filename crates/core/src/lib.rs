pub mod model;
pub mod scanner;
pub mod signature;
pub mod catalog;
pub mod grouper;
pub mod progress;
pub mod export;
pub mod error;
pub mod logging;

pub use model::*;
pub use scanner::*;
pub use progress::*;
pub use signature::aggregate;
pub use catalog::catalog;
pub use grouper::{find_duplicates, group};
pub use error::ScanError;
