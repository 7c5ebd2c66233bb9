pub mod quote;
pub mod report;
pub mod response;
pub mod ticker;

pub use quote::*;
pub use report::*;
pub use response::*;
pub use ticker::*;
