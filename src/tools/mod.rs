pub mod analyze_query;
pub mod inspect_business;
pub mod search;

pub use analyze_query::*;
pub use inspect_business::*;
pub use search::*;
