pub mod filter;

pub use filter::{create_online_filter, OnlineRecursiveFilter};
