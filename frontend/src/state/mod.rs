pub mod page;

pub use page::{FormState, LoadState};
