//! Terminal UI helpers

mod spinner;

pub use spinner::{create_spinner, finish_spinner};
