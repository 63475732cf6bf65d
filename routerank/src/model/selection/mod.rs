mod route_selector;

pub use route_selector::{select, Selection};
