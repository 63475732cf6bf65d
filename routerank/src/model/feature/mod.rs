mod feature_extractor;

pub use feature_extractor::{extract, extract_with_warnings};
