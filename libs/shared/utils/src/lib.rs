pub mod dates;
pub mod extractor;
pub mod files;
pub mod state;
pub mod test_utils;
pub mod validation;
