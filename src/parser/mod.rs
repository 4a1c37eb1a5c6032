pub mod markdown;

pub use markdown::{derive_heading, section_heading, title_line, MergedDocument};
