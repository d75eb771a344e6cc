pub mod a001_content_item;
pub mod common;
