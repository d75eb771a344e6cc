pub mod a001_content_item;
