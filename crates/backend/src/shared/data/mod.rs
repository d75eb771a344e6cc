pub mod db;
pub mod key_value;
