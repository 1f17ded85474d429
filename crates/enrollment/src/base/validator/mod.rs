pub mod collection;
pub mod len;
pub mod num;
pub mod text;
pub mod time;
pub mod web;
