pub mod entities;
pub mod reading_time;
