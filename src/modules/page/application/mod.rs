pub mod domain;
pub mod page_use_cases;
pub mod ports;
pub mod service;
