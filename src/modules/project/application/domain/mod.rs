pub mod entities;
pub mod tech_stack;
