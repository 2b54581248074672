pub mod blog;
pub mod experience;
pub mod github;
pub mod page;
pub mod profile;
pub mod project;
pub mod skill;
