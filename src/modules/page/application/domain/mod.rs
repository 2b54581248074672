pub mod revalidate;
pub mod views;
