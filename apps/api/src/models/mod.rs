pub mod resume;
pub mod vacancy;
