//! Pure decisions over branch names, descriptions and fetched issues.

pub mod branch;
pub mod description;
pub mod item;
pub mod keys;
pub mod size;
