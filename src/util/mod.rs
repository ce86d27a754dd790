pub mod markup;
pub mod similarity;
