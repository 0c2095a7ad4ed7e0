pub mod reaction;
pub mod species;
