pub mod clean;
pub mod field;
pub mod infobox;
pub mod normalize;
pub mod search;
pub mod tables;
