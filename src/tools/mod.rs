// Text cleanup shared by the table parser
pub mod clean;

pub mod group;
pub mod images;
pub mod table;
