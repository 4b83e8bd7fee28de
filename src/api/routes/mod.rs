pub mod competitions;
pub mod matches;
pub mod standings;
