
pub mod betting;
pub mod trial;
