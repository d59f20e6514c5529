pub mod annotations;
pub mod utils;
