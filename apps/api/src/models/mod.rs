pub mod guidance;
pub mod matching;
pub mod profile;
pub mod scholarship;
pub mod user;
