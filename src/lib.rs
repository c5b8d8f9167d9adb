pub mod common;
pub mod estree;
