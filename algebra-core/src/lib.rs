pub mod monoid;
pub mod pairs;
