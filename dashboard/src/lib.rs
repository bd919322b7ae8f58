pub mod aggregate;
pub mod client;
pub mod error;
pub mod form;
pub mod join;
pub mod model;
pub mod select;
pub mod view;
