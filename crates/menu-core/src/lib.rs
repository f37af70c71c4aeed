pub mod aggregate;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod ledger;
pub mod meal_table;
pub mod model;
pub mod portion;
pub mod session;
pub mod view_api;
