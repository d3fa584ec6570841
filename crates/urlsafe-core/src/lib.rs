pub mod checker;
pub mod ledger;
pub mod logging;
pub mod probe;
pub mod resolve;
pub mod validate;
