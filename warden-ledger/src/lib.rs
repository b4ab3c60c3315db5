pub mod impls;
pub mod ledger;
pub mod model;
pub mod time;

pub use ledger::{Ledger, MemberKey};
