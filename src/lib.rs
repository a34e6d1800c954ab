pub mod domain;

pub use domain::model::{Address, Person};
pub use domain::ports::{AddressRecord, PersonRecord};
