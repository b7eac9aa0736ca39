pub mod country;
pub mod label;

pub use country::CountryRecord;
pub use label::NumberLabel;
