pub mod aggregator;
pub mod loader;
pub mod report;

pub use aggregator::{
    all_languages_of, country_codes, country_count, country_with_most_languages,
    most_common_languages, top_country_speaking, top_german_speaking_country,
};
pub use loader::{load_records, parse_records, sample_records};
pub use report::LanguageReport;
