//! Aggregate queries over a list of country records.
//!
//! Every query takes the record list explicitly and never mutates it, so any
//! of them can be called repeatedly or from several threads at once.

use crate::models::CountryRecord;
use std::collections::{HashMap, HashSet};

/// Language code used by [`top_german_speaking_country`]
pub const GERMAN: &str = "de";

/// Number of countries in the list
pub fn country_count(records: &[CountryRecord]) -> usize {
    records.len()
}

/// Country codes in list order
pub fn country_codes(records: &[CountryRecord]) -> Vec<&str> {
    records.iter().map(|record| record.country.as_str()).collect()
}

/// The German-speaking country with the most official languages
pub fn top_german_speaking_country(records: &[CountryRecord]) -> Option<&CountryRecord> {
    top_country_speaking(records, GERMAN)
}

/// The country with the most official languages among those speaking `language`.
///
/// Only a strictly greater language count replaces the current pick, so ties
/// go to the record that comes first.
pub fn top_country_speaking<'a>(
    records: &'a [CountryRecord],
    language: &str,
) -> Option<&'a CountryRecord> {
    max_by_language_count(records.iter().filter(|record| record.speaks(language)))
}

/// Every language spoken in the listed countries, without duplicates.
///
/// Languages are ordered by when they are first seen while walking `records`,
/// not by the order of `country_codes`.
pub fn all_languages_of<S: AsRef<str>>(
    records: &[CountryRecord],
    country_codes: &[S],
) -> Vec<String> {
    let wanted: HashSet<&str> = country_codes.iter().map(|code| code.as_ref()).collect();
    let mut seen = HashSet::new();
    let mut languages = Vec::new();

    for record in records
        .iter()
        .filter(|record| wanted.contains(record.country.as_str()))
    {
        for language in &record.languages {
            if seen.insert(language.as_str()) {
                languages.push(language.clone());
            }
        }
    }

    languages
}

/// The country with the most official languages, first one wins on ties
pub fn country_with_most_languages(records: &[CountryRecord]) -> Option<&CountryRecord> {
    max_by_language_count(records.iter())
}

/// The most common official language(s) across all countries.
///
/// All languages sharing the highest count are returned in first-seen order.
pub fn most_common_languages(records: &[CountryRecord]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for language in records.iter().flat_map(|record| &record.languages) {
        let count = counts.entry(language.as_str()).or_insert(0);
        if *count == 0 {
            order.push(language.as_str());
        }
        *count += 1;
    }

    let Some(highest) = counts.values().copied().max() else {
        return Vec::new();
    };

    order
        .into_iter()
        .filter(|language| counts[language] == highest)
        .map(str::to_string)
        .collect()
}

// The running maximum starts at zero, so a record without languages never wins.
fn max_by_language_count<'a>(
    records: impl Iterator<Item = &'a CountryRecord>,
) -> Option<&'a CountryRecord> {
    let mut best: Option<&CountryRecord> = None;
    let mut most = 0;

    for record in records {
        if record.language_count() > most {
            most = record.language_count();
            best = Some(record);
        }
    }

    best
}
