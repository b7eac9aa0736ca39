use crate::languages::aggregator;
use crate::models::CountryRecord;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// Results of every aggregate query, computed once for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageReport {
    pub country_count: usize,
    pub country_codes: Vec<String>,
    pub top_german_speaking_country: Option<CountryRecord>,
    pub listed_countries: Vec<String>,
    pub languages_of_listed_countries: Vec<String>,
    pub country_with_most_languages: Option<CountryRecord>,
    pub most_common_languages: Vec<String>,
}

impl LanguageReport {
    pub fn build<S: AsRef<str>>(records: &[CountryRecord], listed_countries: &[S]) -> Self {
        Self {
            country_count: aggregator::country_count(records),
            country_codes: aggregator::country_codes(records)
                .into_iter()
                .map(str::to_string)
                .collect(),
            top_german_speaking_country: aggregator::top_german_speaking_country(records)
                .cloned(),
            listed_countries: listed_countries
                .iter()
                .map(|code| code.as_ref().to_string())
                .collect(),
            languages_of_listed_countries: aggregator::all_languages_of(
                records,
                listed_countries,
            ),
            country_with_most_languages: aggregator::country_with_most_languages(records)
                .cloned(),
            most_common_languages: aggregator::most_common_languages(records),
        }
    }

    /// One line per query
    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Number of countries in the world: {}", self.country_count)?;
        writeln!(
            out,
            "Country with the most official languages that also speaks German: {}",
            render_record(self.top_german_speaking_country.as_ref())?
        )?;
        writeln!(
            out,
            "All official languages in listed countries ({}): {}",
            self.listed_countries.join(", "),
            self.languages_of_listed_countries.join(", ")
        )?;
        writeln!(
            out,
            "Country with the most official languages: {}",
            render_record(self.country_with_most_languages.as_ref())?
        )?;
        writeln!(
            out,
            "Most common official languages: {}",
            self.most_common_languages.join(", ")
        )?;
        Ok(())
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}

fn render_record(record: Option<&CountryRecord>) -> Result<String> {
    match record {
        Some(record) => Ok(serde_json::to_string(record)?),
        None => Ok("none".to_string()),
    }
}
