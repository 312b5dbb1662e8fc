//! Synthetic CORD-19 metadata used when the real `metadata.csv` is absent.
//!
//! Generation is fully deterministic: the ChaCha20 stream is seeded with a
//! fixed constant and the pooled columns are drawn column by column (all
//! titles, then all abstracts, then all journals).

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand_chacha::ChaCha20Rng;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use serde::Serialize;

use crate::domain::AppError;

pub const SAMPLE_SIZE: usize = 1000;
pub const SAMPLE_SEED: u64 = 42;

pub const COLUMNS: [&str; 6] = ["cord_uid", "title", "abstract", "authors", "journal", "publish_time"];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const RANGE_START: NaiveDate = match NaiveDate::from_ymd_opt(2018, 1, 1) {
    Some(date) => date,
    None => panic!("invalid sample range start"),
};

const RANGE_END: NaiveDate = match NaiveDate::from_ymd_opt(2023, 12, 31) {
    Some(date) => date,
    None => panic!("invalid sample range end"),
};

pub const TITLES: [&str; 10] = [
    "COVID-19 transmission dynamics in healthcare settings",
    "SARS-CoV-2 vaccine efficacy and safety analysis",
    "Impact of pandemic on mental health outcomes",
    "Respiratory symptoms in coronavirus patients",
    "Public health measures during COVID-19 outbreak",
    "Clinical characteristics of severe COVID-19 cases",
    "Epidemiological investigation of coronavirus spread",
    "Treatment protocols for COVID-19 patients",
    "Long-term effects of SARS-CoV-2 infection",
    "Prevention strategies for pandemic control",
];

pub const ABSTRACTS: [&str; 5] = [
    "This study investigates the transmission patterns of COVID-19 in various healthcare settings and provides recommendations for infection control.",
    "We analyzed vaccine efficacy data from multiple clinical trials to assess the safety and effectiveness of COVID-19 vaccines.",
    "The pandemic has significantly impacted mental health worldwide. This research examines the psychological effects and coping strategies.",
    "Clinical analysis of respiratory symptoms in COVID-19 patients, including severity assessment and treatment outcomes.",
    "Evaluation of public health interventions implemented during the COVID-19 pandemic and their effectiveness in controlling spread.",
];

pub const JOURNALS: [&str; 10] = [
    "PLOS ONE",
    "Nature Communications",
    "The Lancet",
    "NEJM",
    "Science",
    "medRxiv",
    "bioRxiv",
    "Scientific Reports",
    "BMC Medicine",
    "Cell",
];

const AUTHOR_COUNT: usize = 5;

/// One row of the sample dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleRecord {
    pub cord_uid: String,
    pub title: &'static str,
    #[serde(rename = "abstract")]
    pub abstract_text: &'static str,
    pub authors: String,
    pub journal: &'static str,
    pub publish_time: String,
}

/// Generate `count` sample records from the given seed.
pub fn generate(count: usize, seed: u64) -> Vec<SampleRecord> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);

    let titles = choose_many(&mut rng, &TITLES, count);
    let abstracts = choose_many(&mut rng, &ABSTRACTS, count);
    let journals = choose_many(&mut rng, &JOURNALS, count);
    let times = publish_times(count);

    (0..count)
        .map(|i| SampleRecord {
            cord_uid: format!("cord_{:06}", i),
            title: titles[i],
            abstract_text: abstracts[i],
            authors: authors_for(i),
            journal: journals[i],
            publish_time: times[i].format(TIMESTAMP_FORMAT).to_string(),
        })
        .collect()
}

/// Encode records as CSV with a header row and `\n` terminators.
pub fn to_csv(records: &[SampleRecord]) -> Result<Vec<u8>, AppError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }

    writer.into_inner().map_err(|err| AppError::Io(err.into_error()))
}

/// The default 1000-row dataset, already encoded.
pub fn default_sample_csv() -> Result<Vec<u8>, AppError> {
    to_csv(&generate(SAMPLE_SIZE, SAMPLE_SEED))
}

/// `count` evenly spaced instants across the sample range, both ends included.
///
/// Offsets are truncated to whole seconds.
pub fn publish_times(count: usize) -> Vec<NaiveDateTime> {
    let start = RANGE_START.and_time(NaiveTime::MIN);
    let end = RANGE_END.and_time(NaiveTime::MIN);

    if count <= 1 {
        return std::iter::repeat_n(start, count).collect();
    }

    let span = (end - start).num_seconds();
    let steps = (count - 1) as i64;
    (0..count as i64).map(|i| start + Duration::seconds(span * i / steps)).collect()
}

fn authors_for(index: usize) -> String {
    (0..3)
        .map(|offset| format!("Author{}", (index + offset) % AUTHOR_COUNT + 1))
        .collect::<Vec<_>>()
        .join("; ")
}

fn choose_many<T: Copy>(rng: &mut ChaCha20Rng, pool: &[T], count: usize) -> Vec<T> {
    (0..count).map(|_| pool[uniform_index(rng, pool.len())]).collect()
}

// Multiply-shift maps a 64-bit draw onto [0, len).
fn uniform_index(rng: &mut ChaCha20Rng, len: usize) -> usize {
    ((u128::from(rng.next_u64()) * len as u128) >> 64) as usize
}
