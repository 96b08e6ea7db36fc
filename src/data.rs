// src/data.rs
//
// Question bank loader: fetch the bank as JSON over HTTP, then sample a
// bounded random subset for one quiz run. No caching; every load is
// independent and may yield a different subset and order.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use thiserror::Error;

use crate::model::QuestionRecord;
use crate::shuffle::fisher_yates;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP error! Status: {0}")]
    Status(u16),
    #[error("invalid questions data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid or empty questions data")]
    EmptyBank,
}

/// Parse a bank payload: a non-empty JSON array of question records.
pub fn parse_bank(payload: &str) -> Result<Vec<QuestionRecord>, LoadError> {
    let bank: Vec<QuestionRecord> = serde_json::from_str(payload)?;
    if bank.is_empty() {
        return Err(LoadError::EmptyBank);
    }
    Ok(bank)
}

/// Fetch the full bank from `url`, with a cache-busting timestamp query
/// parameter so intermediaries never serve a stale bank.
pub fn fetch_bank(url: &str) -> Result<Vec<QuestionRecord>, LoadError> {
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let sep = if url.contains('?') { '&' } else { '?' };
    let busted = format!("{url}{sep}ts={ts}");

    log::debug!("Loading questions from {busted}");
    let response = reqwest::blocking::get(&busted)?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status(status.as_u16()));
    }
    let bank = parse_bank(&response.text()?)?;
    log::info!("Fetched bank of {} questions", bank.len());
    Ok(bank)
}

/// Shuffle a copy of the full bank and keep a prefix of
/// `min(max, bank.len())` records as the session's active set.
pub fn sample_bank(
    bank: Vec<QuestionRecord>,
    max: usize,
    rng: &mut impl Rng,
) -> Vec<QuestionRecord> {
    let mut pool = bank;
    fisher_yates(&mut pool, rng);
    pool.truncate(max.min(pool.len()));
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn record(n: usize) -> QuestionRecord {
        QuestionRecord {
            question: format!("Question {n}?"),
            options: vec!["A".into(), "B".into()],
            correct: vec!["A".into()],
        }
    }

    #[test]
    fn parses_a_valid_bank() {
        let payload = r#"[
            {"question": "Capital of France?",
             "options": ["Paris", "Rome", "Berlin"],
             "correct": ["Paris"]}
        ]"#;
        let bank = parse_bank(payload).expect("valid bank");
        assert_eq!(bank.len(), 1);
        assert_eq!(bank[0].question, "Capital of France?");
        assert_eq!(bank[0].correct, vec!["Paris".to_string()]);
    }

    #[test]
    fn empty_array_is_a_load_error() {
        assert!(matches!(parse_bank("[]"), Err(LoadError::EmptyBank)));
    }

    #[test]
    fn malformed_payloads_are_load_errors() {
        assert!(matches!(parse_bank("not json"), Err(LoadError::Parse(_))));
        // An object instead of an array is malformed too.
        assert!(matches!(
            parse_bank(r#"{"question": "?"}"#),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn sampling_respects_the_bound() {
        let mut rng = StdRng::seed_from_u64(3);
        let bank: Vec<QuestionRecord> = (0..20).map(record).collect();
        let active = sample_bank(bank.clone(), 5, &mut rng);
        assert_eq!(active.len(), 5);
        for q in &active {
            assert!(bank.contains(q), "sampled question not from the bank");
        }
    }

    #[test]
    fn small_banks_are_taken_whole() {
        let mut rng = StdRng::seed_from_u64(3);
        let bank: Vec<QuestionRecord> = (0..3).map(record).collect();
        let active = sample_bank(bank, 50, &mut rng);
        assert_eq!(active.len(), 3);
    }

    #[test]
    fn sampling_never_duplicates() {
        let mut rng = StdRng::seed_from_u64(11);
        let bank: Vec<QuestionRecord> = (0..30).map(record).collect();
        let active = sample_bank(bank, 30, &mut rng);
        let mut texts: Vec<&str> = active.iter().map(|q| q.question.as_str()).collect();
        texts.sort_unstable();
        texts.dedup();
        assert_eq!(texts.len(), active.len());
    }
}
