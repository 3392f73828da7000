use super::NarrativeAnalyzer;
use crate::error::EnrichmentError;
use crate::types::intake::Industry;
use crate::types::profile::NarrativeAssessment;

const SUMMARY_STRONG: &str = "The product description effectively communicates a unique value proposition with clear market positioning.";
const SUMMARY_PROMISING: &str = "The narrative shows potential but could benefit from more clarity on target market and competitive advantages.";
const SUMMARY_THIN: &str = "The product description lacks sufficient detail to fully evaluate its market potential and uniqueness.";

#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicNarrativeAnalyzer;

#[derive(Debug, Clone, Copy, PartialEq)]
struct TextStats {
    words: usize,
    avg_word_length: f64,
    sentences: usize,
}

fn text_stats(description: &str) -> Option<TextStats> {
    let words = description.split_whitespace().count();
    if words == 0 {
        return None;
    }
    let avg_word_length = description.chars().count() as f64 / words as f64;
    Some(TextStats {
        words,
        avg_word_length,
        sentences: count_terminator_runs(description),
    })
}

fn count_terminator_runs(text: &str) -> usize {
    let mut runs = 0;
    let mut in_run = false;
    for ch in text.chars() {
        let terminator = matches!(ch, '.' | '!' | '?');
        if terminator && !in_run {
            runs += 1;
        }
        in_run = terminator;
    }
    runs
}

fn to_score(value: f64) -> u32 {
    value.round().clamp(0.0, 100.0) as u32
}

pub fn summary_for(overall_score: u32) -> &'static str {
    if overall_score >= 75 {
        SUMMARY_STRONG
    } else if overall_score >= 50 {
        SUMMARY_PROMISING
    } else {
        SUMMARY_THIN
    }
}

impl NarrativeAnalyzer for HeuristicNarrativeAnalyzer {
    fn analyze(
        &self,
        product_description: &str,
        industry: Industry,
    ) -> Result<NarrativeAssessment, EnrichmentError> {
        let stats = text_stats(product_description).ok_or(EnrichmentError::EmptyDescription)?;
        tracing::debug!(
            %industry,
            words = stats.words,
            sentences = stats.sentences,
            "analyzing product narrative"
        );

        let words = stats.words as f64;
        let sentences = stats.sentences as f64;

        let clarity = to_score(100.0 - (stats.avg_word_length - 5.5).abs() * 10.0);
        let innovation = to_score(words / 2.0 + sentences * 5.0);
        let market_fit = to_score(f64::from(clarity) * 0.4 + f64::from(innovation) * 0.6);
        let professionalism = to_score(f64::from(clarity) * 0.6 + sentences * 2.0);
        let overall_score = to_score(
            f64::from(clarity) * 0.25
                + f64::from(innovation) * 0.35
                + f64::from(market_fit) * 0.25
                + f64::from(professionalism) * 0.15,
        );

        Ok(NarrativeAssessment {
            clarity,
            innovation,
            market_fit,
            professionalism,
            overall_score,
            summary: summary_for(overall_score).to_string(),
        })
    }
}
