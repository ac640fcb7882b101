//! # Report Assembler

use strum::IntoEnumIterator;

use crate::frequency::{FrequencyAnalyzer, FrequencyTable};
use crate::report::{AnalysisReport, CaseTally, ReportOptions};
use crate::scripts::{ScriptClass, ScriptClassifier};
use crate::tokens::{is_all_lowercase, is_all_uppercase, split_full_words, strip_marker};
use crate::vocab::Vocabulary;
use crate::weighting::WeightingEngine;

/// Run `a` and `b`, in parallel when asked and able.
fn join<A, B, RA, RB>(
    parallel: bool,
    a: A,
    b: B,
) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    #[cfg(feature = "rayon")]
    {
        if parallel {
            return rayon::join(a, b);
        }
    }
    #[cfg(not(feature = "rayon"))]
    let _ = parallel;

    (a(), b())
}

/// Drives the classifiers, analyzers, and weighting engine over a
/// [`Vocabulary`] to build an [`AnalysisReport`].
#[derive(Debug, Clone)]
pub struct ReportAssembler {
    options: ReportOptions,
    scripts: ScriptClassifier,
    frequency: FrequencyAnalyzer,
    weighting: WeightingEngine,
}

impl Default for ReportAssembler {
    fn default() -> Self {
        Self::new(ReportOptions::default())
    }
}

impl ReportAssembler {
    /// Create an assembler with the default script buckets.
    pub fn new(options: ReportOptions) -> Self {
        Self {
            scripts: ScriptClassifier::default(),
            frequency: FrequencyAnalyzer::new(options.frequency),
            weighting: WeightingEngine::new(options.weighting.clone()),
            options,
        }
    }

    /// Replace the script classifier.
    pub fn with_script_classifier(
        self,
        scripts: ScriptClassifier,
    ) -> Self {
        Self { scripts, ..self }
    }

    /// The report options.
    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// The script classifier.
    pub fn script_classifier(&self) -> &ScriptClassifier {
        &self.scripts
    }

    /// The weighting engine.
    pub fn weighting_engine(&self) -> &WeightingEngine {
        &self.weighting
    }

    /// Tally every surface into its script bucket, zeros included.
    pub fn script_tally(
        &self,
        vocab: &Vocabulary,
    ) -> FrequencyTable<ScriptClass> {
        let mut script_counts = FrequencyTable::with_capacity(ScriptClass::iter().len());
        for class in ScriptClass::iter() {
            script_counts.add(class, 0);
        }
        for token in vocab.iter() {
            script_counts.increment(self.scripts.classify(strip_marker(token)));
        }
        script_counts
    }

    /// Partition the raw tokens by case.
    pub fn case_tally(
        &self,
        vocab: &Vocabulary,
    ) -> CaseTally {
        let lowercase = vocab.iter().filter(|t| is_all_lowercase(t)).count();
        let uppercase = vocab.iter().filter(|t| is_all_uppercase(t)).count();
        CaseTally {
            lowercase,
            uppercase,
            mixed: vocab.len() - lowercase - uppercase,
        }
    }

    /// Build the report.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, vocab)))]
    pub fn assemble(
        &self,
        vocab: &Vocabulary,
    ) -> AnalysisReport {
        let options = &self.options;
        let parallel = options.parallel;
        log::info!("analyzing {} tokens", vocab.len());

        let (full_words, subwords) = split_full_words(vocab.iter());

        let ((token_counts, length_counts), ((prefix_counts, suffix_counts), special_counts)) =
            join(
                parallel,
                || {
                    join(
                        parallel,
                        || self.frequency.token_frequency(vocab.iter()),
                        || self.frequency.length_distribution(vocab.iter()),
                    )
                },
                || {
                    join(
                        parallel,
                        || self.frequency.affix_frequency(subwords.iter().copied()),
                        || self.frequency.special_char_frequency(vocab.iter()),
                    )
                },
            );

        let (weighted, (script_counts, case_counts)) = join(
            parallel,
            || self.weighting.weigh_all(vocab.iter()),
            || join(parallel, || self.script_tally(vocab), || self.case_tally(vocab)),
        );

        let top_tokens = token_counts.top_n(options.top_tokens);
        if let Some(top) = top_tokens.first()
            && top.count > 1
        {
            log::warn!(
                "vocabulary has duplicate tokens: {:?} appears {} times",
                top.key,
                top.count
            );
        }

        let mut length_distribution = length_counts.into_entries();
        length_distribution.sort_by_key(|e| e.key);

        let numeric_tokens = self.frequency.numeric_tokens(vocab.iter());

        let report = AnalysisReport {
            total_size: vocab.len(),
            full_word_count: full_words.len(),
            subword_count: subwords.len(),
            full_word_sample: sample(&full_words, options.word_sample),
            subword_sample: sample(&subwords, options.word_sample),
            average_length: self.frequency.average_length(vocab.iter()),
            length_distribution,
            top_tokens,
            top_prefixes: prefix_counts.top_n(options.top_affixes),
            top_suffixes: suffix_counts.top_n(options.top_affixes),
            top_special_chars: special_counts.top_n(options.top_special_chars),
            special_chars: special_counts.ranked(),
            distinct_special_chars: special_counts.len(),
            special_char_total: special_counts.total(),
            case_counts,
            script_counts: script_counts.into_entries(),
            numeric_token_count: numeric_tokens.len(),
            numeric_token_sample: sample(&numeric_tokens, options.number_sample),
            weighted_tokens: weighted.sorted_descending(),
            average_weight: weighted.average_weight(),
        };

        log::debug!(
            "full words: {}, subwords: {}, weighted surfaces: {}",
            report.full_word_count,
            report.subword_count,
            report.weighted_tokens.len()
        );
        report
    }
}

fn sample(
    items: &[&str],
    n: usize,
) -> Vec<String> {
    items.iter().take(n).map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Vocabulary {
        Vocabulary::from_tokens([
            "i", "n", "th", "the</w>", "THE</w>", "a</w>", "xy", "ing", "2019</w>", "привет</w>",
            "日本", "@@", "na\u{ef}ve</w>",
        ])
    }

    #[test]
    fn test_counts_sum() {
        let report = ReportAssembler::default().assemble(&vocab());

        assert_eq!(report.total_size, 13);
        assert_eq!(report.full_word_count, 6);
        assert_eq!(report.subword_count, 7);
        assert_eq!(report.full_word_count + report.subword_count, report.total_size);

        let cases = report.case_counts;
        assert_eq!(cases.lowercase + cases.uppercase + cases.mixed, report.total_size);

        let scripts: usize = report.script_counts.iter().map(|e| e.count).sum();
        assert_eq!(scripts, report.total_size);
    }

    #[test]
    fn test_case_tally() {
        let report = ReportAssembler::default().assemble(&vocab());

        // Uppercase needs no lowercase chars at all; "THE</w>" has a `w`.
        assert_eq!(report.case_counts.uppercase, 0);
        // The marker makes "2019</w>" lowercase; THE</w>, 日本, and @@ are mixed.
        assert_eq!(report.case_counts.mixed, 3);
        assert_eq!(report.case_counts.lowercase, 10);
    }

    #[test]
    fn test_script_tally() {
        let report = ReportAssembler::default().assemble(&vocab());
        let counts: Vec<(ScriptClass, usize)> = report
            .script_counts
            .iter()
            .map(|e| (e.key, e.count))
            .collect();

        assert_eq!(
            counts,
            vec![
                (ScriptClass::Latin, 8),
                (ScriptClass::Cyrillic, 1),
                (ScriptClass::Chinese, 1),
                (ScriptClass::Japanese, 0),
                (ScriptClass::Korean, 0),
                (ScriptClass::Other, 3),
            ]
        );
    }

    #[test]
    fn test_samples_and_numbers() {
        let options = ReportOptions::default().with_samples(2, 5);
        let report = ReportAssembler::new(options).assemble(&vocab());

        assert_eq!(report.full_word_sample, vec!["the", "THE"]);
        assert_eq!(report.subword_sample, vec!["i", "n"]);
        assert_eq!(report.numeric_token_count, 1);
        assert_eq!(report.numeric_token_sample, vec!["2019</w>"]);
    }

    #[test]
    fn test_weights() {
        let report = ReportAssembler::default().assemble(&vocab());

        let top = &report.top_weighted(1)[0];
        assert_eq!(top.surface, "THE");
        assert!((top.weight - 1.56).abs() < 1e-9);

        let bottom = report.bottom_weighted(1);
        assert_eq!(bottom[0].surface, "i");
        assert!((bottom[0].weight - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_empty_vocabulary() {
        let report = ReportAssembler::default().assemble(&Vocabulary::default());

        assert_eq!(report.total_size, 0);
        assert_eq!(report.full_word_count, 0);
        assert_eq!(report.subword_count, 0);
        assert_eq!(report.average_length, None);
        assert_eq!(report.average_weight, None);
        assert!(report.top_tokens.is_empty());
        assert!(report.weighted_tokens.is_empty());
        assert_eq!(report.case_counts, CaseTally::default());
        assert_eq!(report.script_counts.len(), 6);
        assert!(report.script_counts.iter().all(|e| e.count == 0));
    }

    #[test]
    fn test_special_char_series_is_complete() {
        let punctuation: Vec<String> = (0x21u8..=0x7e)
            .map(char::from)
            .filter(|c| c.is_ascii_punctuation())
            .map(String::from)
            .collect();
        assert_eq!(punctuation.len(), 32);

        let report = ReportAssembler::default().assemble(&Vocabulary::from_tokens(punctuation));
        assert_eq!(report.top_special_chars.len(), 20);
        assert_eq!(report.distinct_special_chars, 32);
        assert_eq!(report.special_chars.len(), 32);

        let series = report.histogram_series();
        let chars = &series[1];
        assert_eq!(chars.name, "special_chars");
        assert_eq!(chars.bars.len(), report.distinct_special_chars);
        let bar_sum: u64 = chars.bars.iter().map(|(_, v)| *v).sum();
        assert_eq!(bar_sum as usize, report.special_char_total);
        assert_eq!(chars.bars[0].0, "!");
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let vocab = vocab();
        let sequential = ReportAssembler::default().assemble(&vocab);
        let parallel =
            ReportAssembler::new(ReportOptions::default().with_parallel(true)).assemble(&vocab);
        assert_eq!(sequential, parallel);
    }
}
