#![allow(missing_docs)]

use vocabscope::{
    ReportAssembler,
    ReportOptions,
    Vocabulary,
    frequency::FrequencyEntry,
    scripts::ScriptClass,
    tokens::is_full_word,
    vocab::io::read_bpe_vocab,
    weighting::WeightingEngine,
};

const VOCAB_TEXT: &str = "\
#version: 0.2
i n
t h
a n</w>
th e</w>
THE</w>
a</w>
xy
ing
ing
1 9
ü ber</w>
при вет</w>
한국
カナ
..
";

fn load() -> Vocabulary {
    read_bpe_vocab(VOCAB_TEXT.as_bytes()).expect("vocab should parse")
}

fn assert_close(
    actual: f64,
    expected: f64,
) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_header_is_discarded() {
    let vocab = load();
    assert_eq!(vocab.len(), 15);
    assert_eq!(vocab.get(0), Some("i n"));
}

#[test]
fn test_full_and_subword_partition() {
    let vocab = load();
    let report = ReportAssembler::default().assemble(&vocab);

    let full = vocab.iter().filter(|t| is_full_word(t)).count();
    assert_eq!(report.full_word_count, full);
    assert_eq!(report.full_word_count, 6);
    assert_eq!(report.full_word_count + report.subword_count, report.total_size);
    assert_eq!(report.full_word_sample[..2], ["a n", "th e"]);
}

#[test]
fn test_duplicates_are_counted() {
    let report = ReportAssembler::default().assemble(&load());
    assert_eq!(report.top_tokens[0], FrequencyEntry::new("ing".to_string(), 2));

    let report = ReportAssembler::default().assemble(&Vocabulary::from_tokens([
        "a</w>", "a</w>", "b</w>",
    ]));
    assert_eq!(report.top_tokens[0], FrequencyEntry::new("a</w>".to_string(), 2));
}

#[test]
fn test_scripts() {
    let report = ReportAssembler::default().assemble(&load());

    // "i n" style merge lines contain a space, so they are not Latin.
    assert_eq!(report.script_count(ScriptClass::Latin), 5);
    assert_eq!(report.script_count(ScriptClass::Korean), 1);
    assert_eq!(report.script_count(ScriptClass::Japanese), 1);
    assert_eq!(report.script_count(ScriptClass::Cyrillic), 0);
    assert_eq!(report.script_count(ScriptClass::Other), 8);
}

#[test]
fn test_affixes_are_subword_only() {
    let report = ReportAssembler::default().assemble(&load());

    assert_eq!(report.top_prefixes[0], FrequencyEntry::new("in".to_string(), 2));
    assert!(report.top_prefixes.iter().all(|e| e.key != "TH"));
}

#[test]
fn test_special_chars_include_markers() {
    let report = ReportAssembler::default().assemble(&load());

    let specials: Vec<(char, usize)> = report
        .top_special_chars
        .iter()
        .map(|e| (e.key, e.count))
        .collect();
    assert_eq!(specials[..3], [('<', 6), ('/', 6), ('>', 6)]);
    assert!(specials.contains(&('.', 2)));
    assert!(specials.contains(&('ü', 1)));
}

#[test]
fn test_weights_match_heuristic() {
    let engine = WeightingEngine::default();
    assert_close(engine.weigh("THE</w>").weight, 1.56);
    assert_close(engine.weigh("a</w>").weight, 1.2);
    assert_close(engine.weigh("xy").weight, 0.8);

    let report = ReportAssembler::default().assemble(&load());
    assert_eq!(report.top_weighted(1)[0].surface, "THE");

    // Duplicate "ing" lines collapse onto a single surface.
    let surfaces = report.weighted_tokens.len();
    assert_eq!(surfaces, report.total_size - 1);
}

#[test]
fn test_empty_vocabulary_is_undefined_not_nan() {
    let vocab = read_bpe_vocab("#version: 0.2\n".as_bytes()).unwrap();
    let report = ReportAssembler::new(ReportOptions::default().with_top_k(5)).assemble(&vocab);

    assert_eq!(report.total_size, 0);
    assert_eq!(report.average_length, None);
    assert_eq!(report.average_weight, None);
    assert!(report.bottom_weighted(5).is_empty());
    assert!(report.histogram_series().iter().all(|s| s.bars.is_empty()));
}

#[cfg(feature = "serde")]
#[test]
fn test_report_serializes() {
    let report = ReportAssembler::default().assemble(&load());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["total_size"], 15);
    assert_eq!(json["case_counts"]["uppercase"], 0);
    assert_eq!(json["script_counts"][0]["key"], "Latin");

    let empty = ReportAssembler::default().assemble(&Vocabulary::default());
    let json = serde_json::to_value(&empty).unwrap();
    assert!(json["average_length"].is_null());
}
