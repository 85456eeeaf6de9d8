use sentiscope::batch::BatchReport;
use sentiscope::table::read_table;
use sentiscope::utils::io::{
    RESULTS_FILE_NAME, ResultRow, export_report_to_json, export_results_to_csv,
};
use sentiscope::{
    AnalysisConfig, Label, SentimentError, analyze_csv_file, analyze_table, analyze_text,
    analyze_texts,
};
use std::fs;
use tempfile::tempdir;

#[test]
fn single_text_positive_and_negative() {
    let positive = analyze_text("I love this product! It is amazing.").unwrap();
    assert_eq!(positive.label, Label::Positive);
    assert_eq!(positive.symbol(), "😊");

    let negative = analyze_text("This is the worst experience ever.").unwrap();
    assert_eq!(negative.label, Label::Negative);
    assert_eq!(negative.symbol(), "😞");
}

#[test]
fn single_text_rejects_blank_input() {
    let err = analyze_text("   \n").unwrap_err();
    assert!(matches!(err, SentimentError::EmptyInput));
}

#[test]
fn multiple_texts_keep_order_and_full_text() {
    let long = "great ".repeat(40);
    let texts = vec!["Terrible service", "", long.as_str()];
    let report = analyze_texts(&texts, &AnalysisConfig::sequential()).unwrap();

    assert_eq!(report.items.len(), 2);
    assert_eq!(report.items[0].label(), Label::Negative);
    assert_eq!(report.items[1].index, 2);
    assert_eq!(report.items[1].source_text, long);
    assert_eq!(report.summary.total, 2);
    assert!(report.word_frequencies.is_none());
    assert_eq!(report.series.len(), 2);
}

#[test]
fn csv_example_yields_two_items_in_row_order() {
    let data = "id,avis\n1,Great!\n2,\n3,Bad.\n";
    let table = read_table(data.as_bytes()).unwrap();
    let report = analyze_table(&table, &AnalysisConfig::sequential()).unwrap();

    assert_eq!(report.text_column.as_deref(), Some("avis"));
    assert_eq!(report.items.len(), 2);
    assert_eq!(report.items[0].source_text, "Great!");
    assert_eq!(report.items[0].index, 0);
    assert_eq!(report.items[0].label(), Label::Positive);
    assert_eq!(report.items[1].source_text, "Bad.");
    assert_eq!(report.items[1].index, 2);
    assert_eq!(report.items[1].label(), Label::Negative);

    let summary = &report.summary;
    assert_eq!(summary.total, 2);
    assert_eq!(summary.count(Label::Positive), 1);
    assert_eq!(summary.count(Label::Negative), 1);
    assert_eq!(summary.count(Label::Neutral), 0);

    let words = report.word_frequencies.as_ref().unwrap();
    assert_eq!(words.get("great"), Some(&1));
    assert_eq!(words.get("bad"), Some(&1));
}

#[test]
fn csv_na_markers_are_not_scored() {
    let data = "avis\nGreat!\nN/A\nnull\nNaN\n";
    let table = read_table(data.as_bytes()).unwrap();
    let report = analyze_table(&table, &AnalysisConfig::sequential()).unwrap();

    assert_eq!(report.items.len(), 1);
    assert_eq!(report.items[0].source_text, "Great!");
    assert_eq!(report.summary.total, 1);
    assert_eq!(report.summary.count(Label::Neutral), 0);

    let words = report.word_frequencies.as_ref().unwrap();
    assert_eq!(words.len(), 1);
    assert_eq!(words.get("great"), Some(&1));
}

#[test]
fn csv_without_text_column_is_rejected() {
    let table = read_table("id,date\n1,2024-01-01\n".as_bytes()).unwrap();
    let err = analyze_table(&table, &AnalysisConfig::sequential()).unwrap_err();
    match err {
        SentimentError::NoTextColumnFound { columns } => {
            assert_eq!(columns, vec!["id", "date"]);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn csv_truncates_display_text_only() {
    let long = format!("{} awful", "x".repeat(120));
    let data = format!("Review\n\"{}\"\n", long);
    let table = read_table(data.as_bytes()).unwrap();
    let report = analyze_table(&table, &AnalysisConfig::sequential()).unwrap();

    let item = &report.items[0];
    assert_eq!(item.source_text.chars().count(), 103);
    assert!(item.source_text.ends_with("..."));
    assert_eq!(item.label(), Label::Negative);
}

#[test]
fn word_cloud_skipped_when_corpus_is_noise() {
    let data = "text\n@someone\nhttp://example.com\n#tag !!!\n";
    let table = read_table(data.as_bytes()).unwrap();
    let report = analyze_table(&table, &AnalysisConfig::sequential()).unwrap();

    assert_eq!(report.items.len(), 3);
    assert!(report.word_frequencies.is_none());
}

#[test]
fn word_cloud_respects_top_n_and_stopwords() {
    let data = "comment\nthe good the bad\ngood good ugly\n";
    let table = read_table(data.as_bytes()).unwrap();
    let config = AnalysisConfig::sequential()
        .with_stopword_filter(true)
        .with_word_cloud_top(2);
    let report = analyze_table(&table, &config).unwrap();

    let words = report.word_frequencies.unwrap();
    assert_eq!(words.len(), 2);
    assert_eq!(words.get("good"), Some(&3));
    assert!(words.get("the").is_none());
}

#[test]
fn parallel_config_matches_sequential() {
    let texts: Vec<String> = (0..50)
        .map(|i| {
            if i % 3 == 0 {
                format!("{} was not good", i)
            } else {
                format!("{} was very nice!", i)
            }
        })
        .collect();

    let sequential = analyze_texts(&texts, &AnalysisConfig::sequential()).unwrap();
    let parallel = analyze_texts(&texts, &AnalysisConfig::new().with_num_threads(3)).unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn exports_csv_and_json() {
    let dir = tempdir().unwrap();
    let csv_in = dir.path().join("reviews.csv");
    fs::write(
        &csv_in,
        "id,Texte,date\n1,\"Nice, really nice\",x\n2,It was horrible,y\n3,,z\n",
    )
    .unwrap();

    let report = analyze_csv_file(&csv_in, &AnalysisConfig::sequential()).unwrap();
    assert_eq!(report.text_column.as_deref(), Some("Texte"));

    let csv_out = dir.path().join("results.csv");
    export_results_to_csv(&report.items, &csv_out).unwrap();
    let mut reader = csv::Reader::from_path(&csv_out).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, vec!["text", "label", "polarity", "subjectivity"]);
    let rows: Vec<ResultRow> = reader.deserialize().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].text, "Nice, really nice");
    assert_eq!(rows[0].label, Label::Positive);
    assert_eq!(rows[0].polarity, report.items[0].result.polarity);
    assert_eq!(rows[1].label, Label::Negative);

    let json_out = dir.path().join("report.json");
    export_report_to_json(&report, &json_out).unwrap();
    let parsed: BatchReport = serde_json::from_str(&fs::read_to_string(&json_out).unwrap()).unwrap();
    assert_eq!(parsed.items.len(), 2);
    assert_eq!(parsed.summary.total, report.summary.total);
    assert_eq!(parsed.summary.counts, report.summary.counts);
    assert_eq!(parsed.text_column.as_deref(), Some("Texte"));
}

#[test]
fn default_results_file_is_written_as_csv() {
    let dir = tempdir().unwrap();
    let csv_in = dir.path().join("reviews.csv");
    fs::write(&csv_in, "review\nLovely staff\nAwful food\n").unwrap();

    let report = analyze_csv_file(&csv_in, &AnalysisConfig::sequential()).unwrap();
    let csv_out = dir.path().join(RESULTS_FILE_NAME);
    export_results_to_csv(&report.items, &csv_out).unwrap();

    assert_eq!(RESULTS_FILE_NAME, "sentiment_analysis_results.csv");
    let mut reader = csv::Reader::from_path(&csv_out).unwrap();
    let rows: Vec<ResultRow> = reader.deserialize().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].text, "Lovely staff");
    assert_eq!(rows[1].label, Label::Negative);
}

#[test]
fn missing_csv_file_reports_io_error() {
    let dir = tempdir().unwrap();
    let err = analyze_csv_file(&dir.path().join("nope.csv"), &AnalysisConfig::sequential())
        .unwrap_err();
    assert!(matches!(err, SentimentError::Io(_)));
}
