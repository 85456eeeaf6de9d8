use log::{error, info, warn};
use sentiscope::batch::BatchReport;
use sentiscope::utils::io::{RESULTS_FILE_NAME, export_report_to_json, export_results_to_csv};
use sentiscope::{AnalysisConfig, Label, analyze_csv_file, analyze_text, analyze_texts, version};
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

fn print_usage(program: &str) {
    eprintln!("Usage:");
    eprintln!("  {} text <text>", program);
    eprintln!("  {} multi <file> [output_path] [num_threads]", program);
    eprintln!("  {} csv <file.csv> [output_path] [num_threads]", program);
    eprintln!("  csv mode writes {} when no output_path is given", RESULTS_FILE_NAME);
    eprintln!("Version: {}", version());
}

/// argv[0], or the crate name when the OS hands over an empty argv.
fn program_name(args: &[String]) -> &str {
    args.first().map_or("sentiscope", String::as_str)
}

fn main() -> ExitCode {
    // Initialize logger
    if std::env::var_os("RUST_LOG").is_none() {
        unsafe {
            std::env::set_var("RUST_LOG", "info");
        }
    }
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let program = program_name(&args);

    if args.len() < 3 {
        error!("Not enough arguments provided");
        print_usage(program);
        return ExitCode::FAILURE;
    }

    info!("SentimentScope v{}", version());
    sentiscope::init();

    let mode = args[1].as_str();
    let input = args[2].as_str();
    let output_path = args.get(3).map(Path::new);

    let num_threads = match args.get(4) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            let cpu_count = num_cpus::get();
            warn!(
                "Invalid thread count provided, defaulting to {} CPUs",
                cpu_count
            );
            cpu_count
        }),
        None => num_cpus::get(),
    };
    let config = AnalysisConfig::new().with_num_threads(num_threads);

    let start_time = Instant::now();

    let outcome = match mode {
        "text" => run_text(input),
        "multi" => run_multi(Path::new(input), output_path, &config),
        "csv" => run_csv(Path::new(input), output_path, &config),
        _ => {
            error!("Unsupported mode: {}", mode);
            print_usage(program);
            return ExitCode::FAILURE;
        }
    };

    match outcome {
        Ok(()) => {
            info!("Analysis completed in {:.2?}", start_time.elapsed());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_text(text: &str) -> sentiscope::Result<()> {
    let result = analyze_text(text)?;
    println!("Sentiment:    {} {}", result.symbol(), result.label);
    println!("Polarity:     {:.2}", result.polarity);
    println!("Subjectivity: {:.2}", result.subjectivity);
    Ok(())
}

fn run_multi(
    path: &Path,
    output_path: Option<&Path>,
    config: &AnalysisConfig,
) -> sentiscope::Result<()> {
    info!("Reading texts from {:?}", path);
    let content = fs::read_to_string(path)?;
    let texts: Vec<&str> = content.lines().collect();

    let report = analyze_texts(&texts, config)?;
    if report.is_empty() {
        warn!("No valid text to analyze");
        return Ok(());
    }

    print_report(&report);
    write_report(&report, output_path)
}

fn run_csv(
    path: &Path,
    output_path: Option<&Path>,
    config: &AnalysisConfig,
) -> sentiscope::Result<()> {
    let report = analyze_csv_file(path, config)?;
    if let Some(column) = &report.text_column {
        info!("Column '{}' detected", column);
    }
    if report.is_empty() {
        warn!("No row produced a result");
        return Ok(());
    }

    print_report(&report);
    if let Some(frequencies) = &report.word_frequencies {
        let top = sentiscope::text::top_words(frequencies, 10);
        let words: Vec<String> = top.iter().map(|(w, c)| format!("{}({})", w, c)).collect();
        println!("Top words: {}", words.join(" "));
    }
    // Table runs always leave a results file behind.
    let output_path = output_path.unwrap_or(Path::new(RESULTS_FILE_NAME));
    write_report(&report, Some(output_path))
}

fn print_report(report: &BatchReport) {
    let summary = &report.summary;
    println!(
        "Total: {}  {} {}  {} {}  {} {}",
        summary.total,
        Label::Positive.symbol(),
        summary.count(Label::Positive),
        Label::Negative.symbol(),
        summary.count(Label::Negative),
        Label::Neutral.symbol(),
        summary.count(Label::Neutral)
    );
    if summary.skipped > 0 {
        println!("Skipped: {}", summary.skipped);
    }
    for item in &report.items {
        println!(
            "{:>4}  {:<8}  {:>6.2}  {:>5.2}  {}",
            item.index + 1,
            item.result.label,
            item.result.polarity,
            item.result.subjectivity,
            item.source_text.replace('\n', " ")
        );
    }
}

fn write_report(report: &BatchReport, output_path: Option<&Path>) -> sentiscope::Result<()> {
    let Some(output_path) = output_path else {
        return Ok(());
    };

    let is_json = output_path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        export_report_to_json(report, output_path)?;
    } else {
        export_results_to_csv(&report.items, output_path)?;
    }
    info!("Output saved to: {:?}", output_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_name_falls_back_on_empty_argv() {
        assert_eq!(program_name(&[]), "sentiscope");
        let args = vec!["/usr/bin/sentiscope-cli".to_string(), "text".to_string()];
        assert_eq!(program_name(&args), "/usr/bin/sentiscope-cli");
    }
}
