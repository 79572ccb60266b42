/// Resume Analyzer - resume quality scoring and feedback
///
/// The main entry point for the resume analyzer application. It parses
/// command-line arguments, gathers resume files, runs the analysis pipeline,
/// and renders or exports the results.

use anyhow::Result;
use clap::{ArgAction, ArgGroup, Parser};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, warn, LevelFilter};
use rayon::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use resume_analyzer::core::analyzer::{AnalysisResult, ResumeAnalyzer};
use resume_analyzer::utils::file_utils::{self, MAX_RESUME_BYTES};
use resume_analyzer::utils::output_formatter;

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "resume_analyzer",
    version = "0.1.0",
    about = "Analyze resume quality: scores, issues, and actionable suggestions",
    long_about = "This tool analyzes plain-text resumes and reports:
- Readability, ATS compatibility, impact, and formatting scores
- An overall quality score
- Ordered issues and actionable suggestions"
)]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .args(["file_paths", "dir"]),
))]
struct Args {
    /// Path(s) to the resume file(s) to analyze
    #[arg(name = "file_paths")]
    file_paths: Vec<String>,

    /// Analyze all text resumes in a directory (recursively)
    #[arg(long = "dir")]
    dir: Option<String>,

    /// Exclude file pattern (glob syntax, can be used multiple times)
    #[arg(long = "exclude", action = ArgAction::Append)]
    exclude: Option<Vec<String>>,

    /// Include only file pattern (glob syntax, can be used multiple times)
    #[arg(long = "include", action = ArgAction::Append)]
    include: Option<Vec<String>>,

    /// Maximum number of files to analyze (default: 100)
    #[arg(long = "max-files", default_value = "100")]
    max_files: usize,

    /// Output in markdown format (wrapped in triple backticks)
    #[arg(long = "md", action = ArgAction::SetTrue)]
    md: bool,

    /// Export results to JSON file
    #[arg(long = "json")]
    json: Option<String>,

    /// Export results to HTML report
    #[arg(long = "html")]
    html: Option<String>,

    /// Export results to CSV file
    #[arg(long = "csv")]
    csv: Option<String>,

    /// Directory to store all output files
    #[arg(long = "output-dir")]
    output_dir: Option<String>,

    /// Suppress terminal output
    #[arg(long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,

    /// Show only summary information
    #[arg(long = "summary-only", action = ArgAction::SetTrue)]
    summary_only: bool,

    /// Disable the animated score display
    #[arg(long = "no-animation", action = ArgAction::SetTrue)]
    no_animation: bool,

    /// Number of parallel workers (0=auto, default: auto)
    #[arg(long = "parallel", default_value = "0")]
    parallel: usize,

    /// Set logging level (default: INFO)
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,

    /// Log file path (default: resume_analyzer.log)
    #[arg(long = "log-file", default_value = "resume_analyzer.log")]
    log_file: String,
}

/// Main entry point function
fn main() -> Result<()> {
    let start_time = Instant::now();

    let args = Args::parse();

    let _ = setup_logging(&args);

    let files_to_analyze = get_files_to_analyze(&args)?;

    if files_to_analyze.is_empty() {
        eprintln!("{}", "Error: No resume files specified or found for analysis".red());
        eprintln!("Run with --help for usage information");
        process::exit(1);
    }

    let all_results = analyze_files(&files_to_analyze, &args)?;

    export_all_results(&all_results, &args)?;

    if !args.quiet {
        if !args.summary_only {
            for (file_path_str, result) in &all_results {
                println!("\n{}", "=".repeat(80).bold());
                println!("{} {}", "Results for:".cyan(), file_path_str);
                println!("{}", "=".repeat(80).bold());

                // Animated score display only makes sense for a single
                // interactive run
                if all_results.len() == 1 && !args.no_animation {
                    output_formatter::animate_scores(result);
                }
                println!("{}", output_formatter::format_result(result, &args.md));
            }
        }

        if all_results.len() > 1 || args.summary_only {
            println!("\n{}", output_formatter::create_summary(&all_results));
        }

        let elapsed_time = start_time.elapsed();
        println!(
            "{} {:.2} seconds",
            "Time elapsed:".green(),
            elapsed_time.as_secs_f64()
        );
    }

    Ok(())
}

/// Set up logging with file and console output
fn setup_logging(args: &Args) -> Result<()> {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(args.log_level);

    builder.format(|buf, record| {
        use chrono::Local;
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Ok(file) = File::create(&args.log_file) {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();

    Ok(())
}

/// Get list of resume files to analyze based on command line arguments
fn get_files_to_analyze(args: &Args) -> Result<Vec<PathBuf>> {
    let mut files_to_analyze = Vec::new();
    let max_files = args.max_files;

    // Process individual files
    for file_path in &args.file_paths {
        let path = PathBuf::from(file_path);
        if path.exists() {
            if path.is_file() {
                match path.metadata() {
                    Ok(metadata) => {
                        if metadata.len() <= MAX_RESUME_BYTES {
                            files_to_analyze.push(path);
                        } else {
                            warn!(
                                "Skipping {}: exceeds maximum file size ({:.2} MB)",
                                path.display(),
                                metadata.len() as f64 / 1024.0 / 1024.0
                            );
                        }
                    }
                    Err(e) => error!("Error reading metadata for {}: {}", path.display(), e),
                }
            } else {
                warn!("Skipping {}: not a file", path.display());
            }
        } else {
            error!("File not found: {}", path.display());
        }
    }

    // Process directory recursively
    if let Some(dir_path) = &args.dir {
        let dir_path = PathBuf::from(dir_path);
        if !dir_path.exists() || !dir_path.is_dir() {
            error!("Directory not found: {}", dir_path.display());
        } else {
            let include_patterns = args.include.clone().unwrap_or_else(|| vec!["*".to_string()]);
            let exclude_patterns = args.exclude.clone().unwrap_or_default();

            use walkdir::WalkDir;
            for entry in WalkDir::new(&dir_path)
                .follow_links(false)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                if files_to_analyze.len() >= max_files {
                    warn!("Reached maximum file limit ({})", max_files);
                    break;
                }

                let file_path = entry.path();
                if !file_path.is_file() || !file_utils::is_text_resume(file_path) {
                    continue;
                }

                match file_path.metadata() {
                    Ok(metadata) => {
                        if metadata.len() > MAX_RESUME_BYTES {
                            continue;
                        }

                        let file_name = file_path.to_string_lossy();
                        let include_match = include_patterns
                            .iter()
                            .any(|pattern| glob_match(&file_name, pattern));
                        let exclude_match = exclude_patterns
                            .iter()
                            .any(|pattern| glob_match(&file_name, pattern));

                        if include_match && !exclude_match {
                            files_to_analyze.push(file_path.to_path_buf());
                        }
                    }
                    Err(e) => error!("Error reading metadata for {}: {}", file_path.display(), e),
                }
            }
        }
    }

    Ok(files_to_analyze)
}

/// Simple glob pattern matching
fn glob_match(text: &str, pattern: &str) -> bool {
    let pattern = pattern.replace('*', ".*").replace('?', ".");
    let re = regex::Regex::new(&format!("^{}$", pattern)).unwrap_or_else(|_| {
        regex::Regex::new(".*").unwrap() // Fallback to match everything on error
    });
    re.is_match(text)
}

/// Analyze multiple resume files with progress tracking
fn analyze_files(files: &[PathBuf], args: &Args) -> Result<Vec<(String, AnalysisResult)>> {
    let total_files = files.len();
    let results = Arc::new(Mutex::new(Vec::new()));

    let num_workers = if args.parallel == 0 {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    } else {
        args.parallel
    };

    if !args.quiet && total_files > 1 {
        println!(
            "\n{} {} resumes with {} workers...",
            "Analyzing".bold(),
            total_files,
            num_workers
        );
    }

    if total_files == 0 {
        return Ok(Vec::new());
    }

    let progress_bar = if !args.quiet && total_files > 1 {
        let pb = ProgressBar::new(total_files as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} resumes ({eta})")
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_workers)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build thread pool: {}", e))?;

    // The pipeline is a pure computation, so concurrent analysis of
    // different files needs no coordination beyond collecting results
    pool.install(|| {
        files.par_iter().for_each(|file_path| {
            let file_path_string = file_path.to_string_lossy().to_string();
            let analyzer = ResumeAnalyzer::new();

            match file_utils::read_resume_text(file_path) {
                Ok(text) => {
                    let result = analyzer.analyze(&text);
                    if let Ok(mut all_results) = results.lock() {
                        all_results.push((file_path_string, result));
                    }
                }
                Err(e) => {
                    error!("Error reading {}: {}", file_path.display(), e);
                    if let Some(pb) = &progress_bar {
                        pb.println(format!("{} {}: {}", "Skipped".red(), file_path_string, e));
                    }
                }
            }

            if let Some(pb) = &progress_bar {
                pb.inc(1);
            }
        });
    });

    if let Some(pb) = progress_bar {
        pb.finish_with_message("Analysis complete");
    }

    let mut all_results = Arc::try_unwrap(results)
        .expect("Failed to retrieve analysis results")
        .into_inner()
        .expect("Failed to unlock results mutex");

    // Parallel collection order is nondeterministic; restore input order
    all_results.sort_by_key(|(path, _)| {
        files
            .iter()
            .position(|f| f.to_string_lossy() == *path)
            .unwrap_or(usize::MAX)
    });

    Ok(all_results)
}

/// Export results for all analyzed files based on command line arguments
fn export_all_results(all_results: &[(String, AnalysisResult)], args: &Args) -> Result<()> {
    if let Some(output_dir) = &args.output_dir {
        std::fs::create_dir_all(output_dir)?;
    }

    for (file_path_str, result) in all_results {
        let file_path = Path::new(file_path_str);

        if let Some(json_path) = &args.json {
            let json_path = if all_results.len() > 1 {
                generate_output_path(args, file_path, ".json")
            } else {
                PathBuf::from(json_path)
            };
            output_formatter::export_results_json(result, &json_path)?;
        }

        if let Some(html_path) = &args.html {
            let html_path = if all_results.len() > 1 {
                generate_output_path(args, file_path, ".html")
            } else {
                PathBuf::from(html_path)
            };
            output_formatter::create_html_report(result, &html_path)?;
        }

        if let Some(csv_path) = &args.csv {
            let csv_path = if all_results.len() > 1 {
                generate_output_path(args, file_path, ".csv")
            } else {
                PathBuf::from(csv_path)
            };
            output_formatter::create_csv_report(result, &csv_path)?;
        }
    }

    Ok(())
}

/// Generate output file path based on input file and output directory
fn generate_output_path(args: &Args, file_path: &Path, extension: &str) -> PathBuf {
    let file_stem = file_path.file_stem().unwrap_or_default();
    let output_filename = format!("{}_analysis{}", file_stem.to_string_lossy(), extension);
    if let Some(output_dir) = &args.output_dir {
        PathBuf::from(output_dir).join(output_filename)
    } else {
        PathBuf::from(output_filename)
    }
}
