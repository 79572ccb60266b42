/// Output formatter for analysis results
///
/// This module handles rendering and exporting analysis results: colored
/// console output with an animated score counter, plus JSON, HTML, and CSV
/// export. Categorization of suggestions is purely a rendering concern; it
/// keys off the leading marker glyph and never feeds back into scoring.

use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use handlebars::Handlebars;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use serde_json::json;

use crate::core::analyzer::AnalysisResult;

/// At most this many suggestions are rendered; issues are always rendered
/// in full.
pub const MAX_DISPLAY_SUGGESTIONS: usize = 10;

/// Duration of the incremental score counter animation.
const SCORE_ANIMATION: Duration = Duration::from_millis(600);

/// Visual category of a suggestion, derived from its leading marker glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    /// Acknowledgment of something done well (✓)
    Success,
    /// Top-tier closing remark (🏆)
    Excellent,
    /// Style pro tip (⚡)
    ProTip,
    /// Informational enhancement tip (💡)
    Info,
    /// Actionable warning (everything else)
    Warning,
}

/// Classify a suggestion by its leading marker glyph.
pub fn categorize_suggestion(suggestion: &str) -> SuggestionKind {
    if suggestion.contains('✓') {
        SuggestionKind::Success
    } else if suggestion.contains('🏆') {
        SuggestionKind::Excellent
    } else if suggestion.starts_with("⚡ Pro Tip") {
        SuggestionKind::ProTip
    } else if suggestion.contains('💡') {
        SuggestionKind::Info
    } else {
        SuggestionKind::Warning
    }
}

/// Format one analysis result for console output.
///
/// # Arguments
///
/// * `result` - The analysis to render
/// * `use_markdown` - Whether to wrap output in markdown triple backticks
///
/// # Returns
///
/// Formatted string for console output
pub fn format_result(result: &AnalysisResult, use_markdown: &bool) -> String {
    let mut output = String::new();

    if *use_markdown {
        output.push_str("```\n");
    }

    output.push_str(&format!(
        "{} {}\n\n",
        "Overall Score:".yellow().bold(),
        format!("{}/100", result.scores.overall).bold()
    ));

    let metrics = [
        ("Readability", result.scores.readability),
        ("ATS Compatibility", result.scores.ats),
        ("Impact", result.scores.impact),
        ("Formatting", result.scores.formatting),
    ];
    for (name, value) in metrics {
        output.push_str(&format!("  {:<18} {:>3}%\n", format!("{}:", name).cyan(), value));
    }
    output.push('\n');

    output.push_str(&format!("{}\n", "Suggestions".yellow().bold()));
    for suggestion in result.suggestions.iter().take(MAX_DISPLAY_SUGGESTIONS) {
        let line = match categorize_suggestion(suggestion) {
            SuggestionKind::Success => suggestion.green().to_string(),
            SuggestionKind::Excellent => suggestion.bright_green().bold().to_string(),
            SuggestionKind::ProTip => suggestion.blue().to_string(),
            SuggestionKind::Info => suggestion.cyan().to_string(),
            SuggestionKind::Warning => suggestion.yellow().to_string(),
        };
        output.push_str(&format!("  {}\n", line));
    }

    if !result.issues.is_empty() {
        output.push_str(&format!("\n{}\n", "⚠ Areas to Improve:".red().bold()));
        for issue in &result.issues {
            output.push_str(&format!("  {} {}\n", "❌".red(), issue));
        }
    }

    if *use_markdown {
        output.push_str("```\n");
    }

    output
}

/// Render the scores as bars animated over ~600 ms.
///
/// Purely cosmetic; callers that want plain output (quiet mode, piped
/// output, batch runs) skip this and use [`format_result`] alone.
pub fn animate_scores(result: &AnalysisResult) {
    let multi = MultiProgress::new();
    let style = ProgressStyle::default_bar()
        .template("{prefix:>18} [{bar:40.cyan/blue}] {pos:>3}%")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");

    let metrics = [
        ("Overall", result.scores.overall),
        ("Readability", result.scores.readability),
        ("ATS", result.scores.ats),
        ("Impact", result.scores.impact),
        ("Formatting", result.scores.formatting),
    ];

    let bars: Vec<(ProgressBar, u8)> = metrics
        .iter()
        .map(|(name, value)| {
            let bar = multi.add(ProgressBar::new(100));
            bar.set_style(style.clone());
            bar.set_prefix(*name);
            (bar, *value)
        })
        .collect();

    const STEPS: u32 = 30;
    for step in 1..=STEPS {
        let progress = step as f64 / STEPS as f64;
        for (bar, value) in &bars {
            bar.set_position((progress * *value as f64) as u64);
        }
        std::thread::sleep(SCORE_ANIMATION / STEPS);
    }
    for (bar, value) in &bars {
        bar.set_position(*value as u64);
        bar.finish();
    }
}

/// Export an analysis result to a JSON file.
pub fn export_results_json(result: &AnalysisResult, output_path: &Path) -> Result<()> {
    let file = File::create(output_path).context(format!(
        "Failed to create JSON output file: {}",
        output_path.display()
    ))?;

    serde_json::to_writer_pretty(file, result).context("Failed to write JSON data")?;

    Ok(())
}

/// Create an HTML report from an analysis result.
pub fn create_html_report(result: &AnalysisResult, output_path: &Path) -> Result<()> {
    let mut handlebars = Handlebars::new();

    const HTML_TEMPLATE: &str = r#"
    <!DOCTYPE html>
    <html lang="en">
    <head>
        <meta charset="UTF-8">
        <meta name="viewport" content="width=device-width, initial-scale=1.0">
        <title>Resume Analysis Report</title>
        <style>
            body {
                font-family: Arial, sans-serif;
                line-height: 1.6;
                color: #333;
                max-width: 900px;
                margin: 0 auto;
                padding: 20px;
            }
            h1 {
                color: #2c3e50;
                border-bottom: 2px solid #3498db;
                padding-bottom: 10px;
            }
            .timestamp {
                color: #7f8c8d;
                font-size: 0.9em;
                margin-bottom: 30px;
            }
            .overall {
                font-size: 3em;
                color: #2980b9;
                font-weight: bold;
            }
            .metric {
                margin: 12px 0;
            }
            .metric-name {
                display: inline-block;
                width: 160px;
            }
            .metric-bar {
                display: inline-block;
                width: 400px;
                background: #ecf0f1;
                border-radius: 4px;
                vertical-align: middle;
            }
            .metric-fill {
                background: #3498db;
                color: white;
                border-radius: 4px;
                padding: 2px 6px;
                font-size: 0.8em;
                text-align: right;
            }
            .suggestions, .issues {
                list-style-type: none;
                padding-left: 0;
            }
            .suggestions li, .issues li {
                padding: 6px 10px;
                margin: 4px 0;
                border-radius: 4px;
                background: #f8f9fa;
            }
            .suggestions li.success { border-left: 4px solid #2ecc71; }
            .suggestions li.excellent { border-left: 4px solid #27ae60; }
            .suggestions li.pro-tip { border-left: 4px solid #3498db; }
            .suggestions li.info { border-left: 4px solid #1abc9c; }
            .suggestions li.warning { border-left: 4px solid #f39c12; }
            .issues li { border-left: 4px solid #e74c3c; }
        </style>
    </head>
    <body>
        <h1>Resume Analysis Report</h1>
        <div class="timestamp">Generated on: {{timestamp}}</div>

        <div class="overall">{{overall}}/100</div>

        {{#each metrics}}
        <div class="metric">
            <span class="metric-name">{{name}}</span>
            <span class="metric-bar">
                <div class="metric-fill" style="width: {{value}}%">{{value}}%</div>
            </span>
        </div>
        {{/each}}

        <h2>Suggestions</h2>
        <ul class="suggestions">
            {{#each suggestions}}
            <li class="{{kind}}">{{text}}</li>
            {{/each}}
        </ul>

        {{#if issues.length}}
        <h2>Areas to Improve</h2>
        <ul class="issues">
            {{#each issues}}
            <li>❌ {{this}}</li>
            {{/each}}
        </ul>
        {{/if}}
    </body>
    </html>
    "#;

    handlebars
        .register_template_string("report", HTML_TEMPLATE)
        .context("Failed to register HTML template")?;

    let metrics = [
        ("Readability", result.scores.readability),
        ("ATS Compatibility", result.scores.ats),
        ("Impact", result.scores.impact),
        ("Formatting", result.scores.formatting),
    ];
    let metrics_data: Vec<_> = metrics
        .iter()
        .map(|(name, value)| json!({ "name": name, "value": value }))
        .collect();

    let suggestions_data: Vec<_> = result
        .suggestions
        .iter()
        .take(MAX_DISPLAY_SUGGESTIONS)
        .map(|s| {
            let kind = match categorize_suggestion(s) {
                SuggestionKind::Success => "success",
                SuggestionKind::Excellent => "excellent",
                SuggestionKind::ProTip => "pro-tip",
                SuggestionKind::Info => "info",
                SuggestionKind::Warning => "warning",
            };
            json!({ "text": s, "kind": kind })
        })
        .collect();

    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let template_data = json!({
        "timestamp": timestamp,
        "overall": result.scores.overall,
        "metrics": metrics_data,
        "suggestions": suggestions_data,
        "issues": result.issues,
    });

    let html = handlebars
        .render("report", &template_data)
        .context("Failed to render HTML template")?;

    let mut file = File::create(output_path).context(format!(
        "Failed to create HTML output file: {}",
        output_path.display()
    ))?;
    file.write_all(html.as_bytes()).context("Failed to write HTML data")?;

    Ok(())
}

/// Create a CSV report from an analysis result.
///
/// One row per score, issue and suggestion, with a kind column.
pub fn create_csv_report(result: &AnalysisResult, output_path: &Path) -> Result<()> {
    let file = File::create(output_path).context(format!(
        "Failed to create CSV output file: {}",
        output_path.display()
    ))?;

    let mut writer = csv::Writer::from_writer(file);
    writer
        .write_record(["Kind", "Entry"])
        .context("Failed to write CSV header")?;

    let scores = [
        ("score:readability", result.scores.readability),
        ("score:ats", result.scores.ats),
        ("score:impact", result.scores.impact),
        ("score:formatting", result.scores.formatting),
        ("score:overall", result.scores.overall),
    ];
    for (kind, value) in scores {
        writer
            .write_record([kind, &value.to_string()])
            .context("Failed to write CSV record")?;
    }
    for issue in &result.issues {
        writer
            .write_record(["issue", issue])
            .context("Failed to write CSV record")?;
    }
    for suggestion in &result.suggestions {
        writer
            .write_record(["suggestion", suggestion])
            .context("Failed to write CSV record")?;
    }

    writer.flush().context("Failed to flush CSV writer")?;

    Ok(())
}

/// Create a summary of scores across multiple analyzed resumes.
pub fn create_summary(all_results: &[(String, AnalysisResult)]) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n\n", "Analysis Summary".yellow().bold()));
    output.push_str(&format!("Resumes analyzed: {}\n", all_results.len()));

    if !all_results.is_empty() {
        let total: usize = all_results
            .iter()
            .map(|(_, r)| r.scores.overall as usize)
            .sum();
        let average = total as f64 / all_results.len() as f64;
        output.push_str(&format!("Average overall score: {:.1}\n\n", average));

        // Distribution of issues across the batch
        let mut issue_counts: HashMap<&str, usize> = HashMap::new();
        for (_, result) in all_results {
            for issue in &result.issues {
                *issue_counts.entry(issue.as_str()).or_insert(0) += 1;
            }
        }
        if !issue_counts.is_empty() {
            output.push_str(&format!("{}\n", "Most Common Issues".cyan().bold()));
            let mut issues: Vec<_> = issue_counts.iter().collect();
            issues.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
            for (i, (issue, count)) in issues.iter().take(10).enumerate() {
                output.push_str(&format!("{}. {} ({} resumes)\n", i + 1, issue, count));
            }
        }
    }

    output
}
