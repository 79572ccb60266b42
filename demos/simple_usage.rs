/// Simple example demonstrating how to use the Resume Analyzer library

use anyhow::Result;
use resume_analyzer::analyze;

fn main() -> Result<()> {
    let resume = r#"
Jane Doe
jane.doe@example.com | 555-123-4567

SUMMARY
Results-driven software engineer with 8 years of experience building and
shipping backend services. Led a team of five engineers and improved
deployment frequency by 40%.

EXPERIENCE
Senior Software Engineer, Acme Corp
- Designed and implemented a caching layer that reduced latency by 35%
- Managed migration of legacy services, saving $120K in annual hosting cost
- Coordinated cross-team technical planning and improved delivery predictability

EDUCATION
B.S. Computer Science, State University

SKILLS
Rust, Python, distributed systems, technical leadership, communication
"#;

    let result = analyze(resume);

    println!("Overall score: {}/100", result.scores.overall);
    println!("  Readability:  {}", result.scores.readability);
    println!("  ATS:          {}", result.scores.ats);
    println!("  Impact:       {}", result.scores.impact);
    println!("  Formatting:   {}", result.scores.formatting);

    println!("\nSuggestions:");
    for suggestion in &result.suggestions {
        println!("  {}", suggestion);
    }

    if !result.issues.is_empty() {
        println!("\nIssues:");
        for issue in &result.issues {
            println!("  - {}", issue);
        }
    }

    Ok(())
}
