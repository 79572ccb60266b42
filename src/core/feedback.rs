/// Rule-based issue and suggestion generation
///
/// A fixed ladder of rules is evaluated in a fixed order over the extracted
/// features and computed scores, each rule appending zero or more entries to
/// the issue and suggestion lists. Output order is therefore deterministic
/// and solely a function of the inputs.
///
/// The leading marker glyph on each suggestion (✓, 📧, 💡, 🏆, ...) is part
/// of the contract: the presentation layer assigns a visual category per
/// glyph.

use crate::core::features::FeatureSet;
use crate::core::scores::ScoreSet;

/// Ordered issue and suggestion lists, filled by the rule ladder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

impl Feedback {
    fn issue(&mut self, text: impl Into<String>) {
        self.issues.push(text.into());
    }

    fn suggest(&mut self, text: impl Into<String>) {
        self.suggestions.push(text.into());
    }
}

/// Run the full rule ladder.
///
/// Rule order: contact info, summary, action verbs, metrics, word count,
/// readability, ATS, impact, line-length pro tip, closing remark. Each rule
/// is independent of the others; tiered rules match exactly one band.
///
/// Never fails and always produces at least one suggestion for any valid
/// feature/score pair.
pub fn generate_feedback(features: &FeatureSet, scores: &ScoreSet) -> Feedback {
    let mut feedback = Feedback::default();

    contact_rule(features, &mut feedback);
    summary_rule(features, &mut feedback);
    action_verb_rule(features, &mut feedback);
    metrics_rule(features, &mut feedback);
    word_count_rule(features, &mut feedback);
    readability_rule(scores, &mut feedback);
    ats_rule(scores, &mut feedback);
    impact_rule(scores, &mut feedback);
    line_length_rule(features, &mut feedback);
    closing_rule(scores, &mut feedback);

    feedback
}

fn contact_rule(features: &FeatureSet, fb: &mut Feedback) {
    if !features.has_contact_info {
        fb.issue("Missing contact information");
        fb.suggest("📧 Add your email and phone number at the top of your resume");
    } else {
        fb.suggest("✓ Contact information is properly included");
    }
}

fn summary_rule(features: &FeatureSet, fb: &mut Feedback) {
    if !features.has_summary {
        fb.issue("No professional summary or objective");
        fb.suggest(
            "📝 Write a 2-3 line professional summary with your key strengths and career goal. \
             Example: \"Results-driven professional with 5+ years experience in XYZ, proven track \
             record of increasing productivity by 30%\"",
        );
    } else {
        fb.suggest("✓ Professional summary included");
    }
}

fn action_verb_rule(features: &FeatureSet, fb: &mut Feedback) {
    match features.action_verb_count {
        0 => {
            fb.issue("No action verbs found");
            fb.suggest(
                "💪 Start each bullet point with strong action verbs. Examples: \"Managed \
                 5-person team\", \"Developed new process\", \"Implemented solution\"",
            );
        }
        count @ 1..=4 => {
            fb.issue("Low number of action verbs");
            fb.suggest(format!(
                "💪 Increase action verbs from {count} to at least 10. Use: led, developed, \
                 implemented, designed, created, managed, improved, increased, reduced, achieved"
            ));
        }
        count @ 5..=9 => {
            fb.suggest(format!("✓ Good use of action verbs ({count} found)"));
        }
        count => {
            fb.suggest(format!("✓ Excellent use of action verbs ({count} found)"));
        }
    }
}

fn metrics_rule(features: &FeatureSet, fb: &mut Feedback) {
    if !features.has_metrics {
        fb.issue("Missing quantifiable results");
        fb.suggest(
            "📊 Add specific metrics to your achievements. Examples: \"Increased sales by 25%\", \
             \"Reduced costs by $50K\", \"Improved efficiency to 95%\"",
        );
    } else {
        fb.suggest("✓ Strong use of quantifiable metrics");
    }
}

fn word_count_rule(features: &FeatureSet, fb: &mut Feedback) {
    let words = features.word_count;
    if words < 100 {
        fb.issue(format!("Resume is critically short ({words} words)"));
        fb.suggest(
            "📄 Expand your resume to at least 200 words. Add more achievements, skills, and \
             relevant details",
        );
    } else if words < 200 {
        fb.issue(format!("Resume appears too brief ({words} words)"));
        fb.suggest(
            "📄 Expand to 200+ words by adding more accomplishments and key achievements in \
             each role",
        );
    } else if words > 1500 {
        fb.issue(format!("Resume is too long ({words} words)"));
        fb.suggest(
            "📄 Reduce to 500-1000 words max. Cut less relevant details and focus on recent, \
             impactful achievements",
        );
    } else if words > 1000 {
        fb.issue(format!("Resume may be slightly long ({words} words)"));
        fb.suggest(
            "📄 Consider trimming to 1000 words for better readability. Keep most impactful \
             achievements",
        );
    } else {
        fb.suggest(format!("✓ Good resume length ({words} words)"));
    }
}

fn readability_rule(scores: &ScoreSet, fb: &mut Feedback) {
    let score = scores.readability;
    if score < 40 {
        fb.issue(format!("Very poor readability (score: {score})"));
        fb.suggest(
            "🔤 Simplify your language. Use shorter sentences (15-20 words), active voice, and \
             avoid jargon",
        );
    } else if score < 50 {
        fb.issue(format!("Poor readability (score: {score})"));
        fb.suggest(
            "🔤 Improve readability by breaking long sentences into shorter ones and using \
             simpler vocabulary",
        );
    } else if score < 60 {
        fb.issue(format!("Moderate readability (score: {score})"));
        fb.suggest("🔤 Consider simplifying some complex sentences for better readability");
    } else if score > 75 {
        fb.suggest(format!("✓ Excellent readability (score: {score})"));
    } else {
        fb.suggest(format!("✓ Good readability (score: {score})"));
    }
}

fn ats_rule(scores: &ScoreSet, fb: &mut Feedback) {
    let score = scores.ats;
    if score < 50 {
        fb.issue(format!("Poor ATS compatibility (score: {score})"));
        fb.suggest(
            "🤖 Add standard section headers: EXPERIENCE, EDUCATION, SKILLS, CERTIFICATIONS. \
             Use clean formatting without special characters",
        );
    } else if score < 70 {
        fb.issue(format!("Moderate ATS compatibility (score: {score})"));
        fb.suggest(
            "🤖 Improve ATS score by using standard formatting, clear headers, and including \
             all relevant keywords from job descriptions",
        );
    } else {
        fb.suggest(format!("✓ Good ATS compatibility (score: {score})"));
    }
}

fn impact_rule(scores: &ScoreSet, fb: &mut Feedback) {
    let score = scores.impact;
    if score < 50 {
        fb.issue(format!("Low impact score (score: {score})"));
        fb.suggest(
            "⭐ Focus on achievements with measurable outcomes. Add context to each \
             accomplishment. Include impact statements",
        );
    } else if score < 70 {
        // Enhancement tip only, no issue logged for the middle band
        fb.suggest(
            "💡 Enhance impact by adding more quantifiable results and business outcomes to \
             your achievements",
        );
    } else {
        fb.suggest(format!("✓ Strong achievement-focused content (score: {score})"));
    }
}

fn line_length_rule(features: &FeatureSet, fb: &mut Feedback) {
    if features.word_count == 0 {
        return;
    }
    let avg_words_per_sentence =
        (features.word_count as f64 / features.sentence_count as f64).round() as usize;
    if avg_words_per_sentence > 25 {
        fb.suggest(
            "⚡ Pro Tip: Break up long bullet points into shorter, punchier statements (aim for \
             15-20 words per line)",
        );
    }
}

fn closing_rule(scores: &ScoreSet, fb: &mut Feedback) {
    if scores.overall >= 80 {
        fb.suggest("🏆 Your resume is excellent! You're ready to apply to top positions");
    } else if scores.overall >= 70 {
        fb.suggest("👍 Your resume is good! Minor improvements could make it even stronger");
    } else if scores.overall >= 60 {
        fb.suggest("📋 Your resume needs some work. Focus on the suggestions above to improve");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strong_features() -> FeatureSet {
        FeatureSet {
            word_count: 400,
            has_contact_info: true,
            has_summary: true,
            has_metrics: true,
            action_verb_count: 12,
            sentence_count: 30,
            keyword_matches: 8,
        }
    }

    fn strong_scores() -> ScoreSet {
        ScoreSet {
            readability: 80,
            ats: 85,
            impact: 75,
            formatting: 80,
            overall: 80,
        }
    }

    #[test]
    fn test_strong_resume_has_no_issues() {
        let feedback = generate_feedback(&strong_features(), &strong_scores());
        assert!(feedback.issues.is_empty());
        assert!(!feedback.suggestions.is_empty());
    }

    #[test]
    fn test_rule_order_is_fixed() {
        let feedback = generate_feedback(&strong_features(), &strong_scores());
        let s = &feedback.suggestions;
        assert_eq!(s[0], "✓ Contact information is properly included");
        assert_eq!(s[1], "✓ Professional summary included");
        assert_eq!(s[2], "✓ Excellent use of action verbs (12 found)");
        assert_eq!(s[3], "✓ Strong use of quantifiable metrics");
        assert_eq!(s[4], "✓ Good resume length (400 words)");
        assert_eq!(s[5], "✓ Excellent readability (score: 80)");
        assert_eq!(s[6], "✓ Good ATS compatibility (score: 85)");
        assert_eq!(s[7], "✓ Strong achievement-focused content (score: 75)");
        assert_eq!(s[8], "🏆 Your resume is excellent! You're ready to apply to top positions");
    }

    #[test]
    fn test_weak_resume_collects_issues_in_order() {
        let features = FeatureSet {
            word_count: 120,
            has_contact_info: false,
            has_summary: false,
            has_metrics: false,
            action_verb_count: 2,
            sentence_count: 6,
            keyword_matches: 1,
        };
        let scores = ScoreSet {
            readability: 45,
            ats: 55,
            impact: 48,
            formatting: 65,
            overall: 53,
        };
        let feedback = generate_feedback(&features, &scores);
        assert_eq!(
            feedback.issues,
            vec![
                "Missing contact information",
                "No professional summary or objective",
                "Low number of action verbs",
                "Missing quantifiable results",
                "Resume appears too brief (120 words)",
                "Poor readability (score: 45)",
                "Moderate ATS compatibility (score: 55)",
                "Low impact score (score: 48)",
            ]
        );
        // Below 60 overall, no closing remark
        assert!(!feedback.suggestions.iter().any(|s| s.starts_with("🏆")
            || s.starts_with("👍")
            || s.starts_with("📋")));
    }

    #[test]
    fn test_action_verb_bands() {
        let mut features = strong_features();
        let scores = strong_scores();

        features.action_verb_count = 0;
        let fb = generate_feedback(&features, &scores);
        assert!(fb.issues.iter().any(|i| i == "No action verbs found"));

        features.action_verb_count = 4;
        let fb = generate_feedback(&features, &scores);
        assert!(fb.issues.iter().any(|i| i == "Low number of action verbs"));

        features.action_verb_count = 7;
        let fb = generate_feedback(&features, &scores);
        assert!(fb.suggestions.contains(&"✓ Good use of action verbs (7 found)".to_string()));

        features.action_verb_count = 10;
        let fb = generate_feedback(&features, &scores);
        assert!(fb
            .suggestions
            .contains(&"✓ Excellent use of action verbs (10 found)".to_string()));
    }

    #[test]
    fn test_word_count_bands() {
        let scores = strong_scores();
        let mut features = strong_features();

        for (count, expected) in [
            (80, "Resume is critically short (80 words)"),
            (150, "Resume appears too brief (150 words)"),
            (1200, "Resume may be slightly long (1200 words)"),
            (1600, "Resume is too long (1600 words)"),
        ] {
            features.word_count = count;
            let fb = generate_feedback(&features, &scores);
            assert!(fb.issues.iter().any(|i| i == expected), "band failed for {count}");
        }

        features.word_count = 500;
        let fb = generate_feedback(&features, &scores);
        assert!(fb.suggestions.contains(&"✓ Good resume length (500 words)".to_string()));
    }

    #[test]
    fn test_impact_middle_band_is_suggestion_only() {
        let features = strong_features();
        let mut scores = strong_scores();
        scores.impact = 60;
        let fb = generate_feedback(&features, &scores);
        assert!(!fb.issues.iter().any(|i| i.contains("impact")));
        assert!(fb.suggestions.iter().any(|s| s.starts_with("💡")));
    }

    #[test]
    fn test_line_length_pro_tip() {
        let mut features = strong_features();
        features.word_count = 300;
        features.sentence_count = 10; // 30 words per sentence
        let fb = generate_feedback(&features, &strong_scores());
        assert!(fb.suggestions.iter().any(|s| s.starts_with("⚡ Pro Tip")));

        features.sentence_count = 20; // 15 words per sentence
        let fb = generate_feedback(&features, &strong_scores());
        assert!(!fb.suggestions.iter().any(|s| s.starts_with("⚡ Pro Tip")));
    }

    #[test]
    fn test_closing_remark_bands() {
        let features = strong_features();
        let mut scores = strong_scores();

        scores.overall = 80;
        let fb = generate_feedback(&features, &scores);
        assert!(fb.suggestions.last().unwrap().starts_with("🏆"));

        scores.overall = 72;
        let fb = generate_feedback(&features, &scores);
        assert!(fb.suggestions.last().unwrap().starts_with("👍"));

        scores.overall = 63;
        let fb = generate_feedback(&features, &scores);
        assert!(fb.suggestions.last().unwrap().starts_with("📋"));
    }
}
