use super::domain::Decision;
use super::matching::ComponentScores;

const STRONG_SKILL_SCORE: f64 = 0.8;
const PARTIAL_SKILL_SCORE: f64 = 0.5;
const CLOSE_EXPERIENCE_SCORE: f64 = 0.7;
const MINOR_GAP_COUNT: usize = 2;

/// Everything the templates need to explain one decision.
#[derive(Debug, Clone, Copy)]
pub struct ExplanationInput<'a> {
    pub decision: Decision,
    /// Composite score in percent.
    pub score: f64,
    pub components: ComponentScores,
    pub matched: &'a [String],
    pub missing: &'a [String],
    pub candidate_years: u32,
    pub required_years: u32,
    pub job_title: &'a str,
}

impl ExplanationInput<'_> {
    fn total_required(&self) -> usize {
        self.matched.len() + self.missing.len()
    }

    fn experience_sufficient(&self) -> bool {
        self.candidate_years >= self.required_years
    }
}

/// Deterministic four-sentence rationale per decision.
///
/// Sentences, in order: overall assessment, skills analysis with the complete matched and
/// missing lists, experience analysis, recommendation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplanationGenerator;

impl ExplanationGenerator {
    pub fn explain(&self, input: &ExplanationInput<'_>) -> String {
        [
            assessment(input),
            skills_analysis(input),
            experience_analysis(input),
            recommendation(input),
        ]
        .join(" ")
    }
}

fn assessment(input: &ExplanationInput<'_>) -> String {
    let title = display_title(input.job_title);
    match input.decision {
        Decision::Shortlist => format!(
            "Strong candidate for {title} with {:.0}% overall match.",
            input.score
        ),
        Decision::Review => format!(
            "Moderate match for {title} with {:.0}% compatibility.",
            input.score
        ),
        Decision::Reject => format!(
            "Not recommended for {title} with only {:.0}% match.",
            input.score
        ),
    }
}

fn skills_analysis(input: &ExplanationInput<'_>) -> String {
    let total = input.total_required();
    if total == 0 {
        return "The posting lists no required skills, so skills were not scored.".to_string();
    }

    let matched = input.matched.len();
    let lead = match input.decision {
        Decision::Shortlist if input.components.skills >= STRONG_SKILL_SCORE => {
            "Excellent skill alignment"
        }
        Decision::Shortlist => "Good skill coverage",
        Decision::Review if input.components.skills >= PARTIAL_SKILL_SCORE => {
            "Partial skill alignment"
        }
        Decision::Review => "Limited skill overlap",
        Decision::Reject if matched > 0 => "Minimal skill alignment",
        Decision::Reject => "No skill alignment",
    };

    format!(
        "{lead} with {matched}/{total} required skills matched ({}); missing: {}.",
        join_list(input.matched),
        join_list(input.missing)
    )
}

fn experience_analysis(input: &ExplanationInput<'_>) -> String {
    let candidate = input.candidate_years;
    let required = input.required_years;

    if required == 0 {
        format!("The posting sets no minimum experience ({candidate} years on record).")
    } else if candidate > required {
        format!("Exceeds the experience requirement ({candidate} years vs {required} required).")
    } else if candidate == required {
        format!("Meets the experience requirement ({candidate} years vs {required} required).")
    } else if input.components.experience >= CLOSE_EXPERIENCE_SCORE {
        format!("Close to the experience requirement ({candidate} years vs {required} required).")
    } else {
        format!("Underqualified in experience ({candidate} years vs {required} required).")
    }
}

fn recommendation(input: &ExplanationInput<'_>) -> String {
    let missing = input.missing.len();
    let gaps = join_list(input.missing);
    let experienced = input.experience_sufficient();

    match input.decision {
        Decision::Shortlist => match (missing, experienced) {
            (0, true) => "Perfect skill match, recommend an immediate interview.".to_string(),
            (0, false) => {
                "Full skill match, recommend an interview that probes the experience gap."
                    .to_string()
            }
            (count, _) if count <= MINOR_GAP_COUNT => format!(
                "Minor gaps in {gaps} can be addressed through training, recommended for the next round."
            ),
            _ => "Recommend an interview to discuss a skill development plan.".to_string(),
        },
        Decision::Review => match (missing, experienced) {
            (0, _) => {
                "Skills are covered, review the application to confirm depth before a phone screen."
                    .to_string()
            }
            (count, true) if count <= MINOR_GAP_COUNT => {
                "Experience may compensate for the gaps through on-the-job learning, consider a phone screen."
                    .to_string()
            }
            (_, true) => {
                "Review carefully to assess growth potential, may be suitable with mentoring support."
                    .to_string()
            }
            (_, false) => {
                "Better suited to a junior version of the role or an extensive training program."
                    .to_string()
            }
        },
        Decision::Reject => match (missing, experienced) {
            (0, _) => {
                "Overall fit falls short of the posting, recommend alternative positions."
                    .to_string()
            }
            (_, false) => {
                "Skill and experience gaps are both significant, not suitable for the current requirements."
                    .to_string()
            }
            (_, true) => {
                "Experience alone does not compensate for the skill gaps, recommend positions better aligned with this background."
                    .to_string()
            }
        },
    }
}

fn display_title(title: &str) -> &str {
    let title = title.trim();
    if title.is_empty() {
        "this position"
    } else {
        title
    }
}

fn join_list(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}
