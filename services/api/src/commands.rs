use crate::infra::{build_pipeline, load_catalog, InMemoryScreeningRepository};
use clap::Args;
use resume_screener::config::{AppConfig, ScreeningSettings};
use resume_screener::error::AppError;
use resume_screener::workflows::screening::{
    MatchResult, Profile, ScreeningRecord, ScreeningRequest, ScreeningService,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScreenArgs {
    /// Plain-text resume to screen
    #[arg(long)]
    pub(crate) resume: PathBuf,
    /// Job catalog CSV (defaults to APP_JOB_CATALOG)
    #[arg(long)]
    pub(crate) jobs: Option<PathBuf>,
    /// Override the number of ranked matches to report
    #[arg(long)]
    pub(crate) top_n: Option<usize>,
    /// Print the full screening record as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ExtractArgs {
    /// Plain-text resume to extract
    #[arg(long)]
    pub(crate) resume: PathBuf,
    /// Print the profile as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_screen(args: ScreenArgs) -> Result<(), AppError> {
    let ScreenArgs {
        resume,
        jobs,
        top_n,
        json,
    } = args;

    let mut settings = AppConfig::load()?.screening;
    if jobs.is_some() {
        settings.job_catalog = jobs;
    }
    if let Some(top_n) = top_n {
        settings.scoring.top_n = top_n;
    }

    let resume_text = std::fs::read_to_string(&resume)?;
    let record = screen_text(&settings, resume_text)?;

    if json {
        print_json(&record);
    } else {
        render_screening(&record);
    }
    Ok(())
}

pub(crate) fn run_extract(args: ExtractArgs) -> Result<(), AppError> {
    let settings = AppConfig::load()?.screening;
    let pipeline = build_pipeline(&settings)?;
    let resume_text = std::fs::read_to_string(&args.resume)?;
    let profile = pipeline.extractor().extract(&resume_text);

    if args.json {
        print_json(&profile);
    } else {
        render_profile(&profile);
    }
    Ok(())
}

fn screen_text(
    settings: &ScreeningSettings,
    resume_text: String,
) -> Result<ScreeningRecord, AppError> {
    settings.scoring.validate()?;
    let pipeline = build_pipeline(settings)?;
    let catalog = load_catalog(settings, &pipeline)?;
    let service = ScreeningService::new(
        pipeline,
        Arc::new(InMemoryScreeningRepository::default()),
        catalog,
    );
    let record = service.screen(ScreeningRequest {
        resume_text,
        jobs: None,
    })?;
    Ok(record)
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(rendered) => println!("{rendered}"),
        Err(err) => eprintln!("failed to render JSON output: {err}"),
    }
}

fn render_profile(profile: &Profile) {
    println!("Candidate: {}", profile.name);
    if !profile.email.is_empty() {
        println!("  Email: {}", profile.email);
    }
    if !profile.phone.is_empty() {
        println!("  Phone: {}", profile.phone);
    }
    println!(
        "  Experience: {} years ({})",
        profile.experience_years,
        profile.seniority.label()
    );
    if profile.skills.is_empty() {
        println!("  Skills: none detected");
    } else {
        let skills: Vec<&str> = profile.skills.iter().map(String::as_str).collect();
        println!("  Skills: {}", skills.join(", "));
    }
    match profile.highest_degree() {
        Some(degree) => println!("  Education: {}", degree.label()),
        None => println!("  Education: not stated"),
    }
    println!("  Extraction confidence: {:.2}", profile.confidence);
}

fn render_screening(record: &ScreeningRecord) {
    println!("Screening {}", record.screening_id);
    render_profile(&record.profile);
    println!(
        "\nTop {} of {} job postings",
        record.matches.len(),
        record.jobs_considered
    );
    for result in &record.matches {
        render_match(result);
    }
}

fn render_match(result: &MatchResult) {
    println!(
        "\n#{} {} [{}] {:.1}% {} ({})",
        result.rank,
        result.job_title,
        result.job_id,
        result.score,
        result.decision.label(),
        result.decision.summary()
    );
    println!(
        "  skills {:.1}% | experience {:.1}% | education {:.1}% | keywords {:.1}%",
        result.breakdown.skills,
        result.breakdown.experience,
        result.breakdown.education,
        result.breakdown.keywords
    );
    if !result.missing_skills.is_empty() {
        println!("  Missing: {}", result.missing_skills.join(", "));
    }
    println!("  {}", result.rationale);
}

#[cfg(test)]
fn screen_with_catalog(
    settings: &ScreeningSettings,
    resume_text: &str,
    catalog_csv: &str,
) -> Result<ScreeningRecord, AppError> {
    use resume_screener::workflows::catalog::JobCatalogImporter;

    let pipeline = build_pipeline(settings)?;
    let catalog =
        JobCatalogImporter::from_reader(std::io::Cursor::new(catalog_csv), pipeline.extractor())?;
    let service = ScreeningService::new(
        pipeline,
        Arc::new(InMemoryScreeningRepository::default()),
        catalog,
    );
    Ok(service.screen(ScreeningRequest {
        resume_text: resume_text.to_string(),
        jobs: None,
    })?)
}
