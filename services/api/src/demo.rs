use crate::infra::InMemoryLeadRepository;
use clap::Args;
use lead_intake::error::AppError;
use lead_intake::intake::{
    LeadCsvImporter, LeadIntakeService, LeadSubmission, PriorityScorer, ScoreBreakdown,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct TriageRankArgs {
    /// Lead export to score (headed CSV)
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Show only the top N rows
    #[arg(long)]
    pub(crate) top: Option<usize>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional lead export to seed the demo instead of the built-in samples
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

pub(crate) fn run_triage_rank(args: TriageRankArgs) -> Result<(), AppError> {
    let submissions = LeadCsvImporter::from_path(&args.csv)?;

    let mut rows: Vec<(LeadSubmission, ScoreBreakdown)> = submissions
        .into_iter()
        .map(|form| {
            let breakdown = PriorityScorer.score_form(&form);
            (form, breakdown)
        })
        .collect();
    rows.sort_by(|a, b| b.1.total().cmp(&a.1.total()));

    let shown = args.top.unwrap_or(rows.len()).min(rows.len());
    println!("Triage ranking: {} of {} leads", shown, rows.len());
    for (position, (form, breakdown)) in rows.iter().take(shown).enumerate() {
        println!(
            "{:>3}. [{:>3}] {} | budget: {} | size: {} | deadline: {}",
            position + 1,
            breakdown.total(),
            display_name(form),
            field(&form.budget),
            field(&form.company_size),
            field(&form.deadline),
        );
        println!(
            "     factors: budget {}, company size {}, urgency {}",
            breakdown.budget, breakdown.company_size, breakdown.urgency
        );
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let submissions = match args.csv {
        Some(path) => LeadCsvImporter::from_path(path)?,
        None => sample_leads(),
    };

    let repository = Arc::new(InMemoryLeadRepository::default());
    let service = LeadIntakeService::new(repository);

    println!("Lead intake demo");
    println!("\nIntake");
    for form in submissions {
        let record = service.submit(form)?;
        println!(
            "- lead {} scored {} at submission",
            record.id.0, record.priority_score
        );
    }

    let ranked = service.ranked()?;
    println!("\nRanked triage listing");
    for (position, record) in ranked.iter().enumerate() {
        println!(
            "{:>3}. [{:>3}] {} | budget: {} | size: {} | deadline: {}",
            position + 1,
            record.priority_score,
            display_name(&record.form),
            field(&record.form.budget),
            field(&record.form.company_size),
            field(&record.form.deadline),
        );
    }

    Ok(())
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("(none)")
}

fn display_name(form: &LeadSubmission) -> String {
    let name = [&form.last_name, &form.first_name]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if name.is_empty() {
        "(anonymous)".to_string()
    } else {
        name
    }
}

fn sample_leads() -> Vec<LeadSubmission> {
    vec![
        LeadSubmission {
            first_name: Some("Анна".to_string()),
            last_name: Some("Петрова".to_string()),
            business_niche: Some("логистика".to_string()),
            budget: Some("5000000".to_string()),
            company_size: Some("500+".to_string()),
            deadline: Some("1 неделя".to_string()),
            ..Default::default()
        },
        LeadSubmission {
            first_name: Some("Игорь".to_string()),
            last_name: Some("Соколов".to_string()),
            budget: Some("500000-1000000".to_string()),
            company_size: Some("100-500".to_string()),
            comments: Some("очень срочно нужно".to_string()),
            ..Default::default()
        },
        LeadSubmission {
            first_name: Some("Dmitry".to_string()),
            budget: Some("300000".to_string()),
            company_size: Some("20".to_string()),
            deadline: Some("в следующем месяце".to_string()),
            ..Default::default()
        },
        LeadSubmission {
            last_name: Some("Kim".to_string()),
            budget: Some("call us".to_string()),
            deadline: Some("next week".to_string()),
            ..Default::default()
        },
        LeadSubmission::default(),
    ]
}
