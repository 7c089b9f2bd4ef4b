use clap::Args;
use mindwell::error::AppError;
use mindwell::support::assessment::{AnswerSet, AssessmentCatalog};
use mindwell::support::resources::{CRISIS_PROMPT, HOTLINES};
use mindwell::support::risk::{classify, respond_for, DISCLAIMER};

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Assessment slug, e.g. phq-9 or gad-7
    #[arg(long)]
    pub(crate) questionnaire: String,
    /// Comma-separated answers as QUESTION=VALUE pairs, e.g. "1=2,2=0,3=1"
    #[arg(long, value_parser = crate::infra::parse_answers)]
    pub(crate) answers: AnswerSet,
}

#[derive(Args, Debug)]
pub(crate) struct ChatArgs {
    /// Message to classify and answer
    #[arg(long)]
    pub(crate) message: String,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        questionnaire,
        answers,
    } = args;

    let catalog = AssessmentCatalog::standard();
    catalog.validate()?;
    let instrument = catalog.get(&questionnaire).ok_or_else(|| {
        let known: Vec<String> = catalog
            .summaries()
            .into_iter()
            .map(|summary| summary.slug)
            .collect();
        AppError::Usage(format!(
            "unknown assessment '{questionnaire}' (available: {})",
            known.join(", ")
        ))
    })?;

    let outcome = instrument.score(&answers)?;

    println!("{} ({})", instrument.name, instrument.slug);
    println!(
        "Score: {} / {} - {}",
        outcome.total, instrument.scoring.max_score, outcome.band.severity
    );
    println!("{}", outcome.band.description);
    println!("Recommendation: {}", outcome.band.recommendation);

    if outcome.escalating {
        println!("\n{CRISIS_PROMPT}");
        for hotline in HOTLINES {
            println!(
                "  - {}: {} ({})",
                hotline.name, hotline.contact, hotline.available
            );
        }
    }

    Ok(())
}

pub(crate) fn run_chat(args: ChatArgs) -> Result<(), AppError> {
    let ChatArgs { message } = args;

    let tier = classify(&message);
    println!("Risk tier: {}", tier.label());
    println!("\n{}", respond_for(tier, &message));
    println!("\n{DISCLAIMER}");

    Ok(())
}
