use crate::infra::quiz_service;
use clap::Args;
use persona_quiz::config::AppConfig;
use persona_quiz::error::AppError;
use persona_quiz::quiz::{
    CompatibilityEntry, Dimension, QuestionView, QuizMode, RawAnswer, ScoreReport, ScoreRequest,
    TypeView,
};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct QuestionsArgs {
    /// Quiz mode; "short" lists shared questions, anything else the full set
    #[arg(long, default_value = "short")]
    pub(crate) mode: String,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON object mapping question ids to answers (1-5)
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Quiz mode used to select the scored questions
    #[arg(long, default_value = "short")]
    pub(crate) mode: String,
    /// Print the raw JSON report instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = quiz_service(&config)?;
    let mode = QuizMode::from_selector(&args.mode);

    print!("{}", format_questions(mode, &service.list_questions(mode)));
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        mode,
        json,
    } = args;

    let config = AppConfig::load()?;
    let service = quiz_service(&config)?;

    let reader = BufReader::new(File::open(answers)?);
    let answers: BTreeMap<String, RawAnswer> = serde_json::from_reader(reader)?;
    let request = ScoreRequest {
        mode: Some(QuizMode::from_selector(&mode)),
        answers: Some(answers),
    };
    let report = service.score(request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_report(&report));
    }
    Ok(())
}

pub(crate) fn run_types() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = quiz_service(&config)?;

    print!("{}", format_types(&service.type_directory()));
    Ok(())
}

fn format_questions(mode: QuizMode, questions: &[QuestionView]) -> String {
    let mut lines = vec![format!("{} quiz: {} questions", mode, questions.len())];
    for question in questions {
        lines.push(format!(
            "- [{}] ({}) {}",
            question.id, question.dimension, question.text
        ));
    }
    lines.join("\n") + "\n"
}

fn format_types(directory: &BTreeMap<String, TypeView>) -> String {
    let mut lines = Vec::with_capacity(directory.len());
    for (code, view) in directory {
        lines.push(format!("{code}  {}: {}", view.name, view.description));
    }
    lines.join("\n") + "\n"
}

fn format_report(report: &ScoreReport) -> String {
    let mut lines = vec![format!("Type: {} ({})", report.type_code, report.type_name)];
    if !report.description.is_empty() {
        lines.push(report.description.clone());
    }

    lines.push(String::new());
    lines.push("Dimension scores".to_string());
    for dimension in Dimension::ordered() {
        let score = report.scores.get(&dimension).copied().unwrap_or_default();
        let confidence = report.confidence.get(&dimension).copied().unwrap_or_default();
        let letter = report
            .type_letters
            .get(&dimension)
            .copied()
            .unwrap_or(dimension.high_letter());
        lines.push(format!(
            "- {} ({}): {:.1} -> {} (confidence {:.1})",
            dimension.label(),
            dimension.code(),
            score,
            letter,
            confidence
        ));
    }

    push_list(&mut lines, "Strengths", &report.strengths);
    push_list(&mut lines, "Weaknesses", &report.weaknesses);
    push_matches(&mut lines, "Most compatible", &report.compatible);
    push_matches(&mut lines, "Least compatible", &report.incompatible);

    lines.join("\n") + "\n"
}

fn push_list(lines: &mut Vec<String>, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(heading.to_string());
    lines.extend(items.iter().map(|item| format!("- {item}")));
}

fn push_matches(lines: &mut Vec<String>, heading: &str, entries: &[CompatibilityEntry]) {
    lines.push(String::new());
    if entries.is_empty() {
        lines.push(format!("{heading}: none"));
        return;
    }
    lines.push(heading.to_string());
    for entry in entries {
        lines.push(format!(
            "- {} {} ({}/{} letters shared)",
            entry.code,
            entry.name,
            entry.matches,
            Dimension::COUNT
        ));
    }
}
