use clap::Args;
use diabeat::assessment::{
    Advance, Answer, AssessmentFlow, Field, RiskResult, RiskScore, ScoreBreakdown,
};
use diabeat::content;
use diabeat::error::AppError;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON list of answers (`[{"field": "age", "value": "52"}, ...]`) to replay
    /// instead of prompting
    #[arg(long)]
    pub(crate) answers: Option<PathBuf>,
    /// Print how each risk factor contributed before the results
    #[arg(long)]
    pub(crate) breakdown: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ResultsArgs {
    /// Risk score between 0 and 100
    #[arg(long, value_parser = crate::infra::parse_score)]
    pub(crate) score: u16,
}

pub(crate) fn run_assessment(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        answers,
        breakdown: show_breakdown,
    } = args;

    let breakdown = match answers {
        Some(path) => replay(&path)?,
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            interview(&mut stdin.lock(), &mut stdout.lock())?
        }
    };

    let mut out = io::stdout().lock();
    if show_breakdown {
        render_breakdown(&mut out, &breakdown)?;
    }
    // Only the score crosses into the results view.
    render_result(&mut out, &RiskResult::from_score(breakdown.score))?;
    Ok(())
}

pub(crate) fn run_results(args: ResultsArgs) -> Result<(), AppError> {
    let score = RiskScore::new(args.score)?;
    render_result(&mut io::stdout().lock(), &RiskResult::from_score(score))?;
    Ok(())
}

pub(crate) fn print_faq() {
    let page = content::faq();
    println!("{}", page.title);
    println!("{}\n", page.intro);
    for entry in page.entries {
        println!("Q: {}", entry.question);
        println!("A: {}\n", entry.answer);
    }
}

fn replay(path: &Path) -> Result<ScoreBreakdown, AppError> {
    let raw = fs::read_to_string(path)?;
    let answers: Vec<Answer> = serde_json::from_str(&raw)?;
    info!(count = answers.len(), "replaying recorded answers");

    let mut flow = AssessmentFlow::new();
    for answer in answers {
        flow.record(answer)?;
    }
    Ok(flow.finish()?)
}

enum Reply {
    Answer(Answer),
    Keep,
    Back,
}

/// Walks the questionnaire one step at a time. Typing `back` returns to the
/// previous step; an empty line keeps an answer given earlier.
fn interview<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<ScoreBreakdown, AppError> {
    let mut flow = AssessmentFlow::new();

    'steps: loop {
        writeln!(
            output,
            "\nStep {} of {}: {}",
            flow.current_step(),
            flow.total_steps(),
            flow.step_title()
        )?;

        for &field in flow.current_fields() {
            match ask(input, output, field, flow.answers().is_answered(field))? {
                Reply::Answer(answer) => flow.record(answer)?,
                Reply::Keep => {}
                Reply::Back => {
                    flow.retreat();
                    continue 'steps;
                }
            }
        }

        match flow.advance_with_breakdown() {
            (_, Some(breakdown)) => return Ok(breakdown),
            (Advance::Blocked { missing }, None) => {
                let names: Vec<_> = missing.iter().map(|field| field.prompt()).collect();
                writeln!(output, "Please complete: {}", names.join(", "))?;
            }
            _ => {}
        }
    }
}

fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    field: Field,
    answered: bool,
) -> Result<Reply, AppError> {
    loop {
        writeln!(output, "{}", field.prompt())?;
        if let Some(hint) = field.hint() {
            writeln!(output, "  ({hint})")?;
        }
        let choices = field.choices();
        for (index, choice) in choices.iter().enumerate() {
            writeln!(output, "  {}) {}", index + 1, choice.label)?;
        }
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before the assessment was complete",
            )
            .into());
        }

        let reply = line.trim();
        if reply.eq_ignore_ascii_case("back") {
            return Ok(Reply::Back);
        }
        if reply.is_empty() {
            if answered {
                return Ok(Reply::Keep);
            }
            writeln!(output, "An answer is required.")?;
            continue;
        }

        // Choices accept their list number or their wire value.
        let value = reply
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .and_then(|index| choices.get(index))
            .map(|choice| choice.value)
            .unwrap_or(reply);

        match Answer::parse(field, value) {
            Ok(answer) => return Ok(Reply::Answer(answer)),
            Err(_) => writeln!(output, "Please pick one of the listed options.")?,
        }
    }
}

fn render_breakdown<W: Write>(out: &mut W, breakdown: &ScoreBreakdown) -> io::Result<()> {
    writeln!(out, "\nScore breakdown")?;
    if breakdown.components.is_empty() {
        writeln!(out, "  no risk factors applied")?;
    }
    for component in &breakdown.components {
        writeln!(out, "  +{:>2}  {}", component.points, component.notes)?;
    }
    if u16::from(breakdown.score.value()) < breakdown.raw_total {
        writeln!(
            out,
            "  total {} capped at {}",
            breakdown.raw_total, breakdown.score
        )?;
    }
    Ok(())
}

fn render_result<W: Write>(out: &mut W, result: &RiskResult) -> io::Result<()> {
    writeln!(out, "\nYour Diabetes Risk Assessment")?;
    writeln!(out, "{} / 100 - {} Risk", result.score, result.label)?;
    writeln!(out, "{}", result.description)?;
    writeln!(out, "\nRecommendations")?;
    for recommendation in &result.recommendations {
        writeln!(out, "  - {recommendation}")?;
    }
    writeln!(out, "\n{}", result.disclaimer)?;
    Ok(())
}
