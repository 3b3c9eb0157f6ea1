use crate::infra::FileSink;
use clap::Args;
use router_checklist::checklist::export::write_catalog_csv;
use router_checklist::checklist::locale::strings;
use router_checklist::checklist::{
    catalog_view, AssessmentSession, ControlKey, Language, Selections, TextField,
};
use router_checklist::config::AppConfig;
use router_checklist::error::AppError;
use router_checklist::telemetry;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Language for control descriptions (en or km). Defaults to APP_DEFAULT_LANGUAGE.
    #[arg(long)]
    pub(crate) lang: Option<Language>,
    /// Emit the catalog as CSV on stdout
    #[arg(long)]
    pub(crate) csv: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// Language for the brief and status lines (en or km)
    #[arg(long)]
    pub(crate) lang: Option<Language>,
    /// Mark a control as checked (repeatable), e.g. --check pr_mfa
    #[arg(long = "check")]
    pub(crate) checks: Vec<ControlKey>,
    /// Blank out a preset text field (repeatable), e.g. --clear hardware
    #[arg(long = "clear")]
    pub(crate) clears: Vec<TextField>,
    /// Auto-check essentials until the target score is reached
    #[arg(long)]
    pub(crate) essentials: bool,
    /// Also write the brief to this file
    #[arg(long)]
    pub(crate) brief_out: Option<PathBuf>,
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    if args.csv {
        write_catalog_csv(io::stdout())?;
        return Ok(());
    }

    let config = AppConfig::load()?;
    let language = args.lang.unwrap_or(config.checklist.default_language);
    render_catalog(language, &mut io::stdout().lock())?;
    Ok(())
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let language = args.lang.unwrap_or(config.checklist.default_language);
    let session = build_session(language, &args);
    let sink = args.brief_out.map(|path| FileSink { path });

    render_assessment(&session, sink.as_ref(), &mut io::stdout().lock())?;
    Ok(())
}

fn render_catalog<W: Write>(language: Language, out: &mut W) -> io::Result<()> {
    let text = strings(language);
    let view = catalog_view(language, &Selections::cleared());

    writeln!(out, "{} ({} controls)", text.app_title, view.total)?;
    if !text.app_subtitle.is_empty() {
        writeln!(out, "{}", text.app_subtitle)?;
    }
    for group in &view.groups {
        writeln!(out, "\n{} {} ({})", group.code, group.label, group.controls.len())?;
        for control in &group.controls {
            writeln!(out, "  - {}: {}", control.key, control.description)?;
        }
    }

    Ok(())
}

/// Clears run before checks, and essentials run last so they see both.
fn build_session(language: Language, args: &AssessArgs) -> AssessmentSession {
    let mut session = AssessmentSession::new(language);
    for field in &args.clears {
        session.set_field(*field, "");
    }
    for key in &args.checks {
        session.toggle(*key, true);
    }
    if args.essentials {
        session.apply_essentials();
    }
    session
}

fn render_assessment<W: Write>(
    session: &AssessmentSession,
    sink: Option<&FileSink>,
    out: &mut W,
) -> io::Result<()> {
    let text = strings(session.language());
    let result = session.result();
    let verdict = if result.passed {
        text.brief.passed
    } else {
        text.brief.not_passed
    };

    writeln!(out, "{}: {}", text.language, session.language())?;
    writeln!(
        out,
        "Score {}/100 (inputs {} + controls {}) | {}",
        result.score, result.required_score, result.control_score, verdict
    )?;
    writeln!(out, "{}", text.pass_rule)?;
    for line in session.status_lines() {
        let marker = if line.ok { "ok" } else { "!!" };
        writeln!(out, "  [{}] {}", marker, line.label)?;
    }
    writeln!(out, "Category progress:")?;
    for progress in session.category_progress() {
        writeln!(
            out,
            "  - {} {}: {}/{}",
            progress.code, progress.label, progress.checked, progress.total
        )?;
    }

    writeln!(out, "\n{}", session.brief())?;

    if let Some(sink) = sink {
        if session.share_brief(sink) {
            writeln!(out, "\n{} ({})", text.copied, sink.path.display())?;
        }
    }

    Ok(())
}
