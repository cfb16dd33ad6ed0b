use case_forms::error::Result;
use case_forms::runtime::{Effect, KeyBindings};
use case_forms::terminal::{Terminal, TerminalEvent};
use case_forms::ui::frame_json::form_to_json;
use case_forms::{FormDefinition, MultiStepForm, RenderFrame, Renderer};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{Level, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Fill in a multi-step form in the terminal and print the collected values
#[derive(Debug, Parser)]
#[command(name = "case-forms")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Form definition (YAML)
    definition: PathBuf,

    /// Log file; the terminal itself is taken by the form
    #[arg(long, default_value = "case-forms.log")]
    log_file: PathBuf,

    /// Start at this zero-based step instead of the one in the definition
    #[arg(long)]
    initial_step: Option<usize>,

    /// Print the final frame and form state as JSON instead of the values
    #[arg(long)]
    frame_json: bool,
}

enum Outcome {
    Submitted,
    Cancelled,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let _guard = setup_logging(&cli.log_file)?;

    let mut definition = FormDefinition::load(&cli.definition)?;
    if let Some(step) = cli.initial_step {
        definition.initial_step = step;
    }
    let mut form = definition.build()?;
    info!(
        definition = %cli.definition.display(),
        steps = form.steps().len(),
        "form loaded"
    );

    let mut terminal = Terminal::new()?;
    terminal.enter()?;
    let result = event_loop(&mut terminal, &mut form);
    terminal.leave()?;
    let (outcome, frame) = result?;

    match outcome {
        Outcome::Submitted => info!("form submitted, writing values"),
        Outcome::Cancelled => info!("form cancelled"),
    }
    let output = if cli.frame_json {
        form_to_json(&form, &frame, terminal.size())?
    } else {
        form.store().to_json()?
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn event_loop(
    terminal: &mut Terminal,
    form: &mut MultiStepForm,
) -> Result<(Outcome, RenderFrame)> {
    let bindings = KeyBindings::new();
    let mut frame = Renderer::render(form, terminal.size());
    terminal.draw(&frame)?;

    loop {
        if !terminal.poll(Duration::from_millis(100))? {
            continue;
        }
        let effects = match terminal.read_event()? {
            TerminalEvent::Key(key) => form.dispatch(bindings.resolve(key)),
            TerminalEvent::Resize { .. } => vec![Effect::RequestRender],
        };

        if effects.contains(&Effect::RequestRender) {
            frame = Renderer::render(form, terminal.size());
            terminal.draw(&frame)?;
        }
        if effects.contains(&Effect::Submitted) {
            return Ok((Outcome::Submitted, frame));
        }
        if effects.contains(&Effect::Exit) {
            return Ok((Outcome::Cancelled, frame));
        }
    }
}

fn setup_logging(log_path: &Path) -> Result<WorkerGuard> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    if let Some(parent) = log_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
        .init();

    Ok(guard)
}
