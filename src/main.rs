// structviz: step-by-step data structure operations in the terminal

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use structviz::catalog::{self, Lesson, Topic};
use structviz::config::Config;
use structviz::script::ScriptSet;
use structviz::sequencer::Visualization;
use structviz::ui::App;
use structviz::viz::{ArrayAction, ArrayViz, ListAction, ListKind, ListViz};

#[derive(Parser, Debug)]
#[command(
    name = "structviz",
    version,
    about = "Step through data structure operations in the terminal"
)]
struct Args {
    /// Topic to open (arrays, linked-lists)
    #[arg(short, long)]
    topic: Option<Topic>,

    /// Operation id to open with (see --list)
    #[arg(short, long)]
    operation: Option<String>,

    /// Playback speed multiplier
    #[arg(long)]
    speed: Option<f64>,

    /// Linked list presentation (singly, doubly)
    #[arg(long)]
    list_kind: Option<ListKind>,

    /// TOML script replacing the topic's built-in operations
    #[arg(long)]
    script: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file (defaults to structviz.log in the temp directory)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the available operations and exit
    #[arg(long)]
    list: bool,
}

fn init_logging(path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(|| std::env::temp_dir().join("structviz.log"));
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    Ok(())
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // Command-line flags win over the file
    if let Some(topic) = args.topic {
        config.topic = topic;
    }
    if let Some(operation) = &args.operation {
        config.operation = Some(operation.clone());
    }
    if let Some(speed) = args.speed {
        config.speed = speed;
    }
    if let Some(kind) = args.list_kind {
        config.list_kind = kind;
    }
    if let Some(script) = &args.script {
        config.script = Some(script.clone());
    }

    Ok(config)
}

fn build_app(config: &Config) -> Result<App> {
    let base = config.base_interval;
    let script = |topic: Topic| config.script.as_ref().filter(|_| config.topic == topic);

    let mut arrays = match script(Topic::Arrays) {
        Some(path) => Lesson::from_script(
            ScriptSet::<ArrayAction>::load(path)?,
            |initial| initial.map(ArrayViz::new).unwrap_or_default(),
            base,
        )?,
        None => catalog::array_lesson(base)?,
    };

    let kind = config.list_kind;
    let mut lists = match script(Topic::LinkedLists) {
        Some(path) => Lesson::from_script(
            ScriptSet::<ListAction>::load(path)?,
            |initial| match initial {
                Some(values) => ListViz::new(values, kind),
                None => ListViz::default().with_kind(kind),
            },
            base,
        )?,
        None => catalog::list_lesson(kind, base)?,
    };

    if let Some(id) = &config.operation {
        match config.topic {
            Topic::Arrays => arrays.select_by_id(id)?,
            Topic::LinkedLists => lists.select_by_id(id)?,
        }
    }

    arrays.sequencer_mut().set_speed(config.speed);
    lists.sequencer_mut().set_speed(config.speed);

    Ok(App::new(arrays, lists, config.topic))
}

fn print_operations<V: Visualization>(topic: Topic, lesson: &Lesson<V>)
where
    V::Action: Clone,
{
    println!("{} ({})", topic.name(), topic.slug());
    for op in lesson.operations() {
        println!("  {:<14} {:<14} {} step(s)  {}", op.id(), op.name(), op.len(), op.description());
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.clone())?;

    let config = load_config(&args)?;
    tracing::info!(?config, "starting");

    let mut app = build_app(&config)?;

    if args.list {
        match config.topic {
            Topic::Arrays => print_operations(Topic::Arrays, &app.arrays),
            Topic::LinkedLists => print_operations(Topic::LinkedLists, &app.lists),
        }
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(%err, "ui loop failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
