mod cli;

use acejump_common::{AceJumpError, EventBus, Selection};
use acejump_config::AceJumpConfig;
use acejump_core::{
    ChannelKeystrokes, EditorHost, JumpCommand, JumpContext, JumpOutcome, Jumper, Keystroke,
    MemoryEditor, NoopDecorator,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// What gets printed after a jump.
#[derive(Debug, Serialize)]
struct JumpReport {
    command: &'static str,
    outcome: JumpOutcome,
    selection: Selection,
    status: Vec<String>,
}

fn load_config(args: &cli::Args) -> Result<AceJumpConfig, AceJumpError> {
    let config = match &args.config {
        Some(path) => acejump_config::load_config_from(path)?,
        None => acejump_config::load_config()?,
    };
    Ok(config)
}

fn run(args: &cli::Args, config: AceJumpConfig) -> Result<JumpReport, AceJumpError> {
    let Some(path) = &args.file else {
        return Err(AceJumpError::Other("no input file given".into()));
    };
    let text = std::fs::read_to_string(path)?;

    let selection = Selection::new(args.anchor.unwrap_or(args.cursor), args.cursor);
    let mut editor = MemoryEditor::new(&text).with_selection(selection);
    if !args.visible.is_empty() {
        editor = editor.with_visible_ranges(args.visible.clone());
    }
    tracing::info!(
        "Loaded {} ({} lines), command {}",
        path.display(),
        editor.line_count(),
        args.command
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let outcome = runtime.block_on(jump(&mut editor, config, &args.keys, args.command))?;

    Ok(JumpReport {
        command: args.command.id(),
        outcome,
        selection: editor.selection(),
        status: editor.status_log().to_vec(),
    })
}

async fn jump(
    editor: &mut MemoryEditor,
    config: AceJumpConfig,
    script: &str,
    command: JumpCommand,
) -> Result<JumpOutcome, AceJumpError> {
    let jumper = Jumper::new(config);
    let bus = EventBus::default();
    let mut events = bus.subscribe();
    let mut keys = ChannelKeystrokes::scripted(Keystroke::parse_script(script));
    let mut decorator = NoopDecorator;

    let outcome = jumper
        .jump(
            JumpContext {
                editor: Some(editor),
                decorator: &mut decorator,
                keys: &mut keys,
                events: &mut events,
            },
            command,
        )
        .await?;
    Ok(outcome)
}

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Load config before logging so the configured level applies
    let loaded = load_config(&args);
    let level = match &loaded {
        Ok(config) => config.logging.level.as_directive(),
        Err(_) => "acejump=info",
    };

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or(level);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "acejump=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("AceJump v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        AceJumpConfig::default()
    });

    if args.print_config {
        println!("{}", acejump_config::config_to_json(&config));
        return;
    }

    match run(&args, config) {
        Ok(report) => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!("Failed to serialize report: {e}");
                std::process::exit(1);
            }
        },
        Err(e) => {
            tracing::error!("Jump failed: {e}");
            eprintln!("acejump: {e}");
            std::process::exit(1);
        }
    }
}
