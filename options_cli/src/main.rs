use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use crossbeam_channel::bounded;
use options_core::protocol::Metadata;
use options_core::{
    tab_index, InboundMsg, MainLoop, OptionsAction, OptionsState, OptionsStore, OutboundMsg,
    INBOUND_CAP, OUTBOUND_CAP,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const STATE_ENV: &str = "INVOKE_OPTIONS_STATE";

#[derive(Parser, Debug)]
#[command(name = "options_cli", about = "Drive the generation options store from the shell")]
struct Args {
    /// Starting state (JSON snapshot). Falls back to $INVOKE_OPTIONS_STATE, then defaults.
    #[arg(long, value_name = "PATH", global = true)]
    state: Option<PathBuf>,

    #[arg(long, default_value_t = false, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the default options record.
    Defaults,
    /// Replay a JSON-lines action log ("-" reads stdin).
    Apply {
        #[arg(long, value_name = "PATH")]
        actions: String,
    },
    /// Import parameters from an image metadata record.
    Import {
        #[arg(long, value_name = "PATH")]
        metadata: PathBuf,

        #[arg(long, value_enum, default_value_t = ImportScope::All)]
        scope: ImportScope,
    },
    /// Print the index a tab name resolves to (-1 when unknown).
    Tab { name: String },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ImportScope {
    All,
    Text,
    Image,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match &args.command {
        Command::Defaults => print_state(&OptionsStore::new(), args.pretty),
        Command::Tab { name } => {
            println!("{}", tab_index(name));
            Ok(())
        }
        Command::Apply { actions } => {
            let store = load_store(args.state.as_deref())?;
            let raw = read_input(actions)?;
            let actions = parse_action_log(&raw)?;
            tracing::info!(count = actions.len(), "replaying actions");
            let state = replay(store, actions)?;
            print_state(&OptionsStore::with_state(state), args.pretty)
        }
        Command::Import { metadata, scope } => {
            let mut store = load_store(args.state.as_deref())?;
            let raw = std::fs::read_to_string(metadata)
                .with_context(|| format!("failed to read metadata file {}", metadata.display()))?;
            let meta: Metadata = serde_json::from_str(&raw)
                .with_context(|| format!("invalid metadata in {}", metadata.display()))?;
            tracing::info!(
                app_version = meta.app_version.as_deref().unwrap_or("unknown"),
                kind = ?meta.image.kind,
                "importing metadata"
            );
            let action = match scope {
                ImportScope::All => OptionsAction::SetAllParameters(meta),
                ImportScope::Text => OptionsAction::SetAllTextToImageParameters(meta),
                ImportScope::Image => OptionsAction::SetAllImageToImageParameters(meta),
            };
            store.dispatch(action);
            print_state(&store, args.pretty)
        }
    }
}

fn load_store(explicit: Option<&Path>) -> anyhow::Result<OptionsStore> {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => std::env::var_os(STATE_ENV).map(PathBuf::from),
    };
    let Some(path) = path else {
        return Ok(OptionsStore::new());
    };
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read state file {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded starting state");
    OptionsStore::from_json(&raw).with_context(|| format!("invalid state in {}", path.display()))
}

fn read_input(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read actions from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(source).with_context(|| format!("failed to read actions file {source}"))
}

fn parse_action_log(raw: &str) -> anyhow::Result<Vec<OptionsAction>> {
    let mut out = Vec::new();
    for (n, line) in raw.lines().enumerate() {
        let t = line.trim();
        if t.is_empty() || t.starts_with('#') {
            continue;
        }
        let action: OptionsAction = serde_json::from_str(t)
            .with_context(|| format!("line {}: invalid action", n + 1))?;
        out.push(action);
    }
    Ok(out)
}

fn replay(store: OptionsStore, actions: Vec<OptionsAction>) -> anyhow::Result<OptionsState> {
    let (in_tx, in_rx) = bounded(INBOUND_CAP);
    let (out_tx, out_rx) = bounded(OUTBOUND_CAP);
    let mut main_loop = MainLoop::with_store(store, in_rx, out_tx);
    let worker = std::thread::spawn(move || main_loop.run());

    for action in actions {
        in_tx
            .send(InboundMsg::Dispatch { action })
            .map_err(|_| anyhow::anyhow!("options loop stopped early"))?;
    }
    drop(in_tx);

    worker
        .join()
        .map_err(|_| anyhow::anyhow!("options loop panicked"))?;

    let OutboundMsg::Snapshot { revision, state } = out_rx
        .recv()
        .context("options loop exited without a snapshot")?;
    tracing::info!(revision, "replay complete");
    Ok(*state)
}

fn print_state(store: &OptionsStore, pretty: bool) -> anyhow::Result<()> {
    let out = if pretty {
        store.to_json_pretty()?
    } else {
        store.to_json()?
    };
    println!("{out}");
    Ok(())
}
