use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

use articulate::{
    AnimationClock, ClockSettings, DEFAULT_PHASE_STEP, MeshSink, PoseComposer, Rig,
    TessellationSettings, Transform, write_obj,
};

#[derive(Parser, Debug)]
#[command(name = "articulate", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the built-in rig as JSON.
    Rig(RigArgs),
    /// Compose one pose and write it as JSON.
    Pose(PoseArgs),
    /// Tessellate one pose and write it as Wavefront OBJ.
    Obj(ObjArgs),
}

#[derive(Parser, Debug)]
struct RigArgs {
    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FrameSelect {
    /// Rig JSON to load instead of the built-in rig.
    #[arg(long)]
    rig: Option<PathBuf>,

    /// Number of clock ticks from phase 0.
    #[arg(long, conflicts_with = "phase")]
    frame: Option<u64>,

    /// Explicit phase.
    #[arg(long)]
    phase: Option<f64>,

    /// Phase increment per tick.
    #[arg(long, default_value_t = DEFAULT_PHASE_STEP)]
    step: f64,
}

impl FrameSelect {
    fn phase(&self) -> f64 {
        match (self.phase, self.frame) {
            (Some(p), _) => p,
            (None, Some(n)) => AnimationClock::phase_at_frame(ClockSettings { step: self.step }, n),
            (None, None) => 0.0,
        }
    }

    fn composer(&self) -> anyhow::Result<PoseComposer> {
        let rig = match &self.rig {
            Some(path) => Rig::from_path(path)
                .with_context(|| format!("load rig '{}'", path.display()))?,
            None => Rig::doduo(),
        };
        Ok(PoseComposer::new(rig)?)
    }
}

#[derive(Parser, Debug)]
struct PoseArgs {
    #[command(flatten)]
    select: FrameSelect,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ObjArgs {
    #[command(flatten)]
    select: FrameSelect,

    /// Ring and sphere resolution, clamped to 3..=1024.
    #[arg(long)]
    segments: Option<u32>,

    /// Output OBJ path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Rig(args) => cmd_rig(args),
        Command::Pose(args) => cmd_pose(args),
        Command::Obj(args) => cmd_obj(args),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_rig(args: RigArgs) -> anyhow::Result<()> {
    let json = Rig::doduo().to_json_pretty()?;
    emit_text(args.out.as_deref(), &json)
}

fn cmd_pose(args: PoseArgs) -> anyhow::Result<()> {
    let composer = args.select.composer()?;
    let pose = composer.compose(args.select.phase(), Transform::IDENTITY);
    let json = serde_json::to_string_pretty(&pose).context("serialize pose")?;
    emit_text(args.out.as_deref(), &json)
}

fn cmd_obj(args: ObjArgs) -> anyhow::Result<()> {
    let composer = args.select.composer()?;
    let settings = match args.segments {
        Some(n) => TessellationSettings::uniform(n),
        None => TessellationSettings::default(),
    };
    let mut sink = MeshSink::new(settings);
    composer.render_frame(args.select.phase(), Transform::IDENTITY, &mut sink)?;

    ensure_parent_dir(&args.out)?;
    let file = std::fs::File::create(&args.out)
        .with_context(|| format!("create obj '{}'", args.out.display()))?;
    write_obj(sink.mesh(), std::io::BufWriter::new(file))
        .with_context(|| format!("write obj '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn emit_text(out: Option<&Path>, text: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            ensure_parent_dir(path)?;
            std::fs::write(path, format!("{text}\n"))
                .with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
