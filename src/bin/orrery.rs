use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use orrery::{
    Millis, SceneBuilder, Subject, Viewport,
    layout::BACKGROUND_STAR_COUNT,
    scene::{mutuals_sequencer, profile_sequencer},
};

#[derive(Parser, Debug)]
#[command(name = "orrery", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out subjects into a scene and print it as JSON.
    Layout(LayoutArgs),
    /// Print the phases a scene script has fired by a given instant.
    Timeline(TimelineArgs),
    /// Print a backdrop star field as JSON.
    Background(BackgroundArgs),
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input subjects JSON (an array of profile records).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Determinism seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 1080)]
    height: u32,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    /// Scene script to inspect.
    #[arg(long, value_enum)]
    scene: SceneChoice,

    /// Milliseconds since the forward trigger.
    #[arg(long)]
    at: u64,
}

#[derive(Parser, Debug)]
struct BackgroundArgs {
    /// Number of backdrop dots.
    #[arg(long, default_value_t = BACKGROUND_STAR_COUNT)]
    count: usize,

    /// Determinism seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SceneChoice {
    Mutuals,
    Profile,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Timeline(args) => cmd_timeline(args),
        Command::Background(args) => cmd_background(args),
    }
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let f = File::open(&args.in_path)
        .with_context(|| format!("open subjects '{}'", args.in_path.display()))?;
    let subjects: Vec<Subject> =
        serde_json::from_reader(BufReader::new(f)).context("parse subjects JSON")?;

    let scene = SceneBuilder::new(Viewport::new(args.width, args.height))
        .seed(args.seed)
        .subjects(subjects)
        .build()?;

    println!("{}", serde_json::to_string_pretty(&scene)?);
    Ok(())
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let fired = match args.scene {
        SceneChoice::Mutuals => {
            let mut seq = mutuals_sequencer();
            seq.open(Millis(0));
            serde_json::to_value(seq.poll(Millis(args.at)))?
        }
        SceneChoice::Profile => {
            let mut seq = profile_sequencer();
            seq.open(Millis(0));
            serde_json::to_value(seq.poll(Millis(args.at)))?
        }
    };
    println!("{}", serde_json::to_string_pretty(&fired)?);
    Ok(())
}

fn cmd_background(args: BackgroundArgs) -> anyhow::Result<()> {
    let field = orrery::background_field(args.count, args.seed);
    println!("{}", serde_json::to_string_pretty(&field)?);
    Ok(())
}
