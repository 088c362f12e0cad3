use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sketchbloom", version)]
struct Cli {
    /// Log verbosity on stderr (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a paint script against a fresh surface and print the reveal state.
    Paint(PaintArgs),
    /// Export the letter as a PNG.
    Letter(LetterArgs),
    /// Drive a scripted run through every stage and print each event.
    Walkthrough(WalkthroughArgs),
}

#[derive(Parser, Debug)]
struct PaintArgs {
    /// Paint script JSON: `{ "surface": {x0,y0,x1,y1}?, "events": [PaintInput...] }`.
    #[arg(long)]
    script: PathBuf,

    /// Session config JSON. Defaults reproduce the reference greeting.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the final paint surface as PNG.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct LetterArgs {
    /// Output PNG path.
    #[arg(long, default_value = sketchbloom::LETTER_DOWNLOAD_NAME)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct WalkthroughArgs {
    /// Session config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also save the letter from the letter stage.
    #[arg(long)]
    letter_out: Option<PathBuf>,
}

#[derive(serde::Deserialize, Debug)]
struct PaintScript {
    #[serde(default)]
    surface: Option<sketchbloom::Rect>,
    events: Vec<sketchbloom::PaintInput>,
}

#[derive(serde::Serialize, Debug)]
struct PaintReport {
    percent: f64,
    revealed: bool,
    strokes: u64,
    display_progress: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Paint(args) => cmd_paint(args),
        Command::Letter(args) => cmd_letter(args),
        Command::Walkthrough(args) => cmd_walkthrough(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_config(path: Option<&Path>) -> anyhow::Result<sketchbloom::SessionConfig> {
    match path {
        Some(p) => Ok(sketchbloom::SessionConfig::from_json_file(p)?),
        None => Ok(sketchbloom::SessionConfig::default()),
    }
}

fn read_script(path: &Path) -> anyhow::Result<PaintScript> {
    let f = File::open(path).with_context(|| format!("open paint script '{}'", path.display()))?;
    let r = BufReader::new(f);
    let script: PaintScript =
        serde_json::from_reader(r).with_context(|| "parse paint script JSON")?;
    Ok(script)
}

fn cmd_paint(args: PaintArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    cfg.validate()?;
    let script = read_script(&args.script)?;

    let mut stage = sketchbloom::PaintStage::new(sketchbloom::PaintSettings::from_config(&cfg));
    if let Some(rect) = script.surface {
        stage.set_surface(sketchbloom::SurfaceRect::new(rect));
    }
    for ev in &script.events {
        stage.handle(ev);
    }

    let state = stage.reveal();
    let report = PaintReport {
        percent: state.percent,
        revealed: state.revealed,
        strokes: stage.controller().strokes_applied(),
        display_progress: stage.display_progress(),
    };
    println!("{}", serde_json::to_string(&report)?);

    if let Some(out) = &args.out {
        let buf = stage
            .controller()
            .buffer()
            .context("paint surface was not mounted")?;
        buf.save_png(out)?;
        eprintln!("wrote {}", out.display());
    }
    Ok(())
}

fn cmd_letter(args: LetterArgs) -> anyhow::Result<()> {
    sketchbloom::LetterDocument::standard().export_png(&args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_walkthrough(args: WalkthroughArgs) -> anyhow::Result<()> {
    use sketchbloom::{Experience, FinaleResponse, Point, SessionTime, Stage};

    let cfg = read_config(args.config.as_deref())?;
    let (width, height) = (cfg.canvas.width, cfg.canvas.height);
    let mut exp = Experience::new(cfg)?;
    let mut now = 0u64;

    while exp.current() != Stage::Finale {
        match exp.current() {
            Stage::Hero | Stage::Finale => {}
            Stage::Timeline => {
                if let Some(tl) = exp.timeline_mut() {
                    for i in 0..sketchbloom::MILESTONES.len() {
                        tl.reveal(i, SessionTime(now));
                    }
                }
            }
            Stage::Sunflower => {
                if let Some(sf) = exp.sunflower_mut() {
                    for p in &sketchbloom::PETALS {
                        sf.reveal_petal(p.id, SessionTime(now));
                    }
                }
            }
            Stage::Paint => {
                if let Some(paint) = exp.paint_mut() {
                    let step = paint.controller().settings().brush.radius.max(1.0) / 2.0;
                    let mut y = 0.0;
                    while y < f64::from(height) && !paint.reveal().revealed {
                        let mut x = 0.0;
                        while x < f64::from(width) {
                            paint.stroke_at(Point::new(x, y));
                            x += step;
                        }
                        y += step;
                    }
                }
            }
            Stage::Letter => {
                if let (Some(out), Some(letter)) = (&args.letter_out, exp.letter_mut()) {
                    if letter.download(out) {
                        eprintln!("wrote {}", out.display());
                    }
                }
            }
        }

        let stage = exp.current();
        while !exp.request_continue(SessionTime(now)) {
            now += 100;
            emit(now, exp.tick(SessionTime(now)))?;
            if now > 60_000 {
                anyhow::bail!("stage '{stage}' never offered continue");
            }
        }
        while exp.current() == stage {
            now += 100;
            emit(now, exp.tick(SessionTime(now)))?;
        }
    }

    exp.finale_mut().respond(FinaleResponse::Yes, SessionTime(now));
    let end = now + 4_000;
    while now < end {
        now += 50;
        emit(now, exp.tick(SessionTime(now)))?;
    }
    exp.close_finale();
    Ok(())
}

fn emit(now: u64, events: Vec<sketchbloom::ExperienceEvent>) -> anyhow::Result<()> {
    for ev in events {
        println!(
            "{}",
            serde_json::json!({ "t_ms": now, "event": serde_json::to_value(&ev)? })
        );
    }
    Ok(())
}
