use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "arcmark", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write arcade-mark.png and arcade-mark.icns under <root>/assets/.
    Build(BuildArgs),
    /// Render a single logo PNG at an arbitrary size.
    Png(PngArgs),
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Project root; artifacts land in its assets/ subdirectory.
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

#[derive(Parser, Debug)]
struct PngArgs {
    /// Edge length in pixels.
    #[arg(long, default_value_t = 512)]
    size: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Build(args) => cmd_build(args),
        Command::Png(args) => cmd_png(args),
    }
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let paths = arcmark::write_assets(&args.root)?;
    eprintln!("wrote {}", paths.mark_png.display());
    eprintln!("wrote {}", paths.mark_icns.display());
    Ok(())
}

fn cmd_png(args: PngArgs) -> anyhow::Result<()> {
    let canvas = arcmark::compose_logo(args.size)?;
    let bytes = arcmark::encode_png(&canvas)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &bytes)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
