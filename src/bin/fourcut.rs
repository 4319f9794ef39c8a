use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use fourcut::{
    Compositor, FrameCatalog, ImageSource, OutputSpec, Selection, download_file_name, load_all,
};

#[derive(Parser, Debug)]
#[command(name = "fourcut", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in frame styles.
    Frames,
    /// Composite four images into a photo-strip PNG.
    Compose(ComposeArgs),
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Frame style id (see `fourcut frames`).
    #[arg(long, default_value = "frame1")]
    frame: String,

    /// Render target resolution.
    #[arg(long, value_enum, default_value_t = SpecKind::Print)]
    spec: SpecKind,

    /// TTF/OTF font for header/footer text. Defaults to the system
    /// sans-serif stack.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Output PNG path. Defaults to `fourcut_<ISO-date>.png`.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Exactly four image references (file paths or data: URLs), top to bottom.
    #[arg(num_args = 4, required = true)]
    images: Vec<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SpecKind {
    /// 1000x2000, for the print dialog.
    Print,
    /// 1600x3200, for file download.
    Download,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frames => cmd_frames(),
        Command::Compose(args) => cmd_compose(args),
    }
}

fn cmd_frames() -> anyhow::Result<()> {
    for (id, style) in FrameCatalog::builtin().iter() {
        println!("{id}: \"{}\" / \"{}\"", style.header_text, style.footer_text);
    }
    Ok(())
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let catalog = FrameCatalog::builtin();
    let style = catalog.get(&args.frame)?;
    let spec = match args.spec {
        SpecKind::Print => OutputSpec::print(),
        SpecKind::Download => OutputSpec::download(),
    };

    let sources: Vec<ImageSource> = args
        .images
        .iter()
        .map(|s| {
            if s.starts_with("data:") {
                ImageSource::DataUrl(s.clone())
            } else {
                ImageSource::Path(PathBuf::from(s))
            }
        })
        .collect();
    let resolved = load_all(&sources);
    let selection = Selection::new(&[0, 1, 2, 3])?;

    let mut compositor = match &args.font {
        Some(path) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("read font '{}'", path.display()))?;
            Compositor::with_font(bytes)
        }
        None => Compositor::new(),
    };
    let composite = compositor.compose(&selection, &resolved, style, &spec)?;
    for slot in &composite.skipped {
        eprintln!("warning: slot {slot} rendered empty (image failed to load)");
    }

    let out = args.out.unwrap_or_else(|| {
        PathBuf::from(download_file_name(
            "fourcut",
            chrono::Local::now().date_naive(),
        ))
    });
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let png = fourcut::encode_png(&composite.strip)?;
    std::fs::write(&out, png).with_context(|| format!("write png '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}
