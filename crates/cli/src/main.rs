use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

use dupdirs_core::export;
use dupdirs_core::scanner::{ScanMsg, Scanner};
use dupdirs_core::{find_duplicates, FileTreeNode, Progress};

#[derive(Parser, Debug)]
#[command(
    name = "dupdirs",
    version,
    about = "Report directories that look like copies of each other (same total size, file count and directory count)"
)]
struct Args {
    /// Root directory to scan
    root: Option<PathBuf>,
    /// Also write the groups as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,
    /// Also write the groups as CSV to this path
    #[arg(long)]
    csv: Option<PathBuf>,
    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    dupdirs_core::logging::init_logging(args.verbose, args.quiet);

    let groups = match &args.root {
        Some(root) => {
            let tree = scan(root.clone())?;
            find_duplicates(&tree)
        }
        None => {
            debug!("no path given, nothing to scan");
            Vec::new()
        }
    };
    info!("{} duplicate groups", groups.len());

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    export::to_text(&groups, &mut out).context("writing report")?;
    out.flush().context("writing report")?;

    if let Some(path) = &args.json {
        let json = export::to_json(&groups);
        let text = serde_json::to_string_pretty(&json)?;
        std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    }
    if let Some(path) = &args.csv {
        let file = std::fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        export::to_csv(&groups, file).with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}

/// Run the scanner on a worker thread, printing diagnostics as they arrive.
fn scan(root: PathBuf) -> anyhow::Result<FileTreeNode> {
    let (tx, rx) = crossbeam_channel::unbounded::<ScanMsg>();
    let scanner = Scanner::new(Some(tx));
    let worker = std::thread::spawn(move || scanner.run(root));

    let mut progress = Progress::default();
    let mut tree = None;
    while let Ok(msg) = rx.recv() {
        match msg {
            ScanMsg::Progress(p) => progress = p,
            ScanMsg::Error(e) => eprintln!("{e}"),
            ScanMsg::Done(t) => {
                tree = Some(t);
                break;
            }
        }
    }
    worker
        .join()
        .map_err(|_| anyhow::anyhow!("scanner thread panicked"))?;

    info!("scanned {progress}");
    tree.context("scanner stopped without a result")
}
