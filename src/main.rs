use clap::Parser;
use shortseg::{init_logging, run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose)?;

    let summary = run(&cli)?;

    println!(
        "Nb of detected short segments : {}",
        summary.report.short_segments
    );
    println!("Output written to {}", summary.output.display());

    Ok(())
}
