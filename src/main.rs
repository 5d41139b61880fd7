use clap::Parser;
use dissertation_tools::tasks;
use log::Level;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    task: Tasks,
}

#[derive(clap::Subcommand, Debug)]
enum Tasks {
    /// Install the Python packages the analysis environment needs
    ///
    /// Installs the analysis, notebook, dashboard, scraping and database
    /// package groups one after another with pip. A failed group is reported
    /// and skipped, the remaining groups are still installed.
    InstallDependencies(tasks::install_dependencies::InstallDepsArgs),

    /// Run the complete dissertation analytics pipeline
    ///
    /// Verifies the processed datasets are in place, runs the four analysis
    /// scripts in order and reports which tables, figures and dashboard
    /// components came out of it.
    RunPipeline(tasks::run_pipeline::RunPipelineArgs),

    /// Replace Unicode checkmarks in the analysis scripts with plain ASCII
    ///
    /// The Windows console chokes on the checkmark glyphs the scripts print.
    FixUnicode(tasks::fix_unicode::FixUnicodeArgs),

    /// Convert the enriched master dataset from Excel to CSV
    ConvertDataset(tasks::convert_dataset::ConvertDatasetArgs),

    /// Point the dashboard at the CSV dataset instead of the Excel workbook
    ///
    /// Companion to convert-dataset: rewrites the pandas read calls in the
    /// dashboard sources.
    FixDashboard(tasks::fix_dashboard::FixDashboardArgs),
}

fn main() -> anyhow::Result<()> {
    // init logging
    simple_logger::init_with_level(Level::Debug).unwrap();

    // parse command line arguments
    let args = Args::parse();

    match args.task {
        Tasks::InstallDependencies(t) => tasks::install_dependencies::run(t)?,
        Tasks::RunPipeline(t) => tasks::run_pipeline::run(t)?,
        Tasks::FixUnicode(t) => tasks::fix_unicode::run(t)?,
        Tasks::ConvertDataset(t) => tasks::convert_dataset::run(t)?,
        Tasks::FixDashboard(t) => tasks::fix_dashboard::run(t)?,
    };

    Ok(())
}
