use clap::Parser;

use crate::utils::{
    pause_for_ack,
    pip::{self, PackageGroup},
    print_section,
};

#[derive(Parser, Debug)]
pub struct InstallDepsArgs {
    /// python interpreter used to run pip
    #[arg(long, default_value = "python")]
    python: String,

    /// do not install the WRDS/Postgres connectivity packages
    #[arg(long, action)]
    skip_database: bool,

    /// exit immediately instead of waiting for a keypress
    #[arg(long, action)]
    no_pause: bool,
}

pub fn run(args: InstallDepsArgs) -> anyhow::Result<()> {
    print_section("DISSERTATION ANALYTICS - ENVIRONMENT SETUP");
    println!("Installing the Python packages for the analysis scripts,");
    println!("notebooks, dashboard and data collection tools.");

    let mut groups: Vec<PackageGroup> = vec![
        pip::CORE_ANALYSIS,
        pip::NOTEBOOK,
        pip::DASHBOARD,
        pip::SCRAPING,
    ];
    if args.skip_database {
        info!("skipping the optional database connectivity packages");
    } else {
        groups.push(pip::DATABASE);
    }

    let failed = install_groups(&args.python, &groups);

    print_section("SETUP COMPLETE");
    if failed.is_empty() {
        println!("All package groups installed.");
    } else {
        println!("Finished with failures in: {}", failed.join(", "));
        println!("Re-run this command once the pip errors above are resolved.");
    }
    println!("\nNext steps:");
    println!("  1. Run the analysis:      dissertation-tools run-pipeline");
    println!("  2. Launch the dashboard:  streamlit run dashboard/app.py");
    println!();

    if !args.no_pause {
        pause_for_ack()?;
    }

    Ok(())
}

/// Try every group in order. A failed group must not stop the remaining
/// ones, so failures are only collected and reported. Returns the names of
/// the groups whose installation failed.
pub fn install_groups(python: &str, groups: &[PackageGroup]) -> Vec<&'static str> {
    let mut failed = Vec::new();
    for group in groups {
        println!();
        info!(
            "installing {} packages: {}",
            group.name,
            group.packages.join(" ")
        );
        if let Err(e) = pip::install_group(python, group) {
            warn!("installation of the {} packages failed: {}", group.name, e);
            failed.push(group.name);
        }
    }
    failed
}
