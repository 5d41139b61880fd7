use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::Context;
use clap::Parser;
use subprocess::Exec;

use crate::utils::{
    dump_file, print_section,
    report::{self, PipelineSummary, StepRecord},
    verify,
};

/// The analysis scripts in execution order.
const PIPELINE_STEPS: &[(&str, &str)] = &[
    (
        "notebooks/01_descriptive_statistics.py",
        "Descriptive statistics (Tables 1-2)",
    ),
    (
        "notebooks/02_essay2_event_study.py",
        "Essay 2 event study regressions",
    ),
    (
        "notebooks/03_essay3_information_asymmetry.py",
        "Essay 3 information asymmetry analysis",
    ),
    (
        "notebooks/04_enrichment_analysis.py",
        "Enrichment variable deep dive",
    ),
];

#[derive(Parser, Debug)]
pub struct RunPipelineArgs {
    /// project root containing the Data/, notebooks/ and dashboard/ directories
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// python interpreter used for the analysis scripts
    #[arg(long, default_value = "python")]
    python: String,
}

/// The scripts resolve their data paths relative to themselves, so each one
/// runs with its own directory as the working directory.
fn run_script(python: &str, root: &Path, script: &str, description: &str) -> anyhow::Result<()> {
    let path = root.join(script);
    let cwd = path.parent().context("script path has no parent directory")?;
    let name = path.file_name().context("script path has no file name")?;

    println!("Running: {}", description);
    println!("Script: {}", path.display());

    let status = Exec::cmd(python).arg(name).cwd(cwd).join()?;
    if status.success() {
        Ok(())
    } else {
        Err(anyhow::format_err!(
            "'{}' exited with exit code {:?}",
            script,
            status
        ))
    }
}

pub fn run(args: RunPipelineArgs) -> anyhow::Result<()> {
    print_section("DISSERTATION ANALYTICS PIPELINE - FULL EXECUTION");

    let start = Instant::now();

    // nothing runs without the processed datasets in place
    print_section("STEP 0: DATA VERIFICATION");
    let missing = verify::check_required(&args.root, verify::REQUIRED_DATA);
    if !missing.is_empty() {
        return Err(anyhow::format_err!(
            "{} required data file(s) missing, aborting the pipeline",
            missing.len()
        ));
    }
    println!("\nAll required data files present");

    let mut steps = Vec::new();
    for (i, (script, description)) in PIPELINE_STEPS.iter().enumerate() {
        print_section(&format!("STEP {}: {}", i + 1, description.to_uppercase()));

        let step_start = Instant::now();
        let result = run_script(&args.python, &args.root, script, description);
        let elapsed = step_start.elapsed().as_secs_f64();

        match &result {
            Ok(()) => println!("Completed in {:.1} seconds", elapsed),
            Err(e) => warn!("{} failed, continuing with the next step: {}", script, e),
        }
        steps.push(StepRecord {
            step: script.to_string(),
            ok: result.is_ok(),
            elapsed_sec: elapsed,
        });
    }

    print_section("OUTPUT VERIFICATION");
    let tables = verify::list_outputs(&args.root.join("outputs/tables"), &["csv", "tex"]);
    println!("Tables generated: {}", tables.len());
    for table in &tables {
        println!("  [OK] {}", table.display());
    }
    let figures = verify::list_outputs(&args.root.join("outputs/figures"), &["png"]);
    println!("\nFigures generated: {}", figures.len());
    for figure in &figures {
        println!("  [OK] {}", figure.display());
    }

    print_section("DASHBOARD VERIFICATION");
    let missing_dashboard = verify::check_required(&args.root, verify::DASHBOARD_FILES);
    if missing_dashboard.is_empty() {
        println!("\nTo launch the dashboard:");
        println!("  cd dashboard && streamlit run app.py");
    } else {
        warn!("{} dashboard component(s) missing", missing_dashboard.len());
    }

    let failed = steps.iter().filter(|s| !s.ok).count();
    let total_sec = start.elapsed().as_secs_f64();

    // reports belong in the project tree, not wherever the tool was started
    let steps_file = args.root.join(dump_file("pipeline_steps", "csv"));
    report::write_step_report(&steps_file, &steps)?;
    let summary_file = args.root.join(dump_file("pipeline_summary", "json"));
    report::write_summary(
        &summary_file,
        &PipelineSummary {
            steps_total: steps.len(),
            steps_failed: failed,
            total_sec,
        },
    )?;

    print_section("PIPELINE SUMMARY");
    println!("Steps run: {} ({} failed)", steps.len(), failed);
    println!("Total time: {:.1} minutes", total_sec / 60.0);
    println!("Step report: {}", steps_file.display());
    println!("\nNext steps:");
    println!("  1. Review outputs in outputs/tables/ and outputs/figures/");
    println!("  2. Launch the dashboard: cd dashboard && streamlit run app.py");

    if failed > 0 {
        warn!("{} analysis step(s) failed, check the output above", failed);
    }

    Ok(())
}
