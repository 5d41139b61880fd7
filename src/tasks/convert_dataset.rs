use anyhow::Context;
use clap::Parser;

use crate::utils::external_prog::run_embedded_script;

#[derive(Parser, Debug)]
pub struct ConvertDatasetArgs {
    /// source Excel workbook
    #[arg(
        long,
        default_value = "Data/processed/FINAL_DISSERTATION_DATASET_ENRICHED.xlsx"
    )]
    excel: String,

    /// destination CSV file
    #[arg(
        long,
        default_value = "Data/processed/FINAL_DISSERTATION_DATASET_ENRICHED.csv"
    )]
    csv: String,
}

/// The dashboard reads the dataset with pandas anyway, so the conversion
/// itself is a small embedded pandas script.
pub fn run(args: ConvertDatasetArgs) -> anyhow::Result<()> {
    info!("converting '{}' to '{}'", args.excel, args.csv);

    run_embedded_script(
        include_bytes!("convert_dataset.py"),
        &[&args.excel, &args.csv],
    )
    .context("dataset conversion failed")?;

    info!("dataset converted");
    Ok(())
}
