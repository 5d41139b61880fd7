use std::{fs, path::Path};

use anyhow::Context;
use clap::Parser;

const EXCEL_READ: &str = "pd.read_excel('Data/processed/FINAL_DISSERTATION_DATASET_ENRICHED.xlsx')";
const CSV_READ: &str = "pd.read_csv('Data/processed/FINAL_DISSERTATION_DATASET_ENRICHED.csv')";

/// The dashboard sources that load the master dataset.
const DASHBOARD_SOURCES: &[&str] = &["dashboard/app.py", "dashboard/utils.py"];

#[derive(Parser, Debug)]
pub struct FixDashboardArgs {
    /// files to rewrite instead of the default dashboard sources
    #[arg(long)]
    file: Vec<String>,
}

pub fn replace_dataset_read(content: &str) -> String {
    content.replace(EXCEL_READ, CSV_READ)
}

/// Rewrite one file in place. Returns whether anything changed.
pub fn fix_file(path: &Path) -> anyhow::Result<bool> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading '{}'", path.display()))?;

    let fixed = replace_dataset_read(&content);
    if fixed == content {
        return Ok(false);
    }

    fs::write(path, fixed).with_context(|| format!("writing '{}'", path.display()))?;
    Ok(true)
}

pub fn run(args: FixDashboardArgs) -> anyhow::Result<()> {
    let files = if args.file.is_empty() {
        DASHBOARD_SOURCES.iter().map(|s| s.to_string()).collect()
    } else {
        args.file
    };

    for file in &files {
        let path = Path::new(file);
        if !path.exists() {
            warn!("'{}' does not exist, skipping", file);
            continue;
        }
        if fix_file(path)? {
            info!("'{}' now reads the CSV dataset", file);
        } else {
            info!("'{}' already reads the CSV dataset", file);
        }
    }

    println!("\nRun: streamlit run dashboard/app.py");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn excel_read_becomes_csv_read() {
        let fixed = replace_dataset_read(
            "df = pd.read_excel('Data/processed/FINAL_DISSERTATION_DATASET_ENRICHED.xlsx')\n",
        );
        assert_eq!(
            fixed,
            "df = pd.read_csv('Data/processed/FINAL_DISSERTATION_DATASET_ENRICHED.csv')\n"
        );
    }

    #[test]
    fn sources_already_on_csv_are_left_alone() {
        let content = "df = pd.read_csv('Data/processed/FINAL_DISSERTATION_DATASET_ENRICHED.csv')";
        assert_eq!(replace_dataset_read(content), content);
    }

    #[test]
    fn fix_file_rewrites_only_when_needed() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "import pandas as pd\ndf = {}\nprint(len(df))\n",
            EXCEL_READ
        )
        .unwrap();

        assert!(fix_file(file.path()).unwrap());
        let fixed = fs::read_to_string(file.path()).unwrap();
        assert!(fixed.contains(CSV_READ));
        assert!(!fixed.contains("read_excel"));

        // second pass has nothing left to do
        assert!(!fix_file(file.path()).unwrap());
    }
}
