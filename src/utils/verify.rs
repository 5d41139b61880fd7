use std::{
    fs,
    path::{Path, PathBuf},
};

/// A file the pipeline cannot run without.
#[derive(Debug, Clone, Copy)]
pub struct RequiredFile {
    pub path: &'static str,
    pub description: &'static str,
}

pub const REQUIRED_DATA: &[RequiredFile] = &[
    RequiredFile {
        path: "Data/processed/FINAL_DISSERTATION_DATASET_ENRICHED.xlsx",
        description: "Main enriched dataset",
    },
    RequiredFile {
        path: "Data/enrichment/prior_breach_history.csv",
        description: "Prior breach enrichment",
    },
    RequiredFile {
        path: "Data/enrichment/breach_severity_classification.csv",
        description: "Severity enrichment",
    },
    RequiredFile {
        path: "Data/enrichment/executive_changes.csv",
        description: "Executive turnover enrichment",
    },
    RequiredFile {
        path: "Data/enrichment/regulatory_enforcement_enhanced.csv",
        description: "Regulatory enrichment",
    },
    RequiredFile {
        path: "Data/enrichment/dark_web_presence.csv",
        description: "Dark web enrichment",
    },
];

pub const DASHBOARD_FILES: &[RequiredFile] = &[
    RequiredFile {
        path: "dashboard/app.py",
        description: "Main dashboard application",
    },
    RequiredFile {
        path: "dashboard/utils.py",
        description: "Dashboard utilities",
    },
    RequiredFile {
        path: "dashboard/pages/1_Event_Study.py",
        description: "Event Study page",
    },
    RequiredFile {
        path: "dashboard/pages/2_Information_Asymmetry.py",
        description: "Information Asymmetry page",
    },
    RequiredFile {
        path: "dashboard/pages/3_Enrichments.py",
        description: "Enrichments page",
    },
    RequiredFile {
        path: "dashboard/.streamlit/config.toml",
        description: "Dashboard configuration",
    },
];

/// Check the given files under `root`, printing one line per file the way
/// the original runner did. Returns the paths that are missing.
pub fn check_required(root: &Path, files: &[RequiredFile]) -> Vec<PathBuf> {
    let mut missing = Vec::new();
    for file in files {
        let path = root.join(file.path);
        if path.exists() {
            println!("  [OK] {}", file.description);
        } else {
            println!("  [MISSING] {}", file.path);
            missing.push(path);
        }
    }
    missing
}

/// List generated output files in `dir` with one of the given extensions.
/// A directory that does not exist yet just yields nothing.
pub fn list_outputs(dir: &Path, extensions: &[&str]) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| extensions.contains(&ext))
                .unwrap_or(false)
        })
        .collect();
    files.sort();
    files
}
