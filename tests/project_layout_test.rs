use std::fs::{self, File};
use std::io::Write;

use dissertation_tools::tasks::fix_unicode;
use dissertation_tools::utils::verify;
use tempfile::TempDir;

fn touch(dir: &TempDir, relative: &str) {
    let path = dir.path().join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    File::create(path).unwrap();
}

#[test]
fn complete_project_tree_passes_both_verifications() {
    let dir = TempDir::new().unwrap();
    for file in verify::REQUIRED_DATA {
        touch(&dir, file.path);
    }
    for file in verify::DASHBOARD_FILES {
        touch(&dir, file.path);
    }

    assert!(verify::check_required(dir.path(), verify::REQUIRED_DATA).is_empty());
    assert!(verify::check_required(dir.path(), verify::DASHBOARD_FILES).is_empty());
}

#[test]
fn missing_enrichment_file_is_detected() {
    let dir = TempDir::new().unwrap();
    for file in verify::REQUIRED_DATA {
        if !file.path.contains("dark_web_presence") {
            touch(&dir, file.path);
        }
    }

    let missing = verify::check_required(dir.path(), verify::REQUIRED_DATA);
    assert_eq!(missing.len(), 1);
    assert!(missing[0].ends_with("Data/enrichment/dark_web_presence.csv"));
}

#[test]
fn generated_outputs_are_listed_per_kind() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "outputs/tables/table1_descriptives.csv");
    touch(&dir, "outputs/tables/table3_regressions.tex");
    touch(&dir, "outputs/figures/fig1_timeline.png");
    touch(&dir, "outputs/figures/readme.md");

    let tables = verify::list_outputs(&dir.path().join("outputs/tables"), &["csv", "tex"]);
    assert_eq!(tables.len(), 2);

    let figures = verify::list_outputs(&dir.path().join("outputs/figures"), &["png"]);
    assert_eq!(figures.len(), 1);
}

#[test]
fn analysis_scripts_survive_two_unicode_fix_passes() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("01_descriptive_statistics.py");
    let mut file = File::create(&script).unwrap();
    write!(
        file,
        "print('\\u2713 loaded dataset')\nprint('✓ tables written')\n"
    )
    .unwrap();
    drop(file);

    assert!(fix_unicode::fix_file(&script).unwrap());
    let fixed = fs::read_to_string(&script).unwrap();
    assert!(!fixed.contains('✓'));
    assert!(fixed.contains("[OK] tables written"));

    // already fixed, second pass changes nothing
    assert!(!fix_unicode::fix_file(&script).unwrap());
    assert_eq!(fs::read_to_string(&script).unwrap(), fixed);
}
