use std::{fs, path::Path};

use anyhow::Context;
use clap::Parser;

/// The scripts whose checkmark output broke the Windows console.
const DEFAULT_SCRIPTS: &[&str] = &[
    "notebooks/01_descriptive_statistics.py",
    "notebooks/02_essay2_event_study.py",
    "notebooks/03_essay3_information_asymmetry.py",
    "notebooks/04_enrichment_analysis.py",
];

#[derive(Parser, Debug)]
pub struct FixUnicodeArgs {
    /// files to rewrite instead of the default analysis scripts
    #[arg(long)]
    file: Vec<String>,
}

pub fn replace_checkmarks(content: &str) -> String {
    // both the literal glyph and the escape sequence occur in the scripts
    content.replace("\\u2713", "[OK]").replace('✓', "[OK]")
}

/// Rewrite one file in place. Returns whether anything changed.
pub fn fix_file(path: &Path) -> anyhow::Result<bool> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading '{}'", path.display()))?;

    let fixed = replace_checkmarks(&content);
    if fixed == content {
        return Ok(false);
    }

    fs::write(path, fixed).with_context(|| format!("writing '{}'", path.display()))?;
    Ok(true)
}

pub fn run(args: FixUnicodeArgs) -> anyhow::Result<()> {
    let files = if args.file.is_empty() {
        DEFAULT_SCRIPTS.iter().map(|s| s.to_string()).collect()
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
            info!("fixed '{}'", file);
        } else {
            info!("'{}' already clean", file);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn replaces_glyph_and_escape_sequence() {
        let fixed = replace_checkmarks("print('✓ done')  # prints \\u2713");
        assert_eq!(fixed, "print('[OK] done')  # prints [OK]");
    }

    #[test]
    fn replacement_is_idempotent() {
        let once = replace_checkmarks("✓ status ✓");
        assert_eq!(replace_checkmarks(&once), once);
    }

    #[test]
    fn fix_file_rewrites_only_when_needed() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "print('✓ validation passed')").unwrap();

        assert!(fix_file(file.path()).unwrap());
        assert_eq!(
            fs::read_to_string(file.path()).unwrap(),
            "print('[OK] validation passed')"
        );

        // second pass has nothing left to do
        assert!(!fix_file(file.path()).unwrap());
    }
}
