use subprocess::Exec;

/// One named group of packages, installed with a single pip invocation.
#[derive(Debug, Clone, Copy)]
pub struct PackageGroup {
    pub name: &'static str,
    pub packages: &'static [&'static str],
}

pub const CORE_ANALYSIS: PackageGroup = PackageGroup {
    name: "core analysis",
    packages: &[
        "pandas",
        "numpy",
        "scipy",
        "statsmodels",
        "matplotlib",
        "seaborn",
        "openpyxl",
    ],
};

pub const NOTEBOOK: PackageGroup = PackageGroup {
    name: "notebook",
    packages: &["jupyter", "notebook"],
};

pub const DASHBOARD: PackageGroup = PackageGroup {
    name: "web dashboard",
    packages: &["streamlit", "plotly"],
};

pub const SCRAPING: PackageGroup = PackageGroup {
    name: "scraping and market data",
    packages: &["requests", "beautifulsoup4", "yfinance"],
};

/// WRDS access, only needed for the data download scripts.
pub const DATABASE: PackageGroup = PackageGroup {
    name: "database connectivity",
    packages: &["wrds", "psycopg2-binary"],
};

/// Install one group with a single `python -m pip install` call.
///
/// Output is left on the terminal so pip's own progress and error
/// reporting stays visible.
pub fn install_group(python: &str, group: &PackageGroup) -> anyhow::Result<()> {
    let status = Exec::cmd(python)
        .arg("-m")
        .arg("pip")
        .arg("install")
        .args(group.packages)
        .join()?;

    if status.success() {
        Ok(())
    } else {
        Err(anyhow::format_err!(
            "pip exited with exit code {:?} for the {} packages",
            status,
            group.name
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_GROUPS: &[PackageGroup] = &[CORE_ANALYSIS, NOTEBOOK, DASHBOARD, SCRAPING, DATABASE];

    #[test]
    fn groups_are_nonempty() {
        for group in ALL_GROUPS {
            assert!(!group.packages.is_empty(), "{} group is empty", group.name);
        }
    }

    #[test]
    fn no_package_listed_twice() {
        let mut seen = std::collections::HashSet::new();
        for group in ALL_GROUPS {
            for pkg in group.packages {
                assert!(seen.insert(*pkg), "{} appears in more than one group", pkg);
            }
        }
    }

    #[test]
    fn dashboard_group_covers_streamlit() {
        assert!(DASHBOARD.packages.contains(&"streamlit"));
        assert!(DASHBOARD.packages.contains(&"plotly"));
    }
}
