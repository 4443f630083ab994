//! Structural checks keeping `tests/unit` a mirror of `src`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    /// Relative paths of every `.rs` file below `base`, module files excluded
    fn module_files(base: &Path) -> io::Result<BTreeSet<PathBuf>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![base.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                    continue;
                }
                if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
                    continue;
                }
                let name = path.file_name().and_then(|name| name.to_str());
                // Entry points and module organization files don't need counterparts
                if matches!(name, Some("mod.rs" | "lib.rs" | "main.rs")) {
                    continue;
                }
                if let Ok(relative) = path.strip_prefix(base) {
                    found.insert(relative.to_path_buf());
                }
            }
        }

        Ok(found)
    }

    fn listing(paths: &[&PathBuf], prefix: &str) -> String {
        paths
            .iter()
            .map(|path| format!("  - {prefix}/{}", path.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_all_src_files_have_unit_tests() -> io::Result<()> {
        let sources = module_files(Path::new(SRC_DIR))?;
        let tests = module_files(Path::new(UNIT_DIR))?;

        let missing: Vec<&PathBuf> = sources.difference(&tests).collect();
        assert!(
            missing.is_empty(),
            "Source files without a unit test counterpart:\n{}",
            listing(&missing, SRC_DIR)
        );
        Ok(())
    }

    #[test]
    fn test_all_unit_tests_have_src_counterparts() -> io::Result<()> {
        let sources = module_files(Path::new(SRC_DIR))?;
        let tests = module_files(Path::new(UNIT_DIR))?;

        let orphaned: Vec<&PathBuf> = tests.difference(&sources).collect();
        assert!(
            orphaned.is_empty(),
            "Unit test files whose source file is gone:\n{}",
            listing(&orphaned, UNIT_DIR)
        );
        Ok(())
    }

    // A unit test file that no mod.rs declares is silently never compiled
    #[test]
    fn test_all_unit_tests_are_declared() -> io::Result<()> {
        let base = Path::new(UNIT_DIR);
        let mut undeclared = Vec::new();

        for relative in module_files(base)? {
            let Some(stem) = relative.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let parent = relative.parent().unwrap_or_else(|| Path::new(""));
            let module_file = base.join(parent).join("mod.rs");
            let declarations = fs::read_to_string(&module_file).unwrap_or_default();

            if !declarations
                .lines()
                .any(|line| line.trim() == format!("pub mod {stem};"))
            {
                undeclared.push(relative);
            }
        }

        let undeclared: Vec<&PathBuf> = undeclared.iter().collect();
        assert!(
            undeclared.is_empty(),
            "Unit test files missing from their mod.rs:\n{}",
            listing(&undeclared, UNIT_DIR)
        );
        Ok(())
    }

    // missing_docs applies to the unit target's own module tree
    #[test]
    fn test_unit_module_declarations_are_documented() -> io::Result<()> {
        let mut pending = vec![PathBuf::from(UNIT_DIR)];
        let mut undocumented = Vec::new();

        while let Some(dir) = pending.pop() {
            let declarations = fs::read_to_string(dir.join("mod.rs"))?;
            let mut previous = "";
            for line in declarations.lines().map(str::trim) {
                if let Some(name) = line
                    .strip_prefix("pub mod ")
                    .and_then(|rest| rest.strip_suffix(';'))
                {
                    let target = dir.join(name);
                    let inner_doc = fs::read_to_string(target.with_extension("rs"))
                        .or_else(|_| fs::read_to_string(target.join("mod.rs")))
                        .is_ok_and(|content| content.starts_with("//!"));
                    if !previous.starts_with("///") && !inner_doc {
                        undocumented.push(target.clone());
                    }
                    if target.is_dir() {
                        pending.push(target);
                    }
                }
                previous = line;
            }
        }

        let undocumented: Vec<&PathBuf> = undocumented.iter().collect();
        assert!(
            undocumented.is_empty(),
            "Unit test modules without documentation:\n{}",
            listing(&undocumented, ".")
        );
        Ok(())
    }

    #[test]
    fn test_all_test_files_contain_tests() -> io::Result<()> {
        let mut empty = Vec::new();

        for base in [Path::new(UNIT_DIR), Path::new("tests")] {
            for relative in module_files(base)? {
                let content = fs::read_to_string(base.join(&relative))?;
                if !content.contains("#[test]") {
                    empty.push(base.join(relative));
                }
            }
        }

        let empty: Vec<&PathBuf> = empty.iter().collect();
        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            listing(&empty, ".")
        );
        Ok(())
    }
}
