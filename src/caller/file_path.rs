//! Module path inference from a frame's source file.

use std::path::{Component, Path};

/// Directories that mark the root of a crate's module tree.
const SOURCE_ROOTS: [&str; 4] = ["src", "tests", "benches", "examples"];

/// File stems that name the enclosing directory's module rather than a module
/// of their own.
const DIRECTORY_MODULES: [&str; 3] = ["mod", "lib", "main"];

/// Approximates a module path from `file`.
///
/// Components after the last source root directory are kept (all components
/// when no root is present), the extension of the final component is dropped,
/// and `mod`/`lib`/`main` stems are omitted:
///
/// - `src/net/http.rs` → `net`, `http`
/// - `src/net/mod.rs` → `net`
/// - `tests/caller_name.rs` → `caller_name`
pub(crate) fn module_path(file: &Path) -> Vec<String> {
    let components: Vec<&str> = file
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect();

    let start = components
        .iter()
        .rposition(|part| SOURCE_ROOTS.contains(part))
        .map_or(0, |index| index + 1);

    let Some((file_name, directories)) = components[start..].split_last() else {
        return Vec::new();
    };

    let mut module: Vec<String> = directories.iter().map(|part| (*part).to_owned()).collect();
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name);
    if !DIRECTORY_MODULES.contains(&stem) {
        module.push(stem.to_owned());
    }
    module
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(path: &str) -> Vec<String> {
        module_path(Path::new(path))
    }

    #[test]
    fn nested_source_file() {
        assert_eq!(module("src/net/http.rs"), ["net", "http"]);
    }

    #[test]
    fn mod_rs_names_its_directory() {
        assert_eq!(module("src/net/mod.rs"), ["net"]);
    }

    #[test]
    fn crate_root_has_no_module_components() {
        assert!(module("src/lib.rs").is_empty());
        assert!(module("src/main.rs").is_empty());
    }

    #[test]
    fn absolute_paths_use_last_source_root() {
        assert_eq!(
            module("/home/dev/project/src/vendor/src/codec/frame.rs"),
            ["codec", "frame"]
        );
    }

    #[test]
    fn integration_test_file() {
        assert_eq!(module("/work/crate/tests/caller_name.rs"), ["caller_name"]);
    }

    #[test]
    fn paths_without_source_root_keep_every_component() {
        assert_eq!(module("scripts/build/step.rs"), ["scripts", "build", "step"]);
    }

    #[test]
    fn empty_path_yields_nothing() {
        assert!(module("").is_empty());
    }
}
