//! End-to-end generation through the real adapters.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use archforge_adapters::{BuiltinStore, LocalFilesystem, MemoryFilesystem, SimpleRenderer};
use archforge_core::domain::{preview_paths, render_tree};
use archforge_core::prelude::*;
use tempfile::TempDir;
use walkdir::WalkDir;

fn local_service(base: &Path) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(BuiltinStore),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    )
    .with_base_dir(base)
}

fn on_disk(root: &Path) -> BTreeSet<String> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .map(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect()
}

#[test]
fn flat_project_is_written_with_module_substituted() {
    let tmp = TempDir::new().unwrap();
    let root = local_service(tmp.path())
        .materialize("flat", "github.com/acme/shop", false, false)
        .unwrap();

    assert_eq!(root, tmp.path().join("project_flat"));
    assert_eq!(
        fs::read_to_string(root.join("go.mod")).unwrap(),
        "module github.com/acme/shop\n\ngo 1.21\n"
    );
    let readme = fs::read_to_string(root.join("README.md")).unwrap();
    assert!(readme.starts_with("# shop\n"));
    assert!(readme.contains("`github.com/acme/shop`"));
}

#[test]
fn every_architecture_matches_its_preview_on_disk() {
    let tmp = TempDir::new().unwrap();
    let service = local_service(tmp.path());

    for template in BuiltinStore.list().unwrap() {
        let name = template.architecture.as_str();
        let root = service
            .materialize(name, "example.com/team/app", false, false)
            .unwrap();

        let expected: BTreeSet<String> =
            preview_paths(&template).into_iter().map(String::from).collect();
        assert_eq!(on_disk(&root), expected, "{name}");

        for entry in WalkDir::new(&root).into_iter().filter_map(Result::ok) {
            if entry.file_type().is_file() {
                let content = fs::read_to_string(entry.path()).unwrap();
                assert!(!content.contains("{{MODULE"), "{}", entry.path().display());
            }
        }
    }
}

#[test]
fn conflict_leaves_existing_project_untouched() {
    let tmp = TempDir::new().unwrap();
    let service = local_service(tmp.path());
    let root = service
        .materialize("clean", "github.com/acme/first", false, false)
        .unwrap();
    fs::write(root.join("go.mod"), "edited by hand\n").unwrap();

    let err = service
        .materialize("clean", "github.com/acme/second", false, false)
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DestinationConflict);
    assert_eq!(err.path(), Some(root.as_path()));
    assert_eq!(
        fs::read_to_string(root.join("go.mod")).unwrap(),
        "edited by hand\n"
    );
}

#[test]
fn overwrite_regenerates_files_and_keeps_extra_ones() {
    let tmp = TempDir::new().unwrap();
    let service = local_service(tmp.path());
    let root = service
        .materialize("onion", "github.com/acme/first", false, false)
        .unwrap();
    fs::write(root.join("NOTES.txt"), "keep me\n").unwrap();

    service
        .materialize("onion", "github.com/acme/second", true, true)
        .unwrap();

    assert_eq!(
        fs::read_to_string(root.join("go.mod")).unwrap(),
        "module github.com/acme/second\n\ngo 1.21\n"
    );
    assert!(root.join("NOTES.txt").exists());
}

#[test]
fn preview_touches_nothing() {
    let tmp = TempDir::new().unwrap();
    let templates = TemplateService::new(Box::new(BuiltinStore));

    let tree = templates.preview("hexagonal").unwrap();
    let template = BuiltinStore.get(ArchitectureName::Hexagonal).unwrap();

    assert_eq!(tree, render_tree(&template));
    assert!(tree.starts_with("project_hexagonal/\n"));
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn invalid_module_fails_before_any_write() {
    let tmp = TempDir::new().unwrap();
    let err = local_service(tmp.path())
        .materialize("ddd", "1bad-module", false, false)
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidModuleIdentifier);
    assert!(!tmp.path().join("project_ddd").exists());
}

#[test]
fn failed_write_leaves_partial_tree_in_direct_mode() {
    let fs = MemoryFilesystem::new();
    fs.deny("/work/project_ddd/internal");
    let service = ScaffoldService::new(
        Box::new(BuiltinStore),
        Box::new(SimpleRenderer::new()),
        Box::new(fs.clone()),
    )
    .with_base_dir("/work");

    let err = service
        .materialize("ddd", "github.com/acme/partial", false, false)
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MaterializationFailed);
    assert_eq!(err.path(), Some(Path::new("/work/project_ddd/internal")));
    assert!(fs
        .read_file(Path::new("/work/project_ddd/cmd/app/main.go"))
        .is_some());
    assert!(fs
        .read_file(Path::new("/work/project_ddd/go.mod"))
        .is_none());
}

#[test]
fn staged_mode_renames_into_place() {
    let tmp = TempDir::new().unwrap();
    let root = local_service(tmp.path())
        .with_write_mode(WriteMode::Staged)
        .materialize("cqrs", "github.com/acme/staged", false, false)
        .unwrap();

    assert!(root.join("internal/commands/create_user.go").is_file());
    let leftovers: Vec<_> = fs::read_dir(tmp.path())
        .unwrap()
        .filter_map(Result::ok)
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.contains("staging"))
        .collect();
    assert!(leftovers.is_empty(), "{leftovers:?}");
}
