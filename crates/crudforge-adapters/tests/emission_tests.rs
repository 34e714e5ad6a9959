//! Emitting whole plans into the in-memory filesystem.

use std::path::Path;

use crudforge_adapters::MemoryFilesystem;
use crudforge_core::{
    application::{ApplicationError, Filesystem, ScaffoldService, build_plan},
    domain::{EntitySchema, LogicalType, ProjectPlan},
    error::CrudforgeError,
};

fn plan() -> ProjectPlan {
    let schema = EntitySchema::builder("OrderItem")
        .field("quantity", LogicalType::Number)
        .field("shippedAt", LogicalType::Date)
        .build()
        .unwrap();
    build_plan(&schema).unwrap()
}

fn service(fs: &MemoryFilesystem) -> ScaffoldService {
    ScaffoldService::new(Box::new(fs.clone()))
}

#[test]
fn every_file_lands_inside_a_created_directory() {
    let fs = MemoryFilesystem::new();
    let root = Path::new("out/shop");
    let plan = plan();

    let report = service(&fs).emit(&plan, root).unwrap();
    assert_eq!(report.files, plan.artifact_count());

    let directories = fs.list_directories();
    for dir in plan.directories() {
        assert!(directories.contains(&root.join(dir)), "missing {dir}");
    }
    for artifact in plan.artifacts() {
        let path = root.join(&artifact.path);
        let parent = path.parent().unwrap().to_path_buf();
        assert!(directories.contains(&parent), "{} has no parent", artifact.path);
        assert_eq!(fs.read_file(&path).as_deref(), Some(artifact.content.as_str()));
    }
    assert_eq!(fs.list_files().len(), plan.artifact_count());
}

#[test]
fn second_emit_into_same_root_is_refused() {
    let fs = MemoryFilesystem::new();
    let root = Path::new("shop");
    service(&fs).emit(&plan(), root).unwrap();

    let err = service(&fs).emit(&plan(), root).unwrap_err();
    assert!(matches!(
        err,
        CrudforgeError::Application(ApplicationError::ProjectExists { .. })
    ));
}

#[test]
fn overwrite_keeps_unrelated_files() {
    let fs = MemoryFilesystem::new();
    let root = Path::new("shop");
    fs.create_dir_all(root).unwrap();
    fs.write_file(&root.join("NOTES.md"), "keep me").unwrap();

    service(&fs).with_overwrite(true).emit(&plan(), root).unwrap();

    assert_eq!(fs.read_file(&root.join("NOTES.md")).as_deref(), Some("keep me"));
    assert!(fs.exists(&root.join("src/index.ts")));
}
