//! End-to-end tests for the `crudforge` binary.

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A command isolated from the user's config and environment.
fn crudforge(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("crudforge");
    cmd.current_dir(temp.path())
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join(".config"))
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let temp = TempDir::new().unwrap();
    crudforge(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("types"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    crudforge(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn new_writes_typed_project() {
    let temp = TempDir::new().unwrap();
    crudforge(&temp)
        .args([
            "new", "shop", "--entity", "Product", "-f", "name:string", "-f", "price:number",
            "--yes",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("npm install"));

    let root = temp.path().join("shop");
    for file in [
        "src/models/product.ts",
        "src/interfaces/IProductRepository.ts",
        "src/repositories/productRepository.ts",
        "src/services/productService.ts",
        "src/controllers/productController.ts",
        "src/routes/productRouter.ts",
        "src/index.ts",
        "package.json",
        "tsconfig.json",
    ] {
        assert!(root.join(file).is_file(), "missing {file}");
    }

    let manifest = fs::read_to_string(root.join("package.json")).unwrap();
    assert!(manifest.contains("\"name\": \"shop\""));
    let router = fs::read_to_string(root.join("src/routes/productRouter.ts")).unwrap();
    assert!(router.contains("router.delete('/:id'"));
}

#[test]
fn new_untyped_honours_project_flags() {
    let temp = TempDir::new().unwrap();
    crudforge(&temp)
        .args([
            "new", "tags", "-e", "Tag", "-f", "label:string", "--profile", "js", "--port",
            "8080", "--yes",
        ])
        .assert()
        .success();

    let root = temp.path().join("tags");
    assert!(root.join("src/index.js").is_file());
    assert!(!root.join("tsconfig.json").exists());

    let entry = fs::read_to_string(root.join("src/index.js")).unwrap();
    assert!(entry.contains("8080"));
    assert!(entry.contains("require("));
}

#[test]
fn new_from_schema_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("order.toml"),
        "name = \"OrderItem\"\nid_field = \"sku\"\n\n[[fields]]\nname = \"quantity\"\ntype = \"number\"\n",
    )
    .unwrap();

    crudforge(&temp)
        .args(["new", "orders", "--schema", "order.toml", "--yes"])
        .assert()
        .success();

    let model = fs::read_to_string(temp.path().join("orders/src/models/orderItem.ts")).unwrap();
    assert!(model.contains("quantity"));
    assert!(model.contains("sku"));
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    crudforge(&temp)
        .args(["new", "shop", "-e", "Product", "-f", "name:string", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("src/models/product.ts"))
        .stdout(predicate::str::contains("DELETE /products/:id"));

    assert!(!temp.path().join("shop").exists());
}

#[test]
fn existing_directory_is_refused() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("shop")).unwrap();

    crudforge(&temp)
        .args(["new", "shop", "-e", "Product", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));

    assert!(!temp.path().join("shop/src").exists());
}

#[test]
fn force_writes_into_existing_directory() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("shop");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("README.md"), "keep me").unwrap();

    crudforge(&temp)
        .args(["new", "shop", "-e", "Product", "--yes", "--force"])
        .assert()
        .success();

    assert!(root.join("src/index.ts").is_file());
    assert_eq!(fs::read_to_string(root.join("README.md")).unwrap(), "keep me");
}

#[test]
fn plan_paths_in_write_order() {
    let temp = TempDir::new().unwrap();
    let assert = crudforge(&temp)
        .args(["plan", "-e", "Product", "--format", "paths"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let paths: Vec<&str> = stdout.lines().collect();
    assert_eq!(paths.first(), Some(&"src/models/product.ts"));
    assert_eq!(paths.last(), Some(&"tsconfig.json"));
    assert_eq!(paths.len(), 9);
}

#[test]
fn plan_json_is_parseable() {
    let temp = TempDir::new().unwrap();
    let assert = crudforge(&temp)
        .args(["plan", "-e", "Tag", "-p", "untyped", "--name", "tags", "--format", "json"])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(json["artifacts"].as_array().unwrap().len(), 8);
    assert_eq!(json["artifacts"][6]["path"], "src/index.js");
}

#[test]
fn types_lists_registry() {
    let temp = TempDir::new().unwrap();
    crudforge(&temp)
        .args(["types", "--format", "list"])
        .assert()
        .success()
        .stdout("string\nnumber\nboolean\ndate\nid\n");
}

#[test]
fn config_round_trip_through_file() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("crudforge.toml");
    let config = config.to_str().unwrap();

    crudforge(&temp).args(["--config", config, "init"]).assert().success();
    crudforge(&temp)
        .args(["--config", config, "config", "set", "defaults.profile", "untyped"])
        .assert()
        .success();
    crudforge(&temp)
        .args(["--config", config, "config", "get", "defaults.profile"])
        .assert()
        .success()
        .stdout("untyped\n");

    crudforge(&temp)
        .args(["--config", config, "plan", "-e", "Tag", "--format", "paths"])
        .assert()
        .success()
        .stdout(predicate::str::contains("src/index.js"));
}

#[test]
fn environment_overrides_defaults() {
    let temp = TempDir::new().unwrap();
    crudforge(&temp)
        .env("CRUDFORGE_PROJECT__PORT", "4100")
        .args(["config", "get", "project.port"])
        .assert()
        .success()
        .stdout("4100\n");
}

#[test]
fn completions_generate() {
    let temp = TempDir::new().unwrap();
    crudforge(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("crudforge"));
}
