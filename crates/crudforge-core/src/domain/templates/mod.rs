//! Layer templates.
//!
//! Each submodule turns a [`LayerContext`] into the source text of one
//! artifact. Templates only read names from [`DerivedNames`] and
//! relative module paths from [`module_specifier`]. None of them derives an
//! identifier or a path on its own.

pub mod controller;
pub mod entry;
pub mod interface;
pub mod ir;
pub mod manifest;
pub mod model;
pub mod repository;
pub mod router;
pub mod service;
pub mod writer;

use crate::domain::{
    entities::{DerivedNames, EntitySchema, ProjectSettings, common::RelativePath},
    error::DomainError,
    type_mapper::TypeMapper,
    value_objects::{Layer, SyntaxProfile},
};

pub use ir::{Attribute, HttpMethod, Operation, Param, Returns, RouteBinding};
pub use writer::{SourceWriter, Syntax};

/// Directories of a generated project, parents first.
pub const DIRECTORIES: [&str; 7] = [
    "src",
    "src/models",
    "src/interfaces",
    "src/repositories",
    "src/services",
    "src/controllers",
    "src/routes",
];

/// Everything a layer template may read.
#[derive(Debug, Clone, Copy)]
pub struct LayerContext<'a> {
    pub schema: &'a EntitySchema,
    pub names: &'a DerivedNames,
    pub settings: &'a ProjectSettings,
}

impl<'a> LayerContext<'a> {
    pub fn new(
        schema: &'a EntitySchema,
        names: &'a DerivedNames,
        settings: &'a ProjectSettings,
    ) -> Self {
        Self {
            schema,
            names,
            settings,
        }
    }

    pub fn profile(&self) -> SyntaxProfile {
        self.settings.profile
    }

    pub fn syntax(&self) -> Syntax {
        Syntax::new(self.profile())
    }

    pub fn mapper(&self) -> TypeMapper {
        TypeMapper::for_profile(self.profile())
    }

    /// Specifier `from`'s artifact uses to import `to`'s artifact.
    pub fn specifier(&self, from: Layer, to: Layer) -> String {
        module_specifier(from, to, self.names)
    }
}

/// Render one layer's artifact.
pub fn render(layer: Layer, ctx: &LayerContext<'_>) -> String {
    match layer {
        Layer::Model => model::render(ctx),
        Layer::Interface => interface::render(ctx),
        Layer::Repository => repository::render(ctx),
        Layer::Service => service::render(ctx),
        Layer::Controller => controller::render(ctx),
        Layer::Router => router::render(ctx),
        Layer::Entry => entry::render(ctx),
        Layer::PackageManifest => manifest::package_manifest(ctx.settings),
        Layer::CompilerConfig => manifest::compiler_config(),
    }
}

/// Project-relative path of the artifact `layer` writes.
pub fn artifact_path(
    layer: Layer,
    names: &DerivedNames,
    profile: SyntaxProfile,
) -> Result<RelativePath, DomainError> {
    let extension = match layer {
        Layer::PackageManifest | Layer::CompilerConfig => "json",
        _ => profile.file_extension(),
    };
    let file = format!("{}.{extension}", names.module_stem(layer));
    match layer.directory() {
        Some(dir) => RelativePath::try_new(dir)?.join(&file),
        None => RelativePath::try_new(file),
    }
}

/// Relative module specifier from `from`'s directory to `to`'s artifact,
/// without extension: `../models/product`, `./routes/productRouter`.
pub fn module_specifier(from: Layer, to: Layer, names: &DerivedNames) -> String {
    let from_dir: Vec<&str> = from.directory().map(|d| d.split('/').collect()).unwrap_or_default();
    let to_dir: Vec<&str> = to.directory().map(|d| d.split('/').collect()).unwrap_or_default();

    let common = from_dir
        .iter()
        .zip(&to_dir)
        .take_while(|(a, b)| a == b)
        .count();

    let mut specifier = if from_dir.len() == common {
        "./".to_string()
    } else {
        "../".repeat(from_dir.len() - common)
    };
    for segment in &to_dir[common..] {
        specifier.push_str(segment);
        specifier.push('/');
    }
    specifier.push_str(&names.module_stem(to));
    specifier
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> DerivedNames {
        DerivedNames::derive("Product").unwrap()
    }

    #[test]
    fn artifact_paths_per_profile() {
        let n = names();
        let path = |layer, profile| artifact_path(layer, &n, profile).unwrap().to_string();

        assert_eq!(path(Layer::Model, SyntaxProfile::Typed), "src/models/product.ts");
        assert_eq!(path(Layer::Model, SyntaxProfile::Untyped), "src/models/product.js");
        assert_eq!(
            path(Layer::Interface, SyntaxProfile::Typed),
            "src/interfaces/IProductRepository.ts"
        );
        assert_eq!(
            path(Layer::Router, SyntaxProfile::Untyped),
            "src/routes/productRouter.js"
        );
        assert_eq!(path(Layer::Entry, SyntaxProfile::Typed), "src/index.ts");
        assert_eq!(path(Layer::PackageManifest, SyntaxProfile::Untyped), "package.json");
        assert_eq!(path(Layer::CompilerConfig, SyntaxProfile::Typed), "tsconfig.json");
    }

    #[test]
    fn every_artifact_directory_is_declared() {
        let n = names();
        for layer in Layer::ALL {
            let path = artifact_path(layer, &n, SyntaxProfile::Typed).unwrap();
            if let Some(parent) = path.parent() {
                assert!(DIRECTORIES.contains(&parent.as_str()), "{path} has undeclared parent");
            }
        }
    }

    #[test]
    fn sibling_directory_specifiers() {
        let n = names();
        assert_eq!(module_specifier(Layer::Repository, Layer::Model, &n), "../models/product");
        assert_eq!(
            module_specifier(Layer::Router, Layer::Controller, &n),
            "../controllers/productController"
        );
    }

    #[test]
    fn entry_specifier_descends() {
        assert_eq!(
            module_specifier(Layer::Entry, Layer::Router, &names()),
            "./routes/productRouter"
        );
    }

    #[test]
    fn same_directory_specifier() {
        assert_eq!(
            module_specifier(Layer::Model, Layer::Model, &names()),
            "./product"
        );
    }
}
