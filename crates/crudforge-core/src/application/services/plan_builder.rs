//! Plan builder - turns one entity schema into a complete project plan.
//!
//! The builder is pure: it derives names once, renders every layer that
//! applies to the configured profile, and returns the plan. It performs no
//! I/O; see [`ScaffoldService`](super::ScaffoldService) for emission.

use tracing::{debug, info, instrument};

use crate::domain::{
    DomainValidator as validator, EntitySchema, EntitySpec, Layer, ProjectPlan, ProjectSettings,
    RelativePath, error::DomainError,
    templates::{self, DIRECTORIES, LayerContext},
};

/// Builds [`ProjectPlan`]s for a fixed set of project settings.
#[derive(Debug, Clone, Default)]
pub struct PlanBuilder {
    settings: ProjectSettings,
}

impl PlanBuilder {
    pub fn new(settings: ProjectSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ProjectSettings {
        &self.settings
    }

    /// Build the plan for `schema`.
    ///
    /// Directories come first, parents before children; artifacts follow in
    /// layer order. The first invalid name or field aborts the build and no
    /// partial plan is returned.
    #[instrument(
        skip_all,
        fields(entity = %schema.name(), profile = %self.settings.profile)
    )]
    pub fn build(&self, schema: &EntitySchema) -> Result<ProjectPlan, DomainError> {
        let names = validator::validate_schema(schema)?;
        debug!(
            type_name = %names.type_name,
            route = %names.mount_path(),
            "names derived"
        );

        let profile = self.settings.profile;
        let ctx = LayerContext::new(schema, &names, &self.settings);
        let mut plan = ProjectPlan::new();

        for dir in DIRECTORIES {
            plan.add_directory(RelativePath::try_new(dir)?);
        }

        for layer in Layer::ALL.into_iter().filter(|l| l.applies_to(profile)) {
            let path = templates::artifact_path(layer, &names, profile)?;
            let content = templates::render(layer, &ctx);
            debug!(%layer, %path, bytes = content.len(), "artifact rendered");
            plan.add_artifact(layer, path, content);
        }

        validator::validate_plan(&plan)?;

        info!(
            directories = plan.directory_count(),
            artifacts = plan.artifact_count(),
            "plan built"
        );
        Ok(plan)
    }

    /// Resolve a raw spec, then build.
    pub fn build_from_spec(&self, spec: &EntitySpec) -> Result<ProjectPlan, DomainError> {
        let schema = EntitySchema::try_from(spec)?;
        self.build(&schema)
    }
}

/// Build a plan with default settings (typed profile).
pub fn build_plan(schema: &EntitySchema) -> Result<ProjectPlan, DomainError> {
    PlanBuilder::default().build(schema)
}

pub fn build_plan_from_spec(spec: &EntitySpec) -> Result<ProjectPlan, DomainError> {
    PlanBuilder::default().build_from_spec(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LogicalType, SyntaxProfile};

    fn product() -> EntitySchema {
        EntitySchema::builder("Product")
            .field("name", LogicalType::String)
            .field("price", LogicalType::Number)
            .build()
            .unwrap()
    }

    #[test]
    fn typed_plan_has_nine_artifacts() {
        let plan = build_plan(&product()).unwrap();

        let paths: Vec<_> = plan.artifacts().map(|a| a.path.to_string()).collect();
        assert_eq!(
            paths,
            [
                "src/models/product.ts",
                "src/interfaces/IProductRepository.ts",
                "src/repositories/productRepository.ts",
                "src/services/productService.ts",
                "src/controllers/productController.ts",
                "src/routes/productRouter.ts",
                "src/index.ts",
                "package.json",
                "tsconfig.json",
            ]
        );
        assert_eq!(plan.directory_count(), 7);
    }

    #[test]
    fn untyped_plan_skips_compiler_config() {
        let builder = PlanBuilder::new(ProjectSettings::default().with_profile(SyntaxProfile::Untyped));
        let plan = builder.build(&product()).unwrap();

        assert_eq!(plan.artifact_count(), 8);
        assert!(plan.artifact(Layer::CompilerConfig).is_none());
        assert!(plan.artifacts().all(|a| !a.path.as_str().ends_with(".ts")));
    }

    #[test]
    fn building_twice_is_identical() {
        assert_eq!(build_plan(&product()).unwrap(), build_plan(&product()).unwrap());
    }

    #[test]
    fn spec_errors_abort_the_build() {
        let spec: EntitySpec = serde_json::from_str(
            r#"{ "name": "Product", "fields": [{ "name": "price", "type": "money" }] }"#,
        )
        .unwrap();

        assert_eq!(
            build_plan_from_spec(&spec),
            Err(DomainError::UnsupportedType {
                field: "price".into(),
                type_name: "money".into()
            })
        );
    }
}
