//! Repository capability interface.
//!
//! Typed output is a structural interface the repository object is checked
//! against at compile time. Untyped output has no such construct, so it
//! exports the operation list and an `assertImplements` guard the
//! repository calls on its export.

use super::{LayerContext, Operation, SourceWriter};
use crate::domain::value_objects::Layer;

pub fn render(ctx: &LayerContext<'_>) -> String {
    let names = ctx.names;
    let syntax = ctx.syntax();
    let interface = &names.interface_name;
    let mut w = SourceWriter::new();

    if syntax.is_typed() {
        if let Some(import) = syntax.import_types(
            &[names.type_name.as_str()],
            &ctx.specifier(Layer::Interface, Layer::Model),
        ) {
            w.line(import);
            w.blank();
        }
        w.block(format!("export interface {interface} {{"), "}", |w| {
            for op in Operation::ALL {
                w.line(format!(
                    "{}({}): Promise<{}>;",
                    op.name(),
                    op.declared_params(names, ctx.profile()).join(", "),
                    op.returns().annotation(names)
                ));
            }
        });
    } else {
        let quoted: Vec<String> = Operation::ALL.iter().map(|op| format!("'{}'", op.name())).collect();
        w.line(format!("const operations = [{}];", quoted.join(", ")));
        w.blank();
        w.block("const assertImplements = (repository) => {", "};", |w| {
            w.line("const missing = operations.filter((name) => typeof repository[name] !== 'function');");
            w.block("if (missing.length > 0) {", "}", |w| {
                w.line(format!(
                    "throw new Error(`{interface} is missing: ${{missing.join(', ')}}`);"
                ));
            });
            w.line("return repository;");
        });
        w.blank();
        w.line(syntax.export_names(&["operations", "assertImplements"]));
    }

    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::{DerivedNames, EntitySchema, ProjectSettings},
        value_objects::{LogicalType, SyntaxProfile},
    };

    fn render_for(profile: SyntaxProfile) -> String {
        let schema = EntitySchema::builder("Product")
            .field("name", LogicalType::String)
            .build()
            .unwrap();
        let names = DerivedNames::derive("Product").unwrap();
        let settings = ProjectSettings::default().with_profile(profile);
        render(&LayerContext::new(&schema, &names, &settings))
    }

    #[test]
    fn typed_interface_lists_all_signatures() {
        let out = render_for(SyntaxProfile::Typed);
        assert_eq!(
            out,
            "import { Product } from '../models/product';\n\
             \n\
             export interface IProductRepository {\n    \
             create(data: Product): Promise<Product>;\n    \
             update(id: string, data: Product): Promise<Product | null>;\n    \
             remove(id: string): Promise<void>;\n    \
             find(limit: number, offset: number): Promise<Product[]>;\n    \
             findOne(id: string): Promise<Product | null>;\n\
             }\n"
        );
    }

    #[test]
    fn untyped_interface_exports_guard() {
        let out = render_for(SyntaxProfile::Untyped);
        assert!(out.starts_with(
            "const operations = ['create', 'update', 'remove', 'find', 'findOne'];\n"
        ));
        assert!(out.contains("IProductRepository is missing: ${missing.join(', ')}"));
        assert!(out.ends_with("module.exports = { operations, assertImplements };\n"));
    }
}
