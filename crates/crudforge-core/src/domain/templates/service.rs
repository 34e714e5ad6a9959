//! Service layer: delegates each operation to the repository.

use super::{LayerContext, Operation, SourceWriter};
use crate::domain::value_objects::Layer;

pub fn render(ctx: &LayerContext<'_>) -> String {
    let names = ctx.names;
    let syntax = ctx.syntax();
    let repository = names.module_binding(Layer::Repository);

    let mut w = SourceWriter::new();
    w.line(syntax.import_namespace(
        &repository,
        &ctx.specifier(Layer::Service, Layer::Repository),
    ));
    if let Some(import) = syntax.import_types(
        &[names.type_name.as_str()],
        &ctx.specifier(Layer::Service, Layer::Model),
    ) {
        w.line(import);
    }

    for op in Operation::ALL {
        let returns = op.returns().annotation(names);
        w.blank();
        w.block(
            syntax.async_arrow(op.name(), &op.declared_params(names, ctx.profile()), Some(returns.as_str())),
            "};",
            |w| {
                w.line(format!(
                    "return await {repository}.{}({});",
                    op.name(),
                    op.call_args()
                ));
            },
        );
    }

    w.blank();
    let exports: Vec<&str> = Operation::ALL.iter().map(Operation::name).collect();
    w.line(syntax.export_names(&exports));

    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::{DerivedNames, EntitySchema, ProjectSettings},
        value_objects::SyntaxProfile,
    };

    fn render_for(entity: &str, profile: SyntaxProfile) -> String {
        let schema = EntitySchema::builder(entity).build().unwrap();
        let names = DerivedNames::derive(entity).unwrap();
        let settings = ProjectSettings::default().with_profile(profile);
        render(&LayerContext::new(&schema, &names, &settings))
    }

    #[test]
    fn typed_service_delegates() {
        let out = render_for("OrderItem", SyntaxProfile::Typed);

        assert!(out.starts_with(
            "import * as orderItemRepository from '../repositories/orderItemRepository';\n\
             import { OrderItem } from '../models/orderItem';\n"
        ));
        assert!(out.contains(
            "const update = async (id: string, data: OrderItem): Promise<OrderItem | null> => {\n    \
             return await orderItemRepository.update(id, data);\n};"
        ));
        assert!(out.ends_with("export { create, update, remove, find, findOne };\n"));
    }

    #[test]
    fn untyped_service_requires_repository() {
        let out = render_for("Product", SyntaxProfile::Untyped);

        assert!(out.starts_with(
            "const productRepository = require('../repositories/productRepository');\n\n"
        ));
        assert!(out.contains("const find = async (limit, offset) => {\n    return await productRepository.find(limit, offset);\n};"));
        assert!(out.ends_with("module.exports = { create, update, remove, find, findOne };\n"));
    }
}
