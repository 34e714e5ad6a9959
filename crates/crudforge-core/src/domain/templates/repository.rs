//! Repository: the only layer that talks to the persistence model.

use super::{LayerContext, Operation, SourceWriter};
use crate::domain::{entities::DerivedNames, value_objects::Layer};

/// Statements of one operation's body.
fn body(op: Operation, names: &DerivedNames, model: &str) -> Vec<String> {
    match op {
        Operation::Create => vec![
            format!("const {} = new {model}(data);", names.var_name),
            format!("return await {}.save();", names.var_name),
        ],
        Operation::Update => {
            vec![format!("return await {model}.findByIdAndUpdate(id, data, {{ new: true }});")]
        }
        Operation::Delete => vec![format!("await {model}.findByIdAndDelete(id);")],
        Operation::Find => vec![format!("return await {model}.find().skip(offset).limit(limit);")],
        Operation::FindOne => vec![format!("return await {model}.findById(id);")],
    }
}

pub fn render(ctx: &LayerContext<'_>) -> String {
    let names = ctx.names;
    let syntax = ctx.syntax();
    let model = names.module_binding(Layer::Model);
    let model_path = ctx.specifier(Layer::Repository, Layer::Model);
    let interface_path = ctx.specifier(Layer::Repository, Layer::Interface);
    let op_names: Vec<&str> = Operation::ALL.iter().map(Operation::name).collect();
    let object = format!("{{ {} }}", op_names.join(", "));

    let mut w = SourceWriter::new();
    w.line(syntax.import_default(&model, &model_path));
    if let Some(import) = syntax.import_types(&[names.type_name.as_str()], &model_path) {
        w.line(import);
    }
    if syntax.is_typed() {
        w.line(syntax.import_named(&[names.interface_name.as_str()], &interface_path));
    } else {
        w.line(syntax.import_named(&["assertImplements"], &interface_path));
    }

    for op in Operation::ALL {
        let returns = op.returns().annotation(names);
        w.blank();
        w.block(
            syntax.async_arrow(op.name(), &op.declared_params(names, ctx.profile()), Some(returns.as_str())),
            "};",
            |w| {
                w.lines(body(op, names, &model));
            },
        );
    }

    w.blank();
    if syntax.is_typed() {
        let binding = names.module_binding(Layer::Repository);
        w.line(format!(
            "const {binding}: {} = {object};",
            names.interface_name
        ));
        w.blank();
        w.line(syntax.export_names(&op_names));
        w.line(syntax.export_default(&binding));
    } else {
        w.line(syntax.export_default(&format!("assertImplements({object})")));
    }

    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::{EntitySchema, ProjectSettings},
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
    fn typed_repository_implements_interface() {
        let out = render_for(SyntaxProfile::Typed);

        assert!(out.starts_with(
            "import ProductModel from '../models/product';\n\
             import { Product } from '../models/product';\n\
             import { IProductRepository } from '../interfaces/IProductRepository';\n"
        ));
        assert!(out.contains(
            "const create = async (data: Product): Promise<Product> => {\n    \
             const product = new ProductModel(data);\n    \
             return await product.save();\n};"
        ));
        assert!(out.contains("const remove = async (id: string): Promise<void> => {\n    await ProductModel.findByIdAndDelete(id);\n};"));
        assert!(out.contains("ProductModel.find().skip(offset).limit(limit)"));
        assert!(out.contains(
            "const productRepository: IProductRepository = { create, update, remove, find, findOne };"
        ));
        assert!(out.ends_with(
            "export { create, update, remove, find, findOne };\nexport default productRepository;\n"
        ));
    }

    #[test]
    fn untyped_repository_asserts_interface() {
        let out = render_for(SyntaxProfile::Untyped);

        assert!(out.starts_with(
            "const ProductModel = require('../models/product');\n\
             const { assertImplements } = require('../interfaces/IProductRepository');\n"
        ));
        assert!(out.contains("const update = async (id, data) => {"));
        assert!(out.ends_with(
            "module.exports = assertImplements({ create, update, remove, find, findOne });\n"
        ));
    }
}
