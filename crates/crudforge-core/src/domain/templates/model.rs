//! Persistence model: entity type, document type, schema and model export.

use super::{LayerContext, SourceWriter, ir::attributes, writer::js_string};

pub fn render(ctx: &LayerContext<'_>) -> String {
    let names = ctx.names;
    let syntax = ctx.syntax();
    let typed = syntax.is_typed();
    let attrs = attributes(ctx.schema, ctx.mapper());

    let type_name = &names.type_name;
    let document = format!("{type_name}Document");
    let schema_binding = format!("{type_name}Schema");
    let id_field = ctx.schema.id_field();

    let mut w = SourceWriter::new();

    if typed {
        let needs_types = attrs.iter().any(|a| a.needs_types_import);
        w.line(if needs_types {
            "import mongoose, { Schema, Document, Types } from 'mongoose';"
        } else {
            "import mongoose, { Schema, Document } from 'mongoose';"
        });
        w.blank();
        w.block(format!("export interface {type_name} {{"), "}", |w| {
            w.line(format!("{id_field}?: string;"));
            for attr in &attrs {
                if let Some(annotation) = attr.annotation {
                    w.line(format!("{}: {annotation};", attr.name));
                }
            }
        });
        w.blank();
        w.line(format!(
            "export interface {document} extends Omit<{type_name}, '{id_field}'>, Document {{}}"
        ));
        w.blank();
    } else {
        w.line(syntax.import_default("mongoose", "mongoose"));
        w.blank();
    }

    let schema_decl = if typed {
        format!("const {schema_binding}: Schema = new Schema(")
    } else {
        format!("const {schema_binding} = new mongoose.Schema(")
    };
    w.block(schema_decl, ");", |w| {
        if attrs.is_empty() {
            w.line("{},");
        } else {
            w.block("{", "},", |w| {
                for attr in &attrs {
                    w.line(format!(
                        "{}: {{ type: {}, required: true }},",
                        attr.name, attr.schema_type
                    ));
                }
            });
        }
        w.line("{ toJSON: { virtuals: true } },");
    });

    if ctx.schema.has_custom_id_field() {
        let this_param = if typed { format!("this: {document}") } else { String::new() };
        w.blank();
        w.block(
            format!(
                "{schema_binding}.virtual({}).get(function ({this_param}) {{",
                js_string(id_field)
            ),
            "});",
            |w| {
                w.line("return this._id.toString();");
            },
        );
    }

    w.blank();
    let model = if typed {
        format!("mongoose.model<{document}>('{type_name}', {schema_binding})")
    } else {
        format!("mongoose.model('{type_name}', {schema_binding})")
    };
    w.line(syntax.export_default(&model));

    w.finish()
}
