//! Route bindings for the entity's controller.

use super::{LayerContext, SourceWriter, ir::route_table};
use crate::domain::value_objects::Layer;

pub fn render(ctx: &LayerContext<'_>) -> String {
    let names = ctx.names;
    let syntax = ctx.syntax();
    let controller = names.module_binding(Layer::Controller);

    let mut w = SourceWriter::new();
    w.line(syntax.import_default("express", "express"));
    w.line(syntax.import_namespace(
        &controller,
        &ctx.specifier(Layer::Router, Layer::Controller),
    ));
    w.blank();
    w.line("const router = express.Router();");

    for route in route_table(&controller) {
        w.blank();
        w.line(format!("// {}", route.describe(names)));
        w.line(format!(
            "router.{}('{}', {});",
            route.method.router_fn(),
            route.path,
            route.handler
        ));
    }

    w.blank();
    w.line(syntax.export_default("router"));

    w.finish()
}
