//! Request handlers: unpack the request, call the service, shape the response.

use super::{LayerContext, Operation, Returns, SourceWriter};
use crate::domain::value_objects::Layer;

pub fn render(ctx: &LayerContext<'_>) -> String {
    let names = ctx.names;
    let syntax = ctx.syntax();
    let typed = syntax.is_typed();
    let service = names.module_binding(Layer::Service);

    let mut w = SourceWriter::new();
    if typed {
        w.line(syntax.import_named(&["Request", "Response"], "express"));
    }
    w.line(syntax.import_namespace(&service, &ctx.specifier(Layer::Controller, Layer::Service)));

    let handler_params = vec![syntax.annotate("req", "Request"), syntax.annotate("res", "Response")];
    let error_message = if typed { "(error as Error).message" } else { "error.message" };

    for op in Operation::ALL {
        let call = format!("await {service}.{}({})", op.name(), op.request_args());
        let status = op.success_status();
        let result = match op.returns() {
            Returns::Many => names.collection_name.as_str(),
            _ => names.var_name.as_str(),
        };

        w.blank();
        w.block(syntax.async_arrow(op.name(), &handler_params, None), "};", |w| {
            w.line("try {").indented(|w| {
                if op.returns() == Returns::Nothing {
                    w.line(format!("{call};"));
                    w.line(format!("res.status({status}).send();"));
                } else {
                    w.line(format!("const {result} = {call};"));
                    w.line(format!("res.status({status}).json({result});"));
                }
            });
            w.block("} catch (error) {", "}", |w| {
                w.line(format!("res.status(500).json({{ message: {error_message} }});"));
            });
        });
    }

    w.blank();
    let exports: Vec<&str> = Operation::ALL.iter().map(Operation::name).collect();
    w.line(syntax.export_names(&exports));

    w.finish()
}
