//! Application entry point: server setup, database connection, router mount.

use super::{LayerContext, SourceWriter, writer::js_string};
use crate::domain::value_objects::Layer;

pub fn render(ctx: &LayerContext<'_>) -> String {
    let names = ctx.names;
    let settings = ctx.settings;
    let syntax = ctx.syntax();
    let router = names.module_binding(Layer::Router);

    let mut w = SourceWriter::new();
    w.line(syntax.import_default("express", "express"));
    w.line(syntax.import_default("mongoose", "mongoose"));
    w.line(syntax.import_default(&router, &ctx.specifier(Layer::Entry, Layer::Router)));
    w.blank();
    w.line("const app = express();");
    w.line(format!("const port = Number(process.env.PORT ?? {});", settings.port));
    w.line(format!(
        "const databaseUrl = process.env.DATABASE_URL ?? {};",
        js_string(&settings.database_url)
    ));
    w.blank();
    w.line("app.use(express.json());");
    w.blank();
    w.line("mongoose");
    w.indented(|w| {
        w.line(".connect(databaseUrl)");
        w.line(".then(() => console.log('MongoDB connected'))");
        w.line(".catch((err) => console.error(err));");
    });
    w.blank();
    w.line(format!("app.use('{}', {router});", names.mount_path()));
    w.blank();
    w.block("app.listen(port, () => {", "});", |w| {
        w.line("console.log(`Server running on port ${port}`);");
    });

    w.finish()
}
