//! Schemas command handler

use crate::cli::{OutputFormat, SchemasArgs};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::handlers::utils::schema_store;
use crate::output::OutputWriter;

/// Handle the schemas command
///
/// Without a name, lists the recognized schemas; with one, prints that
/// schema document.
pub fn handle_schemas(args: SchemasArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let store = schema_store(args.schemas_dir.as_deref(), config);

    let Some(name) = args.name else {
        let names = store.names();
        return match output.format() {
            OutputFormat::Human => {
                for name in names {
                    output.writeln(name)?;
                }
                Ok(())
            }
            _ => output.data(&names),
        };
    };

    match store.get_schema(&name)? {
        Some(schema) => output.data(schema.document()),
        None => Err(Error::UnknownSchema {
            known: store.names().into_iter().map(str::to_string).collect(),
            name,
        }),
    }
}
