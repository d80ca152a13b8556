pub mod comments;
pub mod enums;
pub mod names;
pub mod output;
pub mod structure;
pub mod types;

use crate::config::RenderOptions;
use crate::parsers::NamedApi;
use anyhow::Result;

pub use output::{Declarations, FileRenderer};
pub use structure::generate;

/// Generated output for one API
#[derive(Debug)]
pub struct GeneratedOutput {
    pub filename: String,
    pub content: String,
}

/// Generate the declaration file for one API.
pub fn generate_file(
    api: &NamedApi,
    options: &RenderOptions,
    renderer: &FileRenderer,
) -> Result<GeneratedOutput> {
    let declarations = generate(&api.name, &api.info, options);
    tracing::debug!(
        api = %api.name,
        enums = declarations.enums.len(),
        interfaces = declarations.interfaces.len(),
        "generated declarations"
    );

    Ok(GeneratedOutput {
        filename: format!("{}.ts", api.name),
        content: renderer.render(api, &declarations)?,
    })
}

fn export_marker(options: &RenderOptions) -> &'static str {
    if options.use_export {
        "export "
    } else {
        ""
    }
}
