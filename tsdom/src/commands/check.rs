use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use tsdom_codegen_typescript::{ClientClassBuilder, ClientFunctionBuilder};
use tsdom_manifest::ManifestFile;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to tsdom.toml (defaults to ./tsdom.toml)
    #[arg(short, long, default_value = "tsdom.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();
        let manifest = file.manifest();

        // Building the class catches method name collisions
        ClientClassBuilder::new(&manifest.client)
            .build(&manifest.operations)
            .wrap_err("Validation failed")?;

        println!("✓ {} is valid\n", self.config.display());
        println!("  client {}\n", manifest.client.name);

        let count = manifest.operations.len();
        println!(
            "  {} operation{}:",
            count,
            if count == 1 { "" } else { "s" }
        );

        let functions = ClientFunctionBuilder::new(manifest.client.camel_case);
        for operation in &manifest.operations {
            println!(
                "    {:<7} {} -> {}()",
                operation.method,
                operation.path,
                functions.method_name(operation)
            );
        }

        Ok(())
    }
}
