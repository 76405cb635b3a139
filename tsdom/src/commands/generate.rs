use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use tsdom_codegen::RenderOptions;
use tsdom_codegen_typescript::Generator;
use tsdom_manifest::ManifestFile;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to tsdom.toml (defaults to ./tsdom.toml)
    #[arg(short, long, default_value = "tsdom.toml")]
    pub config: PathBuf,

    /// Output file (defaults to ./client.ts)
    #[arg(short, long, default_value = "client.ts")]
    pub output: PathBuf,

    /// Print the generated code instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Fail on nodes that have no TypeScript rendering instead of omitting them
    #[arg(long)]
    pub strict: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();
        let mut generator = Generator::from_manifest(file.manifest());
        if self.strict {
            generator = generator.with_options(RenderOptions::strict());
        }

        if self.dry_run {
            let text = generator.preview().wrap_err("Failed to generate code")?;
            print!("{}", text);
            return Ok(());
        }

        let result = generator
            .generate(&self.output)
            .wrap_err("Failed to generate code")?;

        println!(
            "Generated {} ({} operation{}, {} bytes)",
            result.path.display(),
            result.operations,
            if result.operations == 1 { "" } else { "s" },
            result.bytes
        );

        Ok(())
    }
}
