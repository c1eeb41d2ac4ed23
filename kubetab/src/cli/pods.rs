use std::path::PathBuf;

use clap::Args;

use crate::{
    cli::{Error, internal},
    config::Config,
    record::PodRecord,
    table::PodFormatter,
};

/// Prints a pod list document as an aligned table.
///
/// The Retries and Age columns are wide-only; pass `--wide` to include them.
#[derive(Args, Clone)]
pub struct PodsCommand {
    #[arg(
        short,
        long,
        default_value = "pods.json",
        help = "Path of a JSON document containing a pod list ({\"items\": [...]})."
    )]
    pub file: PathBuf,

    #[arg(short, long, help = "Include wide-only columns (Retries, Age) in the output.")]
    pub wide: bool,

    #[arg(long, help = "Suppress the header line.")]
    pub no_headers: bool,
}

impl PodsCommand {
    /// # Errors
    ///
    /// Returns an error if the record file cannot be read or parsed, or if
    /// stdout rejects a write. A table-render failure is logged and is not
    /// fatal.
    pub fn run(self, config: &Config) -> Result<(), Error> {
        let records: Vec<PodRecord> = internal::load_records(&self.file)?;
        let options = config.output.resolve(self.wide, self.no_headers);
        internal::print_records(&PodFormatter, &records, options)
    }
}
