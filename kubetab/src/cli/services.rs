use std::path::PathBuf;

use clap::Args;

use crate::{
    cli::{Error, internal},
    config::Config,
    record::ServiceRecord,
    table::ServiceFormatter,
};

/// Prints a service list document as an aligned table.
#[derive(Args, Clone)]
pub struct ServicesCommand {
    #[arg(
        short,
        long,
        default_value = "services.json",
        help = "Path of a JSON document containing a service list ({\"items\": [...]})."
    )]
    pub file: PathBuf,

    #[arg(short, long, help = "Include wide-only columns in the output.")]
    pub wide: bool,

    #[arg(long, help = "Suppress the header line.")]
    pub no_headers: bool,
}

impl ServicesCommand {
    /// # Errors
    ///
    /// Returns an error if the record file cannot be read or parsed, or if
    /// stdout rejects a write. A table-render failure is logged and is not
    /// fatal.
    pub fn run(self, config: &Config) -> Result<(), Error> {
        let records: Vec<ServiceRecord> = internal::load_records(&self.file)?;
        let options = config.output.resolve(self.wide, self.no_headers);
        internal::print_records(&ServiceFormatter, &records, options)
    }
}
