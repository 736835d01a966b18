//! Version command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Print version information
#[derive(Args)]
pub struct VersionCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl VersionCommand {
    /// Execute the version command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        if self.json {
            println!("{:#}", version_info());
        } else {
            println!("pathman version {}", env!("CARGO_PKG_VERSION"));
        }
        Ok(())
    }
}

/// Version and source repository as a JSON object.
fn version_info() -> serde_json::Value {
    serde_json::json!({
        "version": env!("CARGO_PKG_VERSION"),
        "source": env!("CARGO_PKG_REPOSITORY"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info_fields() {
        let info = version_info();
        assert_eq!(info["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(info["source"], "https://github.com/sfkleach/pathman");
    }
}
