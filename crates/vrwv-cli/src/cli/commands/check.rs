//! `vrwv check <url>` – run the admission pipeline.

use anyhow::Result;
use vrwv_core::admission::{normalize_and_admit, AdmissionResult};

pub fn run_check(url: &str) -> Result<()> {
    match normalize_and_admit(url) {
        AdmissionResult::Accepted { canonical_url, rule } => {
            println!("accepted {rule} {canonical_url}");
            Ok(())
        }
        AdmissionResult::Rejected(reason) => anyhow::bail!("rejected: {reason}"),
    }
}
