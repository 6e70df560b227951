//! `vrwv normalize <url>` – print the normalized form only.

use anyhow::Result;
use vrwv_core::admission::{default_policy, AdmissionError};

pub fn run_normalize(url: &str) -> Result<()> {
    if url.is_empty() {
        return Err(AdmissionError::EmptyInput.into());
    }
    println!("{}", default_policy().normalize(url));
    Ok(())
}
