use std::collections::HashSet;

use anyhow::{Context, Result, bail};

use crate::reference::{StateCfRecord, StatePostalCode};

pub fn load_registry() -> Result<Vec<StateCfRecord>> {
    let content = include_str!("../../assets/reference/cf_registry_v1.tsv");
    parse_registry_tsv(content, "built-in registry v1")
}

pub fn load_postal_codes() -> Result<Vec<StatePostalCode>> {
    let content = include_str!("../../assets/reference/state_postal_v1.tsv");
    parse_postal_tsv(content, "built-in postal v1")
}

pub fn parse_registry_tsv(content: &str, source: &str) -> Result<Vec<StateCfRecord>> {
    let mut out = Vec::new();
    let mut seen = HashSet::new();
    for (line_no, state, value) in tsv_pairs(content, source)? {
        let patients: u32 = value.parse().with_context(|| {
            format!("{}:{} invalid patient count '{}'", source, line_no, value)
        })?;
        if !seen.insert(state.to_string()) {
            bail!("{}:{} duplicate state '{}'", source, line_no, state);
        }
        out.push(StateCfRecord {
            state: state.to_string(),
            patients,
        });
    }
    Ok(out)
}

pub fn parse_postal_tsv(content: &str, source: &str) -> Result<Vec<StatePostalCode>> {
    let mut out = Vec::new();
    let mut seen = HashSet::new();
    for (line_no, state, code) in tsv_pairs(content, source)? {
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            bail!(
                "{}:{} postal code must be two uppercase letters, got '{}'",
                source,
                line_no,
                code
            );
        }
        if !seen.insert(state.to_string()) {
            bail!("{}:{} duplicate state '{}'", source, line_no, state);
        }
        out.push(StatePostalCode {
            state: state.to_string(),
            code: code.to_string(),
        });
    }
    Ok(out)
}

fn tsv_pairs<'a>(content: &'a str, source: &str) -> Result<Vec<(usize, &'a str, &'a str)>> {
    let mut out = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = trimmed.split('\t').collect();
        if parts.len() != 2 {
            bail!("{}:{} malformed TSV (expected 2 columns)", source, line_no);
        }
        let key = parts[0].trim();
        let value = parts[1].trim();
        if key.is_empty() || value.is_empty() {
            bail!("{}:{} empty field in TSV", source, line_no);
        }
        out.push((line_no, key, value));
    }
    Ok(out)
}
