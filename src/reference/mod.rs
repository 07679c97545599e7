mod loader;

use std::collections::{HashMap, HashSet};

use anyhow::{Result, bail};

pub use loader::{load_postal_codes, load_registry, parse_postal_tsv, parse_registry_tsv};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateCfRecord {
    pub state: String,
    pub patients: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatePostalCode {
    pub state: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateRow {
    pub state: String,
    pub code: String,
    pub patients: u32,
}

#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub version: String,
    pub registry: Vec<StateCfRecord>,
    pub postal: Vec<StatePostalCode>,
    patients_by_state: HashMap<String, u32>,
    code_by_state: HashMap<String, String>,
}

impl ReferenceData {
    pub fn load() -> Result<Self> {
        Self::from_parts(load_registry()?, load_postal_codes()?)
    }

    pub fn from_parts(registry: Vec<StateCfRecord>, postal: Vec<StatePostalCode>) -> Result<Self> {
        let patients_by_state: HashMap<String, u32> = registry
            .iter()
            .map(|r| (r.state.clone(), r.patients))
            .collect();
        let code_by_state: HashMap<String, String> = postal
            .iter()
            .map(|p| (p.state.clone(), p.code.clone()))
            .collect();

        for record in &registry {
            if !code_by_state.contains_key(&record.state) {
                bail!("no postal code for registry state '{}'", record.state);
            }
        }
        for entry in &postal {
            if !patients_by_state.contains_key(&entry.state) {
                bail!("postal code listed for unknown state '{}'", entry.state);
            }
        }
        let mut seen = HashSet::new();
        for entry in &postal {
            if !seen.insert(entry.code.as_str()) {
                bail!("postal code '{}' assigned to more than one state", entry.code);
            }
        }

        Ok(Self {
            version: "v1".to_string(),
            registry,
            postal,
            patients_by_state,
            code_by_state,
        })
    }

    pub fn patients(&self, state: &str) -> Option<u32> {
        self.patients_by_state.get(state).copied()
    }

    pub fn postal_code(&self, state: &str) -> Option<&str> {
        self.code_by_state.get(state).map(String::as_str)
    }

    pub fn join(&self) -> Vec<StateRow> {
        self.registry
            .iter()
            .filter_map(|r| {
                self.postal_code(&r.state).map(|code| StateRow {
                    state: r.state.clone(),
                    code: code.to_string(),
                    patients: r.patients,
                })
            })
            .collect()
    }

    pub fn ranked(&self) -> Vec<StateRow> {
        let mut rows = self.join();
        rank_rows(&mut rows);
        rows
    }

    pub fn total_patients(&self) -> u64 {
        self.registry.iter().map(|r| r.patients as u64).sum()
    }

    pub fn max_patients(&self) -> u32 {
        self.registry.iter().map(|r| r.patients).max().unwrap_or(0)
    }
}

pub fn rank_rows(rows: &mut [StateRow]) {
    rows.sort_by(|a, b| b.patients.cmp(&a.patients).then_with(|| a.state.cmp(&b.state)));
}
