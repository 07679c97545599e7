use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::reference::ReferenceData;

pub struct Stage1Reference;

impl Stage1Reference {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Reference {
    fn name(&self) -> &'static str {
        "stage1_reference"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let reference = ReferenceData::load()?;
        ctx.states = reference.ranked();
        info!(
            version = %reference.version,
            states = reference.registry.len(),
            total_patients = reference.total_patients(),
            "reference_ready"
        );
        ctx.reference = Some(reference);
        Ok(())
    }
}
