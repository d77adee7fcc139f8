//! Research lab module

use orblibgs::{ModuleId, ModuleName};

use crate::module::sealed::{Access, CoreAccess};
use crate::module::{ModuleCore, StationModule};

/// Research lab collecting samples in arrival order
#[derive(Debug)]
pub struct ResearchLab {
    core: ModuleCore,
    samples: Vec<String>,
}

impl ResearchLab {
    pub fn new() -> Self {
        Self {
            core: ModuleCore::new(ModuleName::new(ModuleId::ResearchLab.default_name())),
            samples: Vec::new(),
        }
    }

    pub fn add_samples(&mut self, sample: impl Into<String>) {
        self.samples.push(sample.into());
    }

    pub fn samples(&self) -> &[String] {
        &self.samples
    }
}

impl Default for ResearchLab {
    fn default() -> Self {
        Self::new()
    }
}

impl StationModule for ResearchLab {
    fn module_id(&self) -> ModuleId {
        ModuleId::ResearchLab
    }

    fn core(&self) -> &ModuleCore {
        &self.core
    }
}

impl CoreAccess for ResearchLab {
    fn core_mut(&mut self, _: Access) -> &mut ModuleCore {
        &mut self.core
    }
}
