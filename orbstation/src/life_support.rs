//! Life support module

use orblibgs::{ModuleId, ModuleName, StatusReport};

use crate::module::sealed::{Access, CoreAccess};
use crate::module::{ModuleCore, StationModule};

/// Life support system with a fixed oxygen level
#[derive(Debug)]
pub struct LifeSupportSystem {
    core: ModuleCore,
    oxygen_level: f64,
}

impl LifeSupportSystem {
    pub fn new(oxygen_level: f64) -> Self {
        Self {
            core: ModuleCore::new(ModuleName::new(ModuleId::LifeSupportSystem.default_name())),
            oxygen_level,
        }
    }

    pub fn oxygen_level(&self) -> f64 {
        self.oxygen_level
    }

    /// Report the oxygen level
    pub fn oxy_status(&self) -> StatusReport {
        StatusReport::OxygenLevel(self.oxygen_level).emit()
    }
}

impl StationModule for LifeSupportSystem {
    fn module_id(&self) -> ModuleId {
        ModuleId::LifeSupportSystem
    }

    fn core(&self) -> &ModuleCore {
        &self.core
    }
}

impl CoreAccess for LifeSupportSystem {
    fn core_mut(&mut self, _: Access) -> &mut ModuleCore {
        &mut self.core
    }
}
