//! Station module base
//!
//! Every module has an immutable name and a slot for the one drone it owns.

use orblibgs::{ModuleId, ModuleName};

use crate::drone::Drone;

/// State common to all station modules
#[derive(Debug)]
pub struct ModuleCore {
    name: ModuleName,
    drone: Option<Drone>,
}

impl ModuleCore {
    pub fn new(name: ModuleName) -> Self {
        Self { name, drone: None }
    }

    pub fn name(&self) -> &ModuleName {
        &self.name
    }

    pub fn drone(&self) -> Option<&Drone> {
        self.drone.as_ref()
    }

    pub(crate) fn drone_mut(&mut self) -> Option<&mut Drone> {
        self.drone.as_mut()
    }

    /// Give this module ownership of a drone, replacing any previous one
    pub(crate) fn attach_drone(&mut self, drone: Drone) {
        self.drone = Some(drone);
    }
}

/// Mutable access to a module's core, usable only inside this crate.
///
/// `Access` cannot be built elsewhere, so outside code can read a module's
/// drone but never replace or swap it.
pub(crate) mod sealed {
    use super::ModuleCore;

    pub struct Access(pub(crate) ());

    pub trait CoreAccess {
        fn core_mut(&mut self, access: Access) -> &mut ModuleCore;
    }
}

/// A named module that may own a drone
///
/// A module's drone always names that module as its assigned module. The drone
/// slot cannot be written from outside the station crate:
///
/// ```compile_fail
/// use orbstation::{ControlCenter, SecurityCode, StationModule};
///
/// let mut cc = ControlCenter::new(false, SecurityCode::new("62N28R"));
/// let _ = cc.drone_mut();
/// ```
///
/// ```compile_fail
/// use orblibgs::ModuleId;
/// use orbstation::Drone;
///
/// let _ = Drone::new(ModuleId::LifeSupportSystem);
/// ```
pub trait StationModule: sealed::CoreAccess {
    fn module_id(&self) -> ModuleId;

    fn core(&self) -> &ModuleCore;

    fn name(&self) -> &ModuleName {
        self.core().name()
    }

    fn drone(&self) -> Option<&Drone> {
        self.core().drone()
    }
}

pub(crate) fn core_mut(module: &mut dyn StationModule) -> &mut ModuleCore {
    sealed::CoreAccess::core_mut(module, sealed::Access(()))
}
