mod backend;
mod enumerate;
mod error;
mod report;
#[cfg(feature = "sdl2-backend")]
mod sdl;
mod types;

pub use crate::backend::{Backend, ControllerDevice, JoystickDevice};
pub use crate::enumerate::enumerate;
pub use crate::error::{Error, Result};
pub use crate::report::{LogReporter, Reporter, Severity};
#[cfg(feature = "sdl2-backend")]
pub use crate::sdl::{apply_hints, AppliedHint, SdlBackend};
pub use crate::types::{
    ControllerInfo, DeviceIndex, DeviceReport, Enumeration, JoystickInfo,
};
