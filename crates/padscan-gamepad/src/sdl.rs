use sdl2::controller::GameController;
use sdl2::joystick::Joystick;
use sdl2::{GameControllerSubsystem, IntegerOrSdlError, JoystickSubsystem, Sdl};

use crate::backend::{Backend, ControllerDevice, JoystickDevice};
use crate::error::{Error, Result};
use crate::types::DeviceIndex;

/// SDL2-backed device backend.
///
/// SDL state is not `Send`, so the backend must stay on the thread that
/// created it.
pub struct SdlBackend {
    _sdl: Sdl,
    joystick: JoystickSubsystem,
    controller: GameControllerSubsystem,
}

/// Outcome of setting one SDL hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedHint {
    pub key: String,
    pub value: String,
    pub applied: bool,
}

/// Sets SDL hints in iteration order.
/// Hints only take effect when set before [`SdlBackend::new`].
pub fn apply_hints<I, K, V>(hints: I) -> Vec<AppliedHint>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    hints
        .into_iter()
        .map(|(key, value)| {
            let (key, value) = (key.as_ref(), value.as_ref());
            AppliedHint {
                key: key.to_string(),
                value: value.to_string(),
                applied: sdl2::hint::set(key, value),
            }
        })
        .collect()
}

impl SdlBackend {
    /// Initializes SDL with the joystick and game controller subsystems.
    pub fn new() -> Result<Self> {
        let sdl = sdl2::init().map_err(Error::BackendInit)?;
        let joystick = sdl.joystick().map_err(Error::BackendInit)?;
        let controller = sdl.game_controller().map_err(Error::BackendInit)?;

        Ok(Self {
            _sdl: sdl,
            joystick,
            controller,
        })
    }
}

impl Backend for SdlBackend {
    type Controller = GameController;
    type Joystick = Joystick;

    fn num_devices(&self) -> Result<u32> {
        self.joystick.num_joysticks().map_err(Error::Query)
    }

    fn is_game_controller(&self, index: DeviceIndex) -> bool {
        self.controller.is_game_controller(index)
    }

    fn open_controller(&self, index: DeviceIndex) -> Result<GameController> {
        self.controller.open(index).map_err(|e| Error::Open {
            index,
            reason: open_reason(e),
        })
    }

    fn open_joystick(&self, index: DeviceIndex) -> Result<Joystick> {
        self.joystick.open(index).map_err(|e| Error::Open {
            index,
            reason: open_reason(e),
        })
    }
}

/// SDL's own error text; index overflows keep their full description.
fn open_reason(e: IntegerOrSdlError) -> String {
    match e {
        IntegerOrSdlError::SdlError(message) => message,
        IntegerOrSdlError::IntegerOverflows(..) => e.to_string(),
    }
}

impl ControllerDevice for GameController {
    fn name(&self) -> String {
        GameController::name(self)
    }

    fn vendor_id(&self) -> Option<u16> {
        GameController::vendor_id(self)
    }

    fn product_id(&self) -> Option<u16> {
        GameController::product_id(self)
    }
}

impl JoystickDevice for Joystick {
    fn name(&self) -> String {
        Joystick::name(self)
    }

    fn guid(&self) -> String {
        Joystick::guid(self).string()
    }

    fn num_axes(&self) -> u32 {
        Joystick::num_axes(self)
    }

    fn num_buttons(&self) -> u32 {
        Joystick::num_buttons(self)
    }

    fn num_balls(&self) -> u32 {
        Joystick::num_balls(self)
    }
}
