use crate::error::Result;
use crate::types::DeviceIndex;

/// A device opened through the game controller interface.
/// Dropping the value releases the underlying handle.
pub trait ControllerDevice {
    fn name(&self) -> String;
    fn vendor_id(&self) -> Option<u16>;
    fn product_id(&self) -> Option<u16>;
}

/// A device opened through the raw joystick interface.
/// Dropping the value releases the underlying handle.
pub trait JoystickDevice {
    fn name(&self) -> String;
    fn guid(&self) -> String;
    fn num_axes(&self) -> u32;
    fn num_buttons(&self) -> u32;
    fn num_balls(&self) -> u32;
}

/// Input library boundary used by the enumerator.
pub trait Backend {
    type Controller: ControllerDevice;
    type Joystick: JoystickDevice;

    /// Number of devices currently attached.
    fn num_devices(&self) -> Result<u32>;

    /// Whether the device at `index` supports the game controller interface.
    fn is_game_controller(&self, index: DeviceIndex) -> bool;

    fn open_controller(&self, index: DeviceIndex) -> Result<Self::Controller>;

    fn open_joystick(&self, index: DeviceIndex) -> Result<Self::Joystick>;
}
