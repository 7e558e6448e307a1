/// Position of a device in the backend's device table.
pub type DeviceIndex = u32;

/// A device opened through the game controller interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerInfo {
    pub index: DeviceIndex,
    pub name: String,
    pub vendor_id: Option<u16>,
    pub product_id: Option<u16>,
}

/// A device opened through the raw joystick interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoystickInfo {
    pub index: DeviceIndex,
    pub name: String,
    pub guid: String,
    pub axes: u32,
    pub buttons: u32,
    pub balls: u32,
}

/// Outcome for a single device of an enumeration pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceReport {
    Controller(ControllerInfo),
    Joystick(JoystickInfo),
    ControllerFailed { index: DeviceIndex, reason: String },
    JoystickFailed { index: DeviceIndex, reason: String },
}

impl DeviceReport {
    pub fn index(&self) -> DeviceIndex {
        match self {
            DeviceReport::Controller(info) => info.index,
            DeviceReport::Joystick(info) => info.index,
            DeviceReport::ControllerFailed { index, .. }
            | DeviceReport::JoystickFailed { index, .. } => *index,
        }
    }

    /// Whether the device was opened.
    pub fn is_opened(&self) -> bool {
        matches!(self, DeviceReport::Controller(_) | DeviceReport::Joystick(_))
    }
}

/// Result of one enumeration pass, in ascending device index order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enumeration {
    /// Device count reported by the backend.
    pub count: u32,
    pub devices: Vec<DeviceReport>,
}

impl Enumeration {
    /// Number of devices that were opened successfully.
    pub fn opened(&self) -> usize {
        self.devices.iter().filter(|d| d.is_opened()).count()
    }

    pub fn controllers(&self) -> impl Iterator<Item = &ControllerInfo> {
        self.devices.iter().filter_map(|d| match d {
            DeviceReport::Controller(info) => Some(info),
            _ => None,
        })
    }

    pub fn joysticks(&self) -> impl Iterator<Item = &JoystickInfo> {
        self.devices.iter().filter_map(|d| match d {
            DeviceReport::Joystick(info) => Some(info),
            _ => None,
        })
    }
}
