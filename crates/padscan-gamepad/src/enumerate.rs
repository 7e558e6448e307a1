use crate::backend::{Backend, ControllerDevice, JoystickDevice};
use crate::report::Reporter;
use crate::types::{
    ControllerInfo, DeviceIndex, DeviceReport, Enumeration, JoystickInfo,
};

/// Enumerates every attached device once, in ascending index order.
///
/// Devices with game controller support are opened as controllers, the rest
/// as raw joysticks. Failures are reported and never stop the pass. Each
/// handle is dropped before the next index is visited.
pub fn enumerate<B, R>(backend: &B, reporter: &mut R) -> Enumeration
where
    B: Backend,
    R: Reporter + ?Sized,
{
    let count = match backend.num_devices() {
        Ok(count) => count,
        Err(e) => {
            reporter.error(format!("Could not query devices: {}", e.reason()));
            return Enumeration::default();
        }
    };

    if count > 0 {
        reporter.info(format!("Controllers detected: {count}"));
    }

    let devices = (0..count)
        .map(|index| {
            if backend.is_game_controller(index) {
                open_controller(backend, index, reporter)
            } else {
                open_joystick(backend, index, reporter)
            }
        })
        .collect();

    Enumeration { count, devices }
}

fn open_controller<B, R>(
    backend: &B,
    index: DeviceIndex,
    reporter: &mut R,
) -> DeviceReport
where
    B: Backend,
    R: Reporter + ?Sized,
{
    match backend.open_controller(index) {
        Ok(controller) => {
            let info = ControllerInfo {
                index,
                name: controller.name(),
                vendor_id: controller.vendor_id(),
                product_id: controller.product_id(),
            };
            reporter.info(format!("Controller #{index}: {}", info.name));
            DeviceReport::Controller(info)
        }
        Err(e) => {
            let reason = e.reason().to_string();
            reporter.error(format!("Could not open controller #{index}: {reason}"));
            DeviceReport::ControllerFailed { index, reason }
        }
    }
}

fn open_joystick<B, R>(
    backend: &B,
    index: DeviceIndex,
    reporter: &mut R,
) -> DeviceReport
where
    B: Backend,
    R: Reporter + ?Sized,
{
    reporter.info(format!("Generic controller #{index}"));
    match backend.open_joystick(index) {
        Ok(joystick) => {
            let info = JoystickInfo {
                index,
                name: joystick.name(),
                guid: joystick.guid(),
                axes: joystick.num_axes(),
                buttons: joystick.num_buttons(),
                balls: joystick.num_balls(),
            };
            reporter.info(format!(
                "Name: {}, Axes: {}, Buttons: {}, Balls: {}",
                info.name, info.axes, info.buttons, info.balls
            ));
            DeviceReport::Joystick(info)
        }
        Err(e) => {
            let reason = e.reason().to_string();
            reporter.error(format!(
                "Could not open generic controller #{index}: {reason}"
            ));
            DeviceReport::JoystickFailed { index, reason }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::error::{Error, Result};
    use crate::report::Severity;

    #[derive(Clone)]
    struct FakeDevice {
        name: &'static str,
        controller: bool,
        fail: Option<&'static str>,
    }

    impl FakeDevice {
        fn controller(name: &'static str) -> Self {
            Self { name, controller: true, fail: None }
        }

        fn joystick(name: &'static str) -> Self {
            Self { name, controller: false, fail: None }
        }

        fn failing(mut self, reason: &'static str) -> Self {
            self.fail = Some(reason);
            self
        }
    }

    /// Counts live handles so tests can check that every open is released.
    struct Handle {
        name: &'static str,
        live: Rc<Cell<i32>>,
    }

    impl Handle {
        fn new(name: &'static str, live: &Rc<Cell<i32>>) -> Self {
            live.set(live.get() + 1);
            Self { name, live: live.clone() }
        }
    }

    impl Drop for Handle {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
        }
    }

    impl ControllerDevice for Handle {
        fn name(&self) -> String {
            self.name.to_string()
        }

        fn vendor_id(&self) -> Option<u16> {
            Some(0x045e)
        }

        fn product_id(&self) -> Option<u16> {
            None
        }
    }

    impl JoystickDevice for Handle {
        fn name(&self) -> String {
            self.name.to_string()
        }

        fn guid(&self) -> String {
            "03000000".to_string()
        }

        fn num_axes(&self) -> u32 {
            4
        }

        fn num_buttons(&self) -> u32 {
            12
        }

        fn num_balls(&self) -> u32 {
            1
        }
    }

    struct FakeBackend {
        devices: Vec<FakeDevice>,
        live: Rc<Cell<i32>>,
        max_live: Cell<i32>,
        count_queries: Cell<u32>,
        query_error: Option<&'static str>,
    }

    impl FakeBackend {
        fn new(devices: Vec<FakeDevice>) -> Self {
            Self {
                devices,
                live: Rc::new(Cell::new(0)),
                max_live: Cell::new(0),
                count_queries: Cell::new(0),
                query_error: None,
            }
        }

        fn open(&self, index: DeviceIndex) -> Result<Handle> {
            let device = &self.devices[index as usize];
            if let Some(reason) = device.fail {
                return Err(Error::Open { index, reason: reason.to_string() });
            }
            let handle = Handle::new(device.name, &self.live);
            self.max_live.set(self.max_live.get().max(self.live.get()));
            Ok(handle)
        }
    }

    impl Backend for FakeBackend {
        type Controller = Handle;
        type Joystick = Handle;

        fn num_devices(&self) -> Result<u32> {
            self.count_queries.set(self.count_queries.get() + 1);
            match self.query_error {
                Some(reason) => Err(Error::Query(reason.to_string())),
                None => Ok(self.devices.len() as u32),
            }
        }

        fn is_game_controller(&self, index: DeviceIndex) -> bool {
            self.devices[index as usize].controller
        }

        fn open_controller(&self, index: DeviceIndex) -> Result<Handle> {
            self.open(index)
        }

        fn open_joystick(&self, index: DeviceIndex) -> Result<Handle> {
            self.open(index)
        }
    }

    #[derive(Default)]
    struct Recorder {
        lines: Vec<(Severity, String)>,
    }

    impl Reporter for Recorder {
        fn report(&mut self, severity: Severity, message: String) {
            self.lines.push((severity, message));
        }
    }

    fn run(backend: &FakeBackend) -> (Enumeration, Vec<(Severity, String)>) {
        let mut recorder = Recorder::default();
        let result = enumerate(backend, &mut recorder);
        (result, recorder.lines)
    }

    #[test]
    fn no_devices_emits_nothing() {
        let backend = FakeBackend::new(vec![]);
        let (result, lines) = run(&backend);
        assert!(lines.is_empty());
        assert_eq!(result, Enumeration::default());
    }

    #[test]
    fn controllers_are_reported_by_name() {
        let backend = FakeBackend::new(vec![
            FakeDevice::controller("Xbox One"),
            FakeDevice::controller("DualSense"),
            FakeDevice::controller("Switch Pro"),
        ]);
        let (result, lines) = run(&backend);

        assert_eq!(lines[0], (Severity::Info, "Controllers detected: 3".to_string()));
        let per_device = &lines[1..];
        assert_eq!(per_device.len(), 3);
        for (line, name) in per_device.iter().zip(["Xbox One", "DualSense", "Switch Pro"]) {
            assert_eq!(line.0, Severity::Info);
            assert!(line.1.contains(name), "{} should mention {name}", line.1);
        }
        assert_eq!(result.count, 3);
        assert_eq!(result.opened(), 3);
        assert_eq!(
            result.controllers().next(),
            Some(&ControllerInfo {
                index: 0,
                name: "Xbox One".into(),
                vendor_id: Some(0x045e),
                product_id: None,
            })
        );
    }

    #[test]
    fn controller_failure_is_logged_and_pass_continues() {
        let backend = FakeBackend::new(vec![
            FakeDevice::controller("Broken").failing("Device busy"),
            FakeDevice::controller("Working"),
        ]);
        let (result, lines) = run(&backend);

        assert_eq!(
            lines[1],
            (Severity::Error, "Could not open controller #0: Device busy".to_string())
        );
        assert_eq!(lines[2], (Severity::Info, "Controller #1: Working".to_string()));
        assert_eq!(
            result.devices[0],
            DeviceReport::ControllerFailed { index: 0, reason: "Device busy".into() }
        );
        assert_eq!(result.opened(), 1);
    }

    #[test]
    fn generic_device_prints_details() {
        let backend = FakeBackend::new(vec![FakeDevice::joystick("Flight Stick")]);
        let (result, lines) = run(&backend);

        assert_eq!(
            lines[1..],
            [
                (Severity::Info, "Generic controller #0".to_string()),
                (
                    Severity::Info,
                    "Name: Flight Stick, Axes: 4, Buttons: 12, Balls: 1".to_string()
                ),
            ]
        );
        let joystick = result.joysticks().next().expect("joystick reported");
        assert_eq!(joystick.guid, "03000000");
        assert_eq!(joystick.balls, 1);
    }

    #[test]
    fn generic_device_failure_skips_details() {
        let backend = FakeBackend::new(vec![
            FakeDevice::joystick("Ghost").failing("No such device"),
        ]);
        let (result, lines) = run(&backend);

        assert_eq!(
            lines[1..],
            [
                (Severity::Info, "Generic controller #0".to_string()),
                (
                    Severity::Error,
                    "Could not open generic controller #0: No such device".to_string()
                ),
            ]
        );
        assert!(!lines.iter().any(|(_, l)| l.starts_with("Name:")));
        assert_eq!(result.opened(), 0);
    }

    #[test]
    fn order_follows_device_index() {
        let backend = FakeBackend::new(vec![
            FakeDevice::joystick("a"),
            FakeDevice::controller("b").failing("busy"),
            FakeDevice::controller("c"),
            FakeDevice::joystick("d").failing("gone"),
        ]);
        let (first, first_lines) = run(&backend);
        let (second, second_lines) = run(&backend);

        let indices: Vec<_> = first.devices.iter().map(DeviceReport::index).collect();
        assert_eq!(indices, [0, 1, 2, 3]);
        assert_eq!(first, second);
        assert_eq!(first_lines, second_lines);
    }

    #[test]
    fn handles_are_released_on_every_path() {
        let backend = FakeBackend::new(vec![
            FakeDevice::controller("pad"),
            FakeDevice::joystick("stick"),
            FakeDevice::controller("bad").failing("busy"),
            FakeDevice::joystick("worse").failing("gone"),
        ]);
        let _ = run(&backend);

        assert_eq!(backend.live.get(), 0);
        assert_eq!(backend.max_live.get(), 1);
    }

    #[test]
    fn device_count_is_queried_once() {
        let backend = FakeBackend::new(vec![
            FakeDevice::controller("a"),
            FakeDevice::joystick("b"),
        ]);
        let _ = run(&backend);
        assert_eq!(backend.count_queries.get(), 1);
    }

    #[test]
    fn query_failure_is_reported() {
        let mut backend = FakeBackend::new(vec![FakeDevice::controller("a")]);
        backend.query_error = Some("Joystick subsystem not initialized");
        let (result, lines) = run(&backend);

        assert_eq!(
            lines,
            [(
                Severity::Error,
                "Could not query devices: Joystick subsystem not initialized".to_string()
            )]
        );
        assert!(result.devices.is_empty());
    }
}
