//! Scripted command runner for driving lock sessions without real tools.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use fancylock_compose::RunConfig;
use fancylock_platform_core::{CommandRunner, Invocation, RunStatus};

pub const DUAL_HEAD: &str = "\
Screen 0: minimum 320 x 200, current 3200 x 1080, maximum 16384 x 16384
eDP-1 connected primary 1920x1080+0+0 (normal left inverted right x axis y axis) 344mm x 194mm
   1920x1080     60.02*+
HDMI-1 connected 1280x1024+1920+0 (normal left inverted right x axis y axis) 376mm x 301mm
   1280x1024     60.02*+
";

/// Which external call should misbehave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    ScreenshotExit,
    TopologySpawn,
    ScreenshotWritesNothing,
    TransformExit,
    TransformMissing,
    CompositeExit,
    StyledLocker,
    FallbackLocker,
}

/// Kind of call, classified from the invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Screenshot,
    Topology,
    Transform,
    Composite,
    StyledLocker,
    FallbackLocker,
    Other,
}

pub struct ScriptedRunner {
    topology: String,
    faults: Vec<Fault>,
    calls: Mutex<Vec<(Call, Invocation)>>,
}

impl ScriptedRunner {
    pub fn new(topology: &str) -> Self {
        Self {
            topology: topology.to_string(),
            faults: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_fault(mut self, fault: Fault) -> Self {
        self.faults.push(fault);
        self
    }

    pub fn calls(&self) -> Vec<(Call, Invocation)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn kinds(&self) -> Vec<Call> {
        self.calls().into_iter().map(|(kind, _)| kind).collect()
    }

    pub fn count(&self, kind: Call) -> usize {
        self.kinds().into_iter().filter(|k| *k == kind).count()
    }

    fn faulty(&self, fault: Fault) -> bool {
        self.faults.contains(&fault)
    }

    fn exit(&self, fault: Fault) -> std::io::Result<RunStatus> {
        Ok(RunStatus::from_code(if self.faulty(fault) { 1 } else { 0 }))
    }
}

/// Number of arguments exactly equal to `arg`.
pub fn count_arg(invocation: &Invocation, arg: &str) -> usize {
    invocation.args.iter().filter(|a| a.as_str() == arg).count()
}

fn classify(invocation: &Invocation) -> Call {
    match invocation.program.as_str() {
        "maim" => Call::Screenshot,
        "xrandr" => Call::Topology,
        "convert" if count_arg(invocation, "-level") > 0 => Call::Transform,
        "convert" => Call::Composite,
        "i3lock" if count_arg(invocation, "-ne") > 0 => Call::FallbackLocker,
        "i3lock" => Call::StyledLocker,
        _ => Call::Other,
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, invocation: &Invocation) -> std::io::Result<RunStatus> {
        let kind = classify(invocation);
        self.calls.lock().unwrap().push((kind, invocation.clone()));

        match kind {
            Call::Screenshot => {
                if self.faulty(Fault::ScreenshotExit) {
                    return Ok(RunStatus::from_code(1));
                }
                if !self.faulty(Fault::ScreenshotWritesNothing) {
                    let target = invocation.args.last().expect("screenshot target");
                    std::fs::write(target, b"\x89PNG fake")?;
                }
                Ok(RunStatus::SUCCESS)
            }
            Call::Transform if self.faulty(Fault::TransformMissing) => Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "convert not found",
            )),
            Call::Transform => self.exit(Fault::TransformExit),
            Call::Composite => self.exit(Fault::CompositeExit),
            Call::StyledLocker => self.exit(Fault::StyledLocker),
            Call::FallbackLocker => self.exit(Fault::FallbackLocker),
            Call::Topology | Call::Other => Ok(RunStatus::SUCCESS),
        }
    }

    fn capture(&self, invocation: &Invocation) -> std::io::Result<String> {
        let kind = classify(invocation);
        self.calls.lock().unwrap().push((kind, invocation.clone()));
        match kind {
            Call::Topology if self.faulty(Fault::TopologySpawn) => Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "xrandr not found",
            )),
            Call::Topology => Ok(self.topology.clone()),
            _ => Ok(String::new()),
        }
    }
}

pub fn run_config(image_path: &Path) -> RunConfig {
    let image = image_path.to_string_lossy().into_owned();
    RunConfig {
        greyscale: false,
        pixelate: false,
        font: "DejaVu-Sans".to_string(),
        text: "Type password to unlock".to_string(),
        screenshot: Invocation::new("maim").arg(image),
        image_path: image_path.to_path_buf(),
        icon_path: PathBuf::from("/usr/share/fancylock/icons/lock.png"),
        locker: "i3lock".to_string(),
    }
}
