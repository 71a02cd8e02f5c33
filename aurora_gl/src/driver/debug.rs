/// Driver debug messages
///
/// A [`DebugHook`] is owned by the driver it is installed on. The driver
/// drops it when the hook is replaced, removed, or when the driver itself
/// is dropped, so no message can reach a callback that has been torn down.

use std::fmt;

/// Who emitted the message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebugSource {
    Api,
    WindowSystem,
    ShaderCompiler,
    ThirdParty,
    Application,
    Other,
}

/// What kind of event the message describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebugType {
    Error,
    DeprecatedBehavior,
    UndefinedBehavior,
    Portability,
    Performance,
    Marker,
    PushGroup,
    PopGroup,
    Other,
}

/// Message severity, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DebugSeverity {
    Notification,
    Low,
    Medium,
    High,
}

/// One debug message
#[derive(Debug, Clone, PartialEq)]
pub struct DebugMessage {
    pub source: DebugSource,
    pub kind: DebugType,
    pub id: u32,
    pub severity: DebugSeverity,
    pub message: String,
}

impl fmt::Display for DebugMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}/{:?}/{:?} #{}] {}",
            self.source, self.kind, self.severity, self.id, self.message
        )
    }
}

/// Callback receiving driver debug messages
///
/// Hooks run inside a driver call. They must not call back into the
/// [`Context`](crate::Context) that installed them.
pub type DebugHook = Box<dyn FnMut(&DebugMessage)>;
