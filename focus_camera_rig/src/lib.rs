/*!
# Focus Camera Rig

Third-person orbit/follow camera rig for real-time engines.

The rig tracks a target node, orbits around it from pointer, touch or axis
input inside angular constraints, eases back from the constraint edges when
the user lets go, and zooms with the scroll wheel or a two-finger pinch.

## Architecture

- **TransformStore**: host-owned scene graph addressed by stable keys
- **RigComponent**: lifecycle hooks (`on_init`, `on_update`, `on_teardown`)
- **OrbitRig**: the rig; rotates target nodes, chases them with current nodes
- **Zoomer**: zoom strategy selected by `ZoomMode` (scroll, pinch, disabled)
- **InputCollector**: builds per-frame `InputState` from winit events

The host calls the lifecycle hooks from its own frame loop; the rig never
stores references into the store, only keys.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod utils;
pub mod transform;
pub mod input;
pub mod rig;

// Main focuscam namespace module
pub mod focuscam {
    // Error types
    pub use crate::error::{Error, Result};

    // Process-wide services (logger)
    pub use crate::engine::Engine;

    // Logging sub-module (types only; macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Math helpers
    pub mod utils {
        pub use crate::utils::*;
    }

    // Transform sub-module
    pub mod transform {
        pub use crate::transform::*;
    }

    // Input sub-module
    pub mod input {
        pub use crate::input::*;
    }

    // Rig sub-module
    pub mod rig {
        pub use crate::rig::*;
    }
}

// Re-export math library at crate root
pub use glam;
