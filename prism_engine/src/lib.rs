/*!
# Prism Engine

Scene transforms, camera and per-frame composition for a small real-time
3D renderer.

The crate owns the CPU side of a frame: where every object is (Transform),
where the viewer is and what it sees (Camera), which meshes and materials
are drawn (Entity, Scene, resources), and the order in which a frame is
updated and submitted (FrameDriver). Everything that touches a GPU sits
behind the `Renderer` trait.

## Architecture

- **Transform**: position, Euler rotation, scale, cached world matrix
- **Camera**: viewer transform, view and projection matrices
- **Scene**: camera, lights, clear color and entities in draw order
- **ResourceManager**: name-keyed shared meshes, materials, textures
- **FrameDriver**: Updating -> Rendering state machine, one pass per frame
- **Renderer**: trait implemented by the rendering backend
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod camera;
pub mod frame;
pub mod input;
pub mod lighting;
pub mod renderer;
pub mod resource;
pub mod scene;

// Main prism namespace module
pub mod prism {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton (logging)
    pub use crate::engine::Engine;

    // Renderer seam
    pub use crate::renderer::Renderer;

    // Logging sub-module (types only, macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    pub mod camera {
        pub use crate::camera::*;
    }

    pub mod frame {
        pub use crate::frame::*;
    }

    pub mod input {
        pub use crate::input::*;
    }

    pub mod lighting {
        pub use crate::lighting::*;
    }

    pub mod render {
        pub use crate::renderer::*;
    }

    pub mod resource {
        pub use crate::resource::*;
    }

    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
