//! Menu data collaborators: the bundled mock menu and JSON files on disk.

mod bundled;
mod file;
mod validate;

pub use bundled::bundled;
pub use file::{load_file, resolve};
pub use validate::{validate, Diagnostic};
