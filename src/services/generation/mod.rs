pub mod interface;
pub mod subprocess;

pub use interface::{GenerationBackend, GenerationError};
pub use subprocess::SubprocessBackend;
