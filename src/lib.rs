pub mod apply;
pub mod error;
pub mod stencil;

pub use apply::apply_stencil;
pub use error::StencilError;
pub use stencil::{get_stencil, get_stencil_unit, Stencil1D};
