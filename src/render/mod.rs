//! Screen-space geometry for the drawing layer

mod frame;

pub use frame::{RenderFrame, ScreenLine, ScreenQuad, build_frame};
