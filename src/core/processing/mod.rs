pub mod background;
pub mod keying;
pub mod padding;
pub mod pipeline;
pub mod resize;
pub mod save;
