//! Preview rasterization of committed mesh buffers.

/// `vello_cpu` rasterizer and PNG output.
pub mod cpu;
