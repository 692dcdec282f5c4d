// Domain layer: record types and the source/sink/config seams. No I/O here.

pub mod model;
pub mod ports;
