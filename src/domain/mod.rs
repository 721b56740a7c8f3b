// Domain layer: models and ports. Nothing here touches the filesystem or stdin.

pub mod model;
pub mod ports;
