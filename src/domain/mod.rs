// Domain layer: the decoded document, the count, and the ports the counter depends on.

pub mod model;
pub mod ports;
