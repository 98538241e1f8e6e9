// Domain layer: vacancy records, statistics and the ports the adapters implement.

pub mod model;
pub mod ports;
