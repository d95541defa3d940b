// Domain layer: contact records and the name-keyed book that holds them.

pub mod model;
