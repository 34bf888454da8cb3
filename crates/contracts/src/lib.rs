//! Wire contracts shared by the storefront UI: order and product DTOs plus the
//! pure derivations (filtering, counting, validation) the dashboard runs on them.

pub mod domain;
