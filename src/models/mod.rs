pub mod location;
pub mod plan;
pub mod venue;
pub mod weather;
