pub mod health;
pub mod plan;
pub mod venue;
pub mod weather;
