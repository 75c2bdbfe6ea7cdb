// Core services
pub mod cart_total;

pub use cart_total::CartTotalService;
