pub mod movie;

mod router;
pub use router::get_router;
