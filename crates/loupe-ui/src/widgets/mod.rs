//! Inspector widgets drawn through a [`Painter`](crate::Painter).

pub mod histogram;
pub mod inspector;
pub mod normal;

pub use histogram::{draw_histogram, histogram, histogram_sized};
pub use inspector::inspect;
pub use normal::draw_normal;
