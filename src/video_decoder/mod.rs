pub mod impl_fake;
pub mod impl_gif;
pub mod interface;
