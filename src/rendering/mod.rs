pub mod codec;
pub mod gallery;

pub use codec::{decode_png, encode_png, load_png, save_png};
pub use gallery::{render_gallery, GalleryReport};
