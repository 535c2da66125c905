pub mod f32;
pub mod io;
pub mod rgb;
pub mod traits;
pub mod u8;

pub use self::f32::ImageF32;
pub use self::io::{decode_image, encode_gray_png, encode_rgb_png, MAX_PIXELS};
pub use self::rgb::RgbImageU8;
pub use self::traits::{ImageView, ImageViewMut};
pub use self::u8::GrayImageU8;
