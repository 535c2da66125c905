//! Output post-processing: optional inversion of the edge map.
use crate::config::OutputOptions;
use crate::image::{GrayImageU8, ImageView, ImageViewMut};

/// Replace every sample `v` with `255 - v`.
pub fn invert(src: &GrayImageU8) -> GrayImageU8 {
    let mut out = GrayImageU8::new(src.w, src.h);
    for y in 0..src.h {
        let src_row = src.row(y);
        let dst_row = out.row_mut(y);
        for (dst_px, &v) in dst_row.iter_mut().zip(src_row) {
            *dst_px = 255 - v;
        }
    }
    out
}

/// Apply the output options; without `invert` this is an identical copy.
pub fn apply(src: &GrayImageU8, options: &OutputOptions) -> GrayImageU8 {
    if options.invert {
        invert(src)
    } else {
        src.clone()
    }
}
