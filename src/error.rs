use thiserror::Error;

/// Errors surfaced by the processing pipeline.
///
/// Every failure aborts the whole request: the pipeline is a linear chain
/// of pure stages, so there is nothing to retry and no partial result to
/// keep.
#[derive(Debug, Error)]
pub enum Error {
    /// The input bytes are not a decodable JPEG/PNG/BMP image, are
    /// truncated, or exceed the decoder's size bound.
    #[error("failed to decode input image: {0}")]
    Decode(String),

    /// A detector parameter is structurally invalid: even kernel size or
    /// a value outside its documented range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The result buffer could not be serialized to PNG.
    #[error("failed to encode output image: {0}")]
    Encode(String),
}
