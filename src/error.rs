use thiserror::Error;

/// The main error type for example conversion.
#[derive(Debug, Error)]
pub enum TfExampleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image '{filename}' has no encoded data; TFRecord examples require image bytes")]
    MissingImageData { filename: String },

    #[error("Unhandled source_id type: '{0}' (supported: filename, numeric-dummy)")]
    UnknownSourceIdType(String),

    #[error("Failed to encode mask for '{filename}' as PNG: {source}")]
    MaskEncode {
        filename: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to read image dimensions for '{filename}': {source}")]
    ImageProbe {
        filename: String,
        #[source]
        source: imagesize::ImageError,
    },

    #[error("Unsupported image format for '{filename}': {format}")]
    UnsupportedImageFormat { filename: String, format: String },

    #[error("Failed to parse conversion options from JSON: {0}")]
    OptionsJsonParse(#[source] serde_json::Error),

    #[error("Failed to parse conversion options from YAML: {0}")]
    OptionsYamlParse(#[source] serde_yaml::Error),

    #[error("Failed to decode example: {0}")]
    ExampleDecode(#[from] prost::DecodeError),
}
