//! Constants used throughout the classification pipeline.

/// The number of disease categories the model distinguishes.
pub const NUM_CLASSES: usize = 31;

/// The default input shape for classification (width, height).
pub const DEFAULT_CLASSIFICATION_INPUT_SHAPE: (u32, u32) = (224, 224);

/// The default shortest-edge target used before center cropping.
pub const DEFAULT_SHORTEST_EDGE: u32 = 256;

/// Per-channel mean used by the pretrained model's preprocessing.
pub const DEFAULT_IMAGE_MEAN: [f32; 3] = [0.485, 0.456, 0.406];

/// Per-channel standard deviation used by the pretrained model's preprocessing.
pub const DEFAULT_IMAGE_STD: [f32; 3] = [0.229, 0.224, 0.225];

/// The default pixel rescale factor applied before normalization.
pub const DEFAULT_RESCALE_FACTOR: f32 = 1.0 / 255.0;

/// The maximum accepted upload size in bytes.
///
/// Uploads above this limit are rejected before decoding.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// The file name of the ONNX model inside the model directory.
pub const MODEL_FILE_NAME: &str = "model.onnx";

/// The file name of the preprocessing configuration inside the model directory.
pub const PREPROCESSOR_CONFIG_FILE_NAME: &str = "preprocessor_config.json";
