/// Largest file, in bytes, the upload form accepts.
pub const MAX_FILE_UPLOAD_SIZE: f64 = 10.0 * 1024.0 * 1024.0;

pub const FILE_TOO_LARGE_MESSAGE: &str = "File too large, please upload a file smaller than 10mb";
