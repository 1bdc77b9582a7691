/// Hard ceiling on uploaded media size, enforced before any network call.
pub const MAX_UPLOAD_BYTES: u64 = 25 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct AudioUpload {
    pub file_name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl AudioUpload {
    pub fn new(file_name: String, mime_type: String, data: Vec<u8>) -> Self {
        Self {
            file_name,
            mime_type,
            data,
        }
    }

    pub fn size_bytes(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn exceeds_size_limit(&self) -> bool {
        self.size_bytes() > MAX_UPLOAD_BYTES
    }
}
