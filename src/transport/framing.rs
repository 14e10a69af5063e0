/// Accumulates raw bytes and yields newline-delimited frames.
///
/// The peer may deliver a frame in arbitrary fragments across many read
/// timeouts; bytes are buffered here until a `\n` shows up. Frames are
/// decoded lossily (the wire is ASCII, anything else becomes replacement
/// characters), trimmed of surrounding whitespace, and empty frames are
/// swallowed rather than yielded.
#[derive(Debug, Default)]
pub struct LineFramer {
    buf: Vec<u8>,
}

impl LineFramer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a chunk of bytes read from the transport.
    pub fn extend(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Pops the next complete frame, if one is buffered.
    ///
    /// Call repeatedly after each `extend` until it returns `None`; a
    /// single chunk may carry several frames.
    pub fn next_frame(&mut self) -> Option<String> {
        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buf.drain(..=pos).collect();
            let frame = String::from_utf8_lossy(&line).trim().to_string();
            if !frame.is_empty() {
                return Some(frame);
            }
        }
        None
    }
}
