/// Builds the smallest WAV file a picky upload endpoint will still
/// accept: a 44-byte RIFF/PCM header plus four silent 16-bit samples.
/// Mono, 8000 Hz, 52 bytes total.
pub fn minimal_wav_clip() -> Vec<u8> {
    const SAMPLE_RATE: u32 = 8000;
    const CHANNELS: u16 = 1;
    const BITS_PER_SAMPLE: u16 = 16;
    const DATA_SIZE: u32 = 8;

    let byte_rate = SAMPLE_RATE * CHANNELS as u32 * BITS_PER_SAMPLE as u32 / 8;
    let block_align = CHANNELS * BITS_PER_SAMPLE / 8;

    let mut clip = Vec::with_capacity(44 + DATA_SIZE as usize);

    clip.extend_from_slice(b"RIFF");
    clip.extend_from_slice(&(36 + DATA_SIZE).to_le_bytes());
    clip.extend_from_slice(b"WAVE");

    clip.extend_from_slice(b"fmt ");
    clip.extend_from_slice(&16u32.to_le_bytes());
    clip.extend_from_slice(&1u16.to_le_bytes());
    clip.extend_from_slice(&CHANNELS.to_le_bytes());
    clip.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    clip.extend_from_slice(&byte_rate.to_le_bytes());
    clip.extend_from_slice(&block_align.to_le_bytes());
    clip.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    clip.extend_from_slice(b"data");
    clip.extend_from_slice(&DATA_SIZE.to_le_bytes());
    clip.extend_from_slice(&[0u8; DATA_SIZE as usize]);

    clip
}
