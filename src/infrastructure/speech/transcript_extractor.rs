use serde_json::Value;

/// JSON keys checked for the recognized text, in priority order. The
/// `results` array form (Deepgram-style) is handled separately because it
/// nests one level deeper.
const TRANSCRIPT_KEYS: [&str; 3] = ["text", "transcript", "transcription"];

/// Pulls the transcript out of a provider response body.
///
/// Providers disagree on the field name, so the first non-blank string
/// wins: `text`, then `transcript`, then `transcription`, then
/// `results[0].transcript` or `results[0].text`. Returns `None` when the
/// body holds no usable transcript at all.
pub fn extract_transcript(body: &Value) -> Option<String> {
    for key in TRANSCRIPT_KEYS {
        if let Some(text) = non_blank_str(body.get(key)) {
            return Some(text);
        }
    }

    let first_result = body.get("results")?.as_array()?.first()?;
    non_blank_str(first_result.get("transcript"))
        .or_else(|| non_blank_str(first_result.get("text")))
}

fn non_blank_str(value: Option<&Value>) -> Option<String> {
    let text = value?.as_str()?.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
