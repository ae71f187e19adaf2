/// Encode `value` as a JavaScript string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Cancel-then-speak against `window.speechSynthesis`.
///
/// Returns early without error when the engine is missing. Resuming before
/// speaking unsticks engines that were left paused.
pub(super) fn speak_script(text: &str, lang: &str, voice_prefix: &str, rate: f32) -> String {
    format!(
        r#"(function() {{
                    const synth = window.speechSynthesis;
                    if (!synth) return;
                    synth.cancel();
                    const text = {text};
                    if (!text) return;
                    const utterance = new SpeechSynthesisUtterance(text);
                    utterance.lang = {lang};
                    utterance.rate = {rate};
                    const voices = synth.getVoices();
                    const voice = voices.find((v) => v.lang && v.lang.startsWith({voice_prefix}));
                    if (voice) utterance.voice = voice;
                    synth.resume();
                    synth.speak(utterance);
                }})();"#,
        text = js_string(text),
        lang = js_string(lang),
        voice_prefix = js_string(voice_prefix),
        rate = rate,
    )
}

pub(super) fn cancel_script() -> &'static str {
    r"(function() {
                    if (window.speechSynthesis) window.speechSynthesis.cancel();
                })();"
}
