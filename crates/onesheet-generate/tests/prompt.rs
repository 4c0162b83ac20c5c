use onesheet_core::models::request::Tone;
use onesheet_generate::prompt::{SYSTEM_PROMPT, build_user_prompt};

#[test]
fn system_prompt_pins_the_schema() {
    assert!(SYSTEM_PROMPT.contains("\"headline\""));
    assert!(SYSTEM_PROMPT.contains("\"benefits\""));
    assert!(SYSTEM_PROMPT.contains("\"cta\""));
    assert!(SYSTEM_PROMPT.contains("exactly 4 benefits"));
    assert!(SYSTEM_PROMPT.contains("exactly 6 features"));
    assert!(SYSTEM_PROMPT.contains("exactly 3 stats"));
}

#[test]
fn user_prompt_embeds_tone_and_input() {
    let prompt = build_user_prompt(Tone::Investor, "A drone delivery network");
    assert!(prompt.contains("investor"));
    assert!(prompt.contains("professional and data-driven"));
    assert!(prompt.contains("A drone delivery network"));
}

#[test]
fn each_tone_has_a_distinct_style() {
    let styles: std::collections::HashSet<_> =
        Tone::ALL.iter().map(|tone| tone.style()).collect();
    assert_eq!(styles.len(), Tone::ALL.len());
}
