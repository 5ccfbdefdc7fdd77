//! Builds the instruction string sent to the completion service. The prompt
//! embeds one of two fixed result schemas plus a matching rule block, chosen
//! by the device classification: smartphones get mode/gesture guidance and are
//! never told to dial numeric exposure settings, dedicated cameras get
//! concrete dialable values.

use crate::device::{classify, DeviceProfile, DeviceType};

const SMARTPHONE_SCHEMA: &str = r#"
Return ONLY a valid JSON object with exactly this shape:

{
  "device_type": "SMARTPHONE",
  "mode": "Auto HDR",
  "lens": "Main wide lens (1×)",
  "stability": "3s timer, brace phone on rock or car",
  "exposure_adjustment": "Slightly lower the exposure slider",
  "focus_action": "Tap to focus, then hold to lock AE/AF",
  "notes": "Short 1–2 sentence explanation referencing actual phone features, NOT manual shutter/ISO/aperture dials.",
  "variant_brighter": {
    "exposure_adjustment": "Raise exposure slider slightly",
    "notes": "Short explanation focused on phone actions, not ISO/shutter dials."
  },
  "variant_more_bokeh": {
    "mode": "Portrait mode (1×)",
    "notes": "Short explanation focused on phone actions, not aperture numbers."
  }
}
"#;

const CAMERA_SCHEMA: &str = r#"
Return ONLY a valid JSON object with exactly this shape:

{
  "device_type": "CAMERA",
  "aperture": "f/2.8",
  "shutter_speed": "1/250",
  "iso": 400,
  "white_balance": "Daylight",
  "focus_mode": "AF-C",
  "metering_mode": "Matrix",
  "drive_mode": "Single",
  "notes": "Short explanation (1–2 sentences).",
  "variant_brighter": {
    "aperture": "f/2.0",
    "shutter_speed": "1/250",
    "iso": 800
  },
  "variant_more_bokeh": {
    "aperture": "f/1.4",
    "shutter_speed": "1/500",
    "iso": 1600
  }
}
"#;

const SMARTPHONE_RULES: &str = r#"
SMARTPHONE RULES (CRITICAL, JSON-ONLY):

- The user CANNOT directly dial aperture, shutter speed, or ISO in the default camera app.
- NEVER instruct: "set shutter to 1/250", "set ISO to 800", or "use f/8" on a smartphone.
- You may mention those concepts only indirectly, e.g. "the phone will choose a faster shutter", but NOT as something the user dials.
- Focus on actions the user can actually perform:
  • Enable Night mode / Auto HDR / Portrait mode
  • Choose main wide lens vs ultra-wide vs telephoto
  • Tap to focus, long-press to lock AE/AF
  • Use the 3s or 10s timer
  • Brace the phone on a surface (rock, car roof, railing, tripod)
  • Drag the exposure slider slightly up/down
- "notes" MUST talk about phone features and gestures, NOT “set ISO x” or “use f/x”.
- "variant_brighter" and "variant_more_bokeh" must ALSO be expressed in terms of modes/actions (longer Night mode, Portrait mode, moving closer), not numeric shutter/ISO changes.
- Do NOT add or remove top-level keys from the SMARTPHONE schema.
"#;

const CAMERA_RULES: &str = r#"
CAMERA RULES (JSON-ONLY):

- The user has direct control over aperture, shutter speed, ISO, white balance, AF mode, metering, and drive mode.
- Provide concrete, dialable settings for a competent enthusiast.
- Balance motion blur, noise, and depth of field based on scenario and constraints.
- Keep "notes" short (1–2 sentences) and focused on tradeoffs.
- Do NOT add or remove top-level keys from the CAMERA schema.
- "iso" must be a NUMBER (not a string).
- "shutter_speed" must be a STRING like "1/125" or "0.5s".
"#;

/// Rule and schema blocks for one device class, selected once per request.
struct DeviceGuidance {
    context_heading: &'static str,
    rules: &'static str,
    schema: &'static str,
}

const SMARTPHONE_GUIDANCE: DeviceGuidance = DeviceGuidance {
    context_heading: "SMARTPHONE CONTEXT:",
    rules: SMARTPHONE_RULES,
    schema: SMARTPHONE_SCHEMA,
};

const CAMERA_GUIDANCE: DeviceGuidance = DeviceGuidance {
    context_heading: "CAMERA CONTEXT:",
    rules: CAMERA_RULES,
    schema: CAMERA_SCHEMA,
};

fn guidance_for(device_type: DeviceType) -> &'static DeviceGuidance {
    match device_type {
        DeviceType::Smartphone => &SMARTPHONE_GUIDANCE,
        DeviceType::Camera => &CAMERA_GUIDANCE,
    }
}

fn device_details(raw_model: &str, profile: &DeviceProfile) -> String {
    format!(
        "DEVICE DETAILS:\n\
         - Raw camera string: \"{}\"\n\
         - Detected family: {}\n\
         - Platform: {}\n\
         - Typical features: {}\n",
        if raw_model.is_empty() { "N/A" } else { raw_model },
        profile.family,
        profile.platform,
        profile.example_features,
    )
}

fn or_placeholder<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    match value {
        Some(text) if !text.is_empty() => text,
        _ => placeholder,
    }
}

/// Assemble the full instruction string for one request. Deterministic: the
/// output depends only on the four input fields.
pub fn build_prompt(
    scenario: Option<&str>,
    camera_model: Option<&str>,
    lens: Option<&str>,
    constraints: Option<&str>,
) -> String {
    let raw_model = camera_model.unwrap_or("");
    let profile = classify(raw_model);
    let guidance = guidance_for(profile.device_type);

    format!(
        "You are an expert photography assistant.\n\
         \n\
         Your job is to give fast, practical, baseline settings that the user can dial in (for real cameras)\n\
         OR concrete mode/gesture recommendations (for smartphones).\n\
         \n\
         You MUST return valid JSON and nothing else. The system is in JSON mode.\n\
         \n\
         DEVICE TYPE DETECTED: {device_type}\n\
         \n\
         {details}\n\
         {heading}\n\
         {rules}\n\
         JSON SCHEMA YOU MUST FOLLOW (no extra top-level keys, no missing keys):\n\
         {schema}\n\
         GLOBAL JSON RULES (VERY IMPORTANT):\n\
         - Output MUST be a single JSON object only (no markdown, no backticks, no prose outside JSON).\n\
         - Start your reply with '{{' and end it with '}}'.\n\
         - The word \"json\" is already present in these instructions; you do not need to say it again.\n\
         \n\
         User input (for context):\n\
         \n\
         Scenario: {scenario}\n\
         Camera: {camera}\n\
         Lens: {lens}\n\
         Constraints: {constraints}\n\
         \n\
         Remember: you are in JSON mode, so your output must be a single, well-formed JSON object that matches the chosen schema.\n",
        device_type = profile.device_type.label(),
        details = device_details(raw_model, &profile),
        heading = guidance.context_heading,
        rules = guidance.rules,
        schema = guidance.schema,
        scenario = or_placeholder(scenario, "N/A"),
        camera = or_placeholder(camera_model, "N/A"),
        lens = or_placeholder(lens, "N/A"),
        constraints = or_placeholder(constraints, "None"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smartphone_prompt_uses_the_smartphone_schema() {
        let prompt = build_prompt(
            Some("sunset portrait"),
            Some("iPhone 15 Pro"),
            Some("main"),
            Some("handheld"),
        );

        assert!(prompt.contains("DEVICE TYPE DETECTED: SMARTPHONE"));
        assert!(prompt.contains("\"device_type\": \"SMARTPHONE\""));
        assert!(prompt.contains("Apple iPhone"));
        assert!(prompt.contains("SMARTPHONE CONTEXT:"));
        // Camera-dial schema keys must not leak into the phone schema.
        assert!(!prompt.contains("\"aperture\""));
        assert!(!prompt.contains("\"metering_mode\""));
        assert!(!prompt.contains("\"iso\""));
    }

    #[test]
    fn smartphone_rules_forbid_dialing_exposure_settings() {
        let prompt = build_prompt(None, Some("Pixel 8"), None, None);
        assert!(prompt.contains("NEVER instruct"));
        assert!(prompt.contains("CANNOT directly dial aperture, shutter speed, or ISO"));
        assert!(!prompt.contains("CAMERA RULES"));
    }

    #[test]
    fn camera_prompt_requires_dialable_values() {
        let prompt = build_prompt(
            Some("bird in flight"),
            Some("Canon EOS R5"),
            Some("100-400mm"),
            None,
        );

        assert!(prompt.contains("DEVICE TYPE DETECTED: CAMERA"));
        assert!(prompt.contains("\"device_type\": \"CAMERA\""));
        assert!(prompt.contains("\"iso\": 400"));
        assert!(prompt.contains("\"iso\" must be a NUMBER (not a string)."));
        assert!(prompt.contains("\"shutter_speed\" must be a STRING like \"1/125\" or \"0.5s\"."));
        assert!(!prompt.contains("SMARTPHONE RULES"));
        assert!(!prompt.contains("\"exposure_adjustment\""));
    }

    #[test]
    fn missing_fields_render_as_placeholders() {
        let prompt = build_prompt(None, None, None, None);
        assert!(prompt.contains("Raw camera string: \"N/A\""));
        assert!(prompt.contains("Detected family: Unknown camera"));
        assert!(prompt.contains("Scenario: N/A"));
        assert!(prompt.contains("Camera: N/A"));
        assert!(prompt.contains("Lens: N/A"));
        assert!(prompt.contains("Constraints: None"));
    }

    #[test]
    fn user_fields_are_echoed_verbatim() {
        let prompt = build_prompt(
            Some("waterfall, long exposure"),
            Some("Nikon Z6"),
            Some("24-70mm f/4"),
            Some("no tripod"),
        );
        assert!(prompt.contains("Scenario: waterfall, long exposure"));
        assert!(prompt.contains("Camera: Nikon Z6"));
        assert!(prompt.contains("Lens: 24-70mm f/4"));
        assert!(prompt.contains("Constraints: no tripod"));
    }

    #[test]
    fn global_json_rules_are_always_present() {
        for model in [Some("iPhone 14"), Some("Fujifilm X-T5"), None] {
            let prompt = build_prompt(None, model, None, None);
            assert!(prompt.contains("Output MUST be a single JSON object only"));
            assert!(prompt.contains("Start your reply with '{' and end it with '}'."));
        }
    }
}
