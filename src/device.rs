#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    Smartphone,
    Camera,
}

impl DeviceType {
    /// Uppercase label used in prompt text and in the `device_type` result key.
    pub fn label(self) -> &'static str {
        match self {
            DeviceType::Smartphone => "SMARTPHONE",
            DeviceType::Camera => "CAMERA",
        }
    }
}

/// Classification result for a raw device-model string.
#[derive(Debug, Clone)]
pub struct DeviceProfile {
    pub device_type: DeviceType,
    pub family: String,
    pub platform: &'static str,
    pub example_features: &'static str,
}

struct SmartphoneRule {
    needles: &'static [&'static str],
    family: &'static str,
    platform: &'static str,
    example_features: &'static str,
}

// Evaluated in order, first match wins. A model string may contain needles
// from several rules ("Samsung Android Phone"), so the priority order here is
// part of the contract.
const SMARTPHONE_RULES: &[SmartphoneRule] = &[
    SmartphoneRule {
        needles: &["iphone"],
        family: "Apple iPhone",
        platform: "iOS",
        example_features: "Auto HDR, Night mode, Portrait mode, Live Photos, exposure slider, AE/AF lock, 0.5× / 1× / 2× / 3× lenses depending on model",
    },
    SmartphoneRule {
        needles: &["pixel"],
        family: "Google Pixel",
        platform: "Android",
        example_features: "Night Sight, HDR+, Portrait mode, exposure slider, tap-to-focus, 3s/10s timer",
    },
    SmartphoneRule {
        needles: &["samsung", "galaxy"],
        family: "Samsung Galaxy",
        platform: "Android",
        example_features: "Night mode, Pro mode on some models, Portrait mode, exposure slider, tap-to-focus, 3s/10s timer",
    },
    SmartphoneRule {
        needles: &["android", "oneplus", "xiaomi", "huawei"],
        family: "Android smartphone",
        platform: "Android",
        example_features: "Night mode, Portrait mode, HDR, exposure slider, tap-to-focus, 3s/10s timer",
    },
];

const CAMERA_FEATURES: &str =
    "Manual aperture, shutter speed, ISO controls, drive modes, metering modes, AF modes";

/// Map a free-text device-model string to a device profile.
///
/// Total over all inputs: anything that matches no smartphone rule is assumed
/// to be a dedicated camera, with the raw string echoed back as the family.
pub fn classify(raw_model: &str) -> DeviceProfile {
    let lowered = raw_model.to_lowercase();

    for rule in SMARTPHONE_RULES {
        if rule.needles.iter().any(|needle| lowered.contains(needle)) {
            return DeviceProfile {
                device_type: DeviceType::Smartphone,
                family: rule.family.to_string(),
                platform: rule.platform,
                example_features: rule.example_features,
            };
        }
    }

    DeviceProfile {
        device_type: DeviceType::Camera,
        family: if raw_model.is_empty() {
            "Unknown camera".to_string()
        } else {
            raw_model.to_string()
        },
        platform: "Camera",
        example_features: CAMERA_FEATURES,
    }
}
