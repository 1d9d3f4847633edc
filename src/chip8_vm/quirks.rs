use std::env;

/// Behaviors where this interpreter deliberately deviates from the common CHIP-8 reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chip8Quirks {
    /// Fx29 points I at `X * 5` (the operand nibble) instead of the glyph for `VX`.
    pub font_pointer_uses_operand: bool,
    /// Fx0A stores 1 in VX instead of the code of the pressed key.
    pub key_wait_stores_one: bool,
}

pub const ORIGINAL_QUIRKS: Chip8Quirks = Chip8Quirks {
    font_pointer_uses_operand: true,
    key_wait_stores_one: true,
};

pub const CORRECTED_QUIRKS: Chip8Quirks = Chip8Quirks {
    font_pointer_uses_operand: false,
    key_wait_stores_one: false,
};

impl Default for Chip8Quirks {
    fn default() -> Self {
        ORIGINAL_QUIRKS
    }
}

pub fn load_quirks_profile(profile: &str) -> Result<Chip8Quirks, String> {
    match profile.trim().to_ascii_lowercase().as_str() {
        "original" => Ok(ORIGINAL_QUIRKS),
        "corrected" => Ok(CORRECTED_QUIRKS),
        other => Err(format!(
            "invalid CHIP8_QUIRKS '{other}', expected one of: corrected, original"
        )),
    }
}

pub fn load_quirks_profile_from_env() -> Result<(String, Chip8Quirks), String> {
    let profile = env::var("CHIP8_QUIRKS").unwrap_or_else(|_| "original".to_owned());
    let normalized = profile.trim().to_ascii_lowercase();
    let quirks = load_quirks_profile(&normalized)?;
    Ok((normalized, quirks))
}
