use serde::{Deserialize, Serialize};

/// Address Verification System outcome in the standard single-letter code set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvsResult {
    pub code: String,
    pub message: Option<String>,
    /// `Y`, `N` or `X` (not supported); `None` when the code says nothing about the street
    pub street_match: Option<char>,
    pub postal_match: Option<char>,
}

impl AvsResult {
    pub fn new(code: impl Into<String>) -> Self {
        let code = code.into().to_uppercase();
        let letter = code.chars().next().unwrap_or(' ');
        Self {
            message: message_for(letter).map(str::to_string),
            street_match: street_match_for(letter),
            postal_match: postal_match_for(letter),
            code,
        }
    }

    /// Maps the processor's numeric `avsResult` (e.g. `"2 Neither postal code nor address match"`)
    /// to a standard code. Unknown values yield `None`.
    pub fn from_smartpay(raw: &str) -> Option<Self> {
        let prefix: String = raw.chars().take(2).collect();
        smartpay_code(prefix.trim()).map(AvsResult::new)
    }
}

fn smartpay_code(value: &str) -> Option<&'static str> {
    let code = match value {
        "0" => "R",  // Unknown
        "1" => "A",  // Address matches, postal code doesn't
        "2" => "N",  // Neither postal code nor address match
        "3" => "R",  // AVS unavailable
        "4" => "E",  // AVS not supported for this card type
        "5" => "U",  // No AVS data provided
        "6" => "Z",  // Postal code matches, address doesn't
        "7" => "D",  // Both postal code and address match
        "8" => "U",  // Address not checked, postal code unknown
        "9" => "B",  // Address matches, postal code unknown
        "10" => "N", // Address doesn't match, postal code unknown
        "11" => "U", // Postal code not checked, address unknown
        "12" => "B", // Address matches, postal code not checked
        "13" => "U", // Address doesn't match, postal code not checked
        "14" => "P", // Postal code matches, address unknown
        "15" => "P", // Postal code matches, address not checked
        "16" => "N", // Postal code doesn't match, address unknown
        "17" => "U", // Postal code doesn't match, address not checked
        "18" => "I", // Neither postal code nor address were checked
        _ => return None,
    };
    Some(code)
}

fn message_for(code: char) -> Option<&'static str> {
    let message = match code {
        'A' => "Street address matches, but postal code does not match.",
        'B' => "Street address matches, but postal code not verified.",
        'C' => "Street address and postal code do not match.",
        'D' => "Street address and postal code match.",
        'E' => "AVS data is invalid or AVS is not allowed for this card type.",
        'F' => "Card member's name does not match, but billing postal code matches.",
        'G' => "Non-U.S. issuing bank does not support AVS.",
        'I' => "Address not verified.",
        'M' => "Street address and postal code match.",
        'N' => "Street address and postal code do not match.",
        'P' => "Postal code matches, but street address not verified.",
        'R' => "System unavailable.",
        'S' => "U.S.-issuing bank does not support AVS.",
        'U' => "Address information unavailable.",
        'W' => "Street address does not match, but 9-digit postal code matches.",
        'X' => "Street address and 9-digit postal code match.",
        'Y' => "Street address and 5-digit postal code match.",
        'Z' => "Street address does not match, but 5-digit postal code matches.",
        _ => return None,
    };
    Some(message)
}

fn street_match_for(code: char) -> Option<char> {
    match code {
        'A' | 'B' | 'D' | 'M' | 'X' | 'Y' => Some('Y'),
        'C' | 'N' | 'W' | 'Z' => Some('N'),
        'G' | 'S' => Some('X'),
        _ => None,
    }
}

fn postal_match_for(code: char) -> Option<char> {
    match code {
        'D' | 'F' | 'M' | 'P' | 'W' | 'X' | 'Y' | 'Z' => Some('Y'),
        'A' | 'C' | 'N' => Some('N'),
        'G' | 'S' => Some('X'),
        _ => None,
    }
}
