use std::fmt;

/// Card details handed to authorize/purchase/verify/store
///
/// Every field may be empty: the processor, not the adapter, decides whether a
/// card is structurally valid.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CreditCard {
    pub number: String,
    pub month: Option<u8>,
    pub year: Option<u16>,
    pub verification_value: Option<String>,
    pub holder_name: Option<String>,
}

impl CreditCard {
    pub fn new(
        number: impl Into<String>,
        month: u8,
        year: u16,
        verification_value: impl Into<String>,
    ) -> Self {
        let number: String = number.into();
        Self {
            // Spaces and dashes are formatting, not card data
            number: number.chars().filter(char::is_ascii_digit).collect(),
            month: Some(month),
            year: Some(year),
            verification_value: Some(verification_value.into()),
            holder_name: None,
        }
    }

    /// A card with every field blank
    pub fn blank() -> Self {
        Self {
            verification_value: Some(String::new()),
            ..Self::default()
        }
    }

    pub fn with_holder_name(mut self, name: impl Into<String>) -> Self {
        self.holder_name = Some(name.into());
        self
    }

    /// Expiry month as the two digits the processor expects
    pub fn formatted_month(&self) -> String {
        self.month.map(|m| format!("{:02}", m)).unwrap_or_default()
    }

    /// Expiry year as four digits; two-digit years are taken as 20xx
    pub fn formatted_year(&self) -> String {
        match self.year {
            Some(y) if y < 100 => format!("{}", 2000 + y),
            Some(y) => format!("{:04}", y),
            None => String::new(),
        }
    }

    /// Last four digits of the card number, safe to log
    pub fn last_digits(&self) -> String {
        let skip = self.number.chars().count().saturating_sub(4);
        self.number.chars().skip(skip).collect()
    }
}

impl fmt::Debug for CreditCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreditCard")
            .field("number", &format_args!("XXXX{}", self.last_digits()))
            .field("month", &self.month)
            .field("year", &self.year)
            .field("verification_value", &self.verification_value.as_ref().map(|_| "[FILTERED]"))
            .field("holder_name", &self.holder_name)
            .finish()
    }
}
