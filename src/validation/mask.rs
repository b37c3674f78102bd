//! Input masks for Brazilian document and phone fields

/// Display mask applied to digit-only fields while typing.
///
/// `9` in a pattern is a digit slot; every other character is a literal
/// separator inserted only once a digit follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMask {
    /// CEP, `99999-999`
    PostalCode,
    /// CPF, `999.999.999-99`
    TaxId,
    /// Cell phone with area code, `(99) 9999-9999` or `(99) 99999-9999`
    CellPhone,
}

impl InputMask {
    /// Maximum number of digits the mask accepts
    pub fn max_digits(self) -> usize {
        match self {
            Self::PostalCode => 8,
            Self::TaxId | Self::CellPhone => 11,
        }
    }

    fn pattern(self, digit_count: usize) -> &'static str {
        match self {
            Self::PostalCode => "99999-999",
            Self::TaxId => "999.999.999-99",
            Self::CellPhone if digit_count > 10 => "(99) 99999-9999",
            Self::CellPhone => "(99) 9999-9999",
        }
    }

    /// Format `raw` through the mask, ignoring non-digits and dropping
    /// digits past [`InputMask::max_digits`]
    pub fn apply(self, raw: &str) -> String {
        let digits: Vec<char> = raw
            .chars()
            .filter(char::is_ascii_digit)
            .take(self.max_digits())
            .collect();
        let pattern = self.pattern(digits.len());

        let mut formatted = String::with_capacity(pattern.len());
        let mut remaining = digits.into_iter().peekable();
        for slot in pattern.chars() {
            if slot == '9' {
                match remaining.next() {
                    Some(digit) => formatted.push(digit),
                    None => break,
                }
            } else if remaining.peek().is_some() {
                formatted.push(slot);
            } else {
                break;
            }
        }
        formatted
    }
}
