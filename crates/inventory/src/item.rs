use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockline_core::{DomainError, ValueObject};

/// Separator between fields in the rendered form.
const FIELD_SEPARATOR: &str = ", ";

/// Inventory line: a name, a sell-by countdown and a quality score.
///
/// All fields are public and freely mutable. No bounds are enforced on
/// `sell_in` or `quality`; negative values are valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Days left until the sell-by point (negative once past due).
    pub sell_in: i64,
    pub quality: i64,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i64, quality: i64) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }
}

impl ValueObject for Item {}

/// Renders as `<name>, <sell_in>, <quality>`.
impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.name,
            self.sell_in,
            self.quality,
            sep = FIELD_SEPARATOR
        )
    }
}

/// Parses the rendered form back into an item.
///
/// Names may contain the separator themselves (`Sulfuras, Hand of Ragnaros`),
/// so the two numeric fields are taken from the right.
impl FromStr for Item {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.rsplitn(3, FIELD_SEPARATOR);
        let (Some(quality), Some(sell_in), Some(name)) = (parts.next(), parts.next(), parts.next())
        else {
            tracing::debug!(line = s, "rejected item line: missing fields");
            return Err(DomainError::validation(
                "expected `<name>, <sell_in>, <quality>`",
            ));
        };

        let sell_in = parse_field("sell_in", sell_in)?;
        let quality = parse_field("quality", quality)?;

        Ok(Self::new(name, sell_in, quality))
    }
}

fn parse_field(field: &str, raw: &str) -> Result<i64, DomainError> {
    raw.parse::<i64>().map_err(|e| {
        tracing::debug!(field, raw, error = %e, "rejected item line: bad integer");
        DomainError::validation(format!("{field} is not an integer: {raw:?}"))
    })
}
