//! Name-based exclusion of listings that are not restaurants.

use thiserror::Error;

/// Errors returned by [`Denylist::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DenylistError {
    /// No entries were supplied.
    #[error("denylist must contain at least one entry")]
    Empty,
    /// An entry was blank after trimming, which would match every name.
    #[error("denylist entry {index} is blank")]
    BlankEntry {
        /// Zero-based index of the blank entry.
        index: usize,
    },
}

/// Case-insensitive substring denylist applied to listing names.
///
/// Matching is plain substring containment on lowercased text, not exact
/// or token matching. It over-excludes: a restaurant whose name happens to
/// contain a denylisted chain name is dropped too. Callers that need finer
/// control should choose longer, more specific entries.
///
/// # Examples
/// ```
/// use mesa_core::Denylist;
///
/// # fn main() -> Result<(), mesa_core::DenylistError> {
/// let denylist = Denylist::new(["oxxo", "7-Eleven"])?;
/// assert!(denylist.matches("OXXO Restaurante"));
/// assert!(denylist.matches("7-eleven Agua Caliente"));
/// assert!(!denylist.matches("Tacos Salceados"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denylist {
    entries: Vec<String>,
}

impl Denylist {
    /// Validate and construct a denylist; entries are trimmed and lowercased.
    ///
    /// # Errors
    /// Returns [`DenylistError::Empty`] for an empty list and
    /// [`DenylistError::BlankEntry`] for blank entries.
    pub fn new<I, S>(entries: I) -> Result<Self, DenylistError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let trimmed = entry.as_ref().trim();
                if trimmed.is_empty() {
                    Err(DenylistError::BlankEntry { index })
                } else {
                    Ok(trimmed.to_lowercase())
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        if entries.is_empty() {
            return Err(DenylistError::Empty);
        }
        Ok(Self { entries })
    }

    /// Report whether `name` contains any entry, ignoring case.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        let lowered = name.to_lowercase();
        self.entries
            .iter()
            .any(|entry| lowered.contains(entry.as_str()))
    }

    /// Normalized entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("OXXO Restaurante", true)]
    #[case("oxxo", true)]
    #[case("Mini Oxxo Express", true)]
    #[case("Mariscos Ruben", false)]
    fn matches_by_case_insensitive_substring(#[case] name: &str, #[case] expected: bool) {
        let denylist = Denylist::new(["oxxo"]).expect("valid denylist");
        assert_eq!(denylist.matches(name), expected);
    }

    #[rstest]
    fn over_excludes_names_containing_an_entry() {
        let denylist = Denylist::new(["costco"]).expect("valid denylist");
        assert!(denylist.matches("Pizzería Costco-Style"));
    }

    #[rstest]
    fn entries_are_normalized() {
        let denylist = Denylist::new(["  Walmart ", "SORIANA"]).expect("valid denylist");
        assert_eq!(denylist.entries(), ["walmart", "soriana"]);
    }

    #[rstest]
    fn empty_lists_are_rejected() {
        assert_eq!(
            Denylist::new(Vec::<String>::new()),
            Err(DenylistError::Empty)
        );
    }

    #[rstest]
    fn blank_entries_are_rejected() {
        assert_eq!(
            Denylist::new(["oxxo", "  "]),
            Err(DenylistError::BlankEntry { index: 1 })
        );
    }
}
