use nutype::nutype;

pub const MAX_KEY_LENGTH: usize = 256;

/// Identifier of a stored secret, as handed over by the storage collaborator.
#[nutype(
    new_unchecked,
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_KEY_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Hash,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Key(String);

#[cfg(test)]
mod tests;
