//! # Receipt Identifiers
//!
//! Identifier generation behind a trait so tests can script collisions.

use uuid::Uuid;

/// Produces candidate receipt identifiers.
///
/// Generators do not have to guarantee uniqueness; the store checks every
/// candidate and asks again on a collision.
pub trait IdGenerator: Send + Sync {
    /// Returns the next candidate identifier.
    fn generate(&self) -> String;
}

/// Random UUID v4 identifiers in hyphenated lowercase form
/// (`xxxxxxxx-xxxx-4xxx-xxxx-xxxxxxxxxxxx`).
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_generator_format() {
        let id = UuidGenerator.generate();
        let groups: Vec<&str> = id.split('-').collect();
        assert_eq!(
            groups.iter().map(|g| g.len()).collect::<Vec<_>>(),
            vec![8, 4, 4, 4, 12]
        );
        assert!(id
            .chars()
            .all(|c| c == '-' || c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_uuid_generator_is_random() {
        assert_ne!(UuidGenerator.generate(), UuidGenerator.generate());
    }
}
